//! Row and header callbacks handed to the column builder.

use std::fmt;
use std::sync::Arc;

/// Called with the field key of the column whose header was activated.
pub type SortHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Called with the row an action button was pressed on.
pub type RowHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Called with the custom action key and the row.
pub type CustomActionHandler<T> = Arc<dyn Fn(&str, &T) + Send + Sync>;

/// Optional callbacks wiring columns to page behaviour.
///
/// A missing callback disables the matching affordance: no sort header
/// without `on_sort`, no edit button without `on_edit`, and so on.
pub struct ColumnCallbacks<T> {
    pub on_sort: Option<SortHandler>,
    pub on_view: Option<RowHandler<T>>,
    pub on_edit: Option<RowHandler<T>>,
    pub on_delete: Option<RowHandler<T>>,
    pub on_download: Option<RowHandler<T>>,
    pub on_custom_action: Option<CustomActionHandler<T>>,
}

impl<T> ColumnCallbacks<T> {
    /// No callbacks: static headers, no action buttons.
    pub fn new() -> Self {
        Self {
            on_sort: None,
            on_view: None,
            on_edit: None,
            on_delete: None,
            on_download: None,
            on_custom_action: None,
        }
    }

    pub fn on_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_sort = Some(Arc::new(f));
        self
    }

    pub fn on_view<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_view = Some(Arc::new(f));
        self
    }

    pub fn on_edit<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_edit = Some(Arc::new(f));
        self
    }

    pub fn on_delete<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_delete = Some(Arc::new(f));
        self
    }

    pub fn on_download<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_download = Some(Arc::new(f));
        self
    }

    pub fn on_custom_action<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &T) + Send + Sync + 'static,
    {
        self.on_custom_action = Some(Arc::new(f));
        self
    }

    /// Whether a sort callback is registered.
    pub fn can_sort(&self) -> bool {
        self.on_sort.is_some()
    }
}

impl<T> Default for ColumnCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ColumnCallbacks<T> {
    fn clone(&self) -> Self {
        Self {
            on_sort: self.on_sort.clone(),
            on_view: self.on_view.clone(),
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
            on_download: self.on_download.clone(),
            on_custom_action: self.on_custom_action.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnCallbacks")
            .field("on_sort", &self.on_sort.is_some())
            .field("on_view", &self.on_view.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_download", &self.on_download.is_some())
            .field("on_custom_action", &self.on_custom_action.is_some())
            .finish()
    }
}
