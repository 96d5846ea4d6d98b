//! Built, renderable column definitions.

use std::fmt;
use std::sync::Arc;

use super::{Cell, ColumnCallbacks, RowAction, SortHandler};
use crate::model::{Entity, Value, get_nested_value};

/// Renders one row into a cell.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Cell + Send + Sync>;

/// Column header.
#[derive(Clone)]
pub enum Header {
    /// Plain label.
    Static(String),
    /// Label that requests a sort on `key` when activated.
    Sortable {
        label: String,
        key: String,
        on_sort: SortHandler,
    },
}

impl Header {
    /// The header label.
    pub fn label(&self) -> &str {
        match self {
            Header::Static(label) => label,
            Header::Sortable { label, .. } => label,
        }
    }

    /// Whether activating this header requests a sort.
    pub fn is_sortable(&self) -> bool {
        matches!(self, Header::Sortable { .. })
    }

    /// Activate the header. Returns `false` for static headers.
    pub fn activate(&self) -> bool {
        match self {
            Header::Static(_) => false,
            Header::Sortable { key, on_sort, .. } => {
                log::debug!("Sort requested on '{}'", key);
                on_sort(key);
                true
            }
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Static(label) => f.debug_tuple("Static").field(label).finish(),
            Header::Sortable { label, key, .. } => f
                .debug_struct("Sortable")
                .field("label", label)
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

/// Display metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Name shown in column pickers.
    pub display_name: String,
    /// Style class applied to every cell of the column.
    pub class_name: Option<String>,
}

/// A realized column, produced by [`create_columns`](super::create_columns).
///
/// Definitions are immutable; when configs or callbacks change a new set is
/// built (see [`ColumnSet`](super::ColumnSet)).
pub struct ColumnDef<T> {
    /// Stable column id: the field key, or `expand` / `actions`.
    pub id: String,
    /// Dotted path the column reads, if any.
    pub accessor_key: Option<String>,
    pub header: Header,
    pub cell: CellRenderer<T>,
    pub enable_sorting: bool,
    pub enable_hiding: bool,
    pub meta: ColumnMeta,
    /// Actions offered by an action column; empty elsewhere.
    pub actions: Vec<RowAction>,
    pub(crate) callbacks: ColumnCallbacks<T>,
}

impl<T: Entity> ColumnDef<T> {
    /// Render a row.
    pub fn render(&self, row: &T) -> Cell {
        (self.cell)(row)
    }

    /// Raw value the column reads from a row, used for sorting and filtering.
    pub fn value(&self, row: &T) -> Option<Value> {
        self.accessor_key
            .as_deref()
            .and_then(|key| get_nested_value(row, key))
    }

    /// Activate the header.
    pub fn activate_header(&self) -> bool {
        self.header.activate()
    }

    /// Press an action button on `row`.
    ///
    /// Returns `false` when this column does not offer the action or no
    /// callback handles it.
    pub fn trigger(&self, action: &RowAction, row: &T) -> bool {
        if !self.actions.contains(action) {
            return false;
        }
        let callbacks = &self.callbacks;
        let handler = match action {
            RowAction::View => callbacks.on_view.as_ref(),
            RowAction::Edit => callbacks.on_edit.as_ref(),
            RowAction::Delete => callbacks.on_delete.as_ref(),
            RowAction::Download => callbacks.on_download.as_ref(),
            RowAction::Custom { key, .. } => {
                return match &callbacks.on_custom_action {
                    Some(handler) => {
                        handler(key, row);
                        true
                    }
                    None => false,
                };
            }
        };
        match handler {
            Some(handler) => {
                handler(row);
                true
            }
            None => false,
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            accessor_key: self.accessor_key.clone(),
            header: self.header.clone(),
            cell: Arc::clone(&self.cell),
            enable_sorting: self.enable_sorting,
            enable_hiding: self.enable_hiding,
            meta: self.meta.clone(),
            actions: self.actions.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor_key", &self.accessor_key)
            .field("header", &self.header)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_hiding", &self.enable_hiding)
            .field("meta", &self.meta)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
