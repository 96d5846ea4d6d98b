//! The table composable: slices, change handlers and the mounted engine.

use std::sync::Arc;

use super::{
    ColumnFiltersState, ColumnSizingState, ExpandedState, GroupingState, PaginationState, RowSelectionState,
    SortingState, TableEngine, TableSlices, Updater, VisibilityState, apply_updater,
};
use crate::columns::ColumnSet;
use crate::model::Entity;
use crate::toast::{Toast, ToastSink};

/// Message of the toast emitted by [`DataTable::clear_all_filters`].
pub const FILTERS_CLEARED_MESSAGE: &str = "All filters cleared";

/// Table state plus an optional mounted [`TableEngine`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use roster_lib::columns::{ColumnCallbacks, ColumnSet, TextColumn};
/// use roster_lib::table::{ColumnSort, DataTable};
/// use roster_lib::{Entity, FormatOptions, Record, ToastQueue};
///
/// let mut table = DataTable::new(Arc::new(ToastQueue::new()));
/// let columns = ColumnSet::new(
///     vec![TextColumn::new("name", "Name").into()],
///     ColumnCallbacks::new(),
///     FormatOptions::default(),
/// );
/// table.mount(columns, vec![Record::new(1).set("name", "Ploy"), Record::new(2).set("name", "Arthit")]);
/// table.on_sorting_change(vec![ColumnSort::asc("name")]);
///
/// let rows = table.engine().unwrap().row_model();
/// assert_eq!(rows[0].id().to_string(), "2");
/// ```
pub struct DataTable<T> {
    slices: TableSlices,
    engine: Option<TableEngine<T>>,
    toasts: Arc<dyn ToastSink>,
}

impl<T: Entity + 'static> DataTable<T> {
    pub fn new(toasts: Arc<dyn ToastSink>) -> Self {
        Self {
            slices: TableSlices::default(),
            engine: None,
            toasts,
        }
    }

    /// Start with a page size other than the default.
    pub fn with_page_size(self, page_size: usize) -> Self {
        self.slices.pagination.set(PaginationState {
            page_index: 0,
            page_size: page_size.max(1),
        });
        self.slices.pagination.clear_dirty();
        self
    }

    /// Mount columns and rows, replacing any previous engine.
    pub fn mount(&mut self, columns: ColumnSet<T>, data: Vec<T>) -> &TableEngine<T> {
        log::debug!("Mounting table with {} rows", data.len());
        self.engine.insert(TableEngine::new(columns, data, self.slices.clone()))
    }

    pub fn engine(&self) -> Option<&TableEngine<T>> {
        self.engine.as_ref()
    }

    /// Read access to the slices.
    pub fn state(&self) -> &TableSlices {
        &self.slices
    }

    pub fn on_sorting_change(&self, updater: impl Into<Updater<SortingState>>) {
        apply_updater(&self.slices.sorting, updater);
    }

    /// Filter changes go back to the first page.
    pub fn on_column_filters_change(&self, updater: impl Into<Updater<ColumnFiltersState>>) {
        apply_updater(&self.slices.column_filters, updater);
        self.reset_page_index();
    }

    pub fn on_global_filter_change(&self, updater: impl Into<Updater<String>>) {
        apply_updater(&self.slices.global_filter, updater);
        self.reset_page_index();
    }

    pub fn on_column_visibility_change(&self, updater: impl Into<Updater<VisibilityState>>) {
        apply_updater(&self.slices.column_visibility, updater);
    }

    pub fn on_row_selection_change(&self, updater: impl Into<Updater<RowSelectionState>>) {
        apply_updater(&self.slices.row_selection, updater);
    }

    pub fn on_expanded_change(&self, updater: impl Into<Updater<ExpandedState>>) {
        apply_updater(&self.slices.expanded, updater);
    }

    pub fn on_column_sizing_change(&self, updater: impl Into<Updater<ColumnSizingState>>) {
        apply_updater(&self.slices.column_sizing, updater);
    }

    pub fn on_grouping_change(&self, updater: impl Into<Updater<GroupingState>>) {
        apply_updater(&self.slices.grouping, updater);
    }

    pub fn on_pagination_change(&self, updater: impl Into<Updater<PaginationState>>) {
        apply_updater(&self.slices.pagination, updater);
    }

    fn reset_page_index(&self) {
        if self.slices.pagination.with(|p| p.page_index != 0) {
            apply_updater(
                &self.slices.pagination,
                Updater::func(|previous: &PaginationState| PaginationState {
                    page_index: 0,
                    ..*previous
                }),
            );
        }
    }

    /// Reset column filters and the global filter, then notify.
    ///
    /// Works before an engine is mounted; that case is only logged.
    pub fn clear_all_filters(&self) {
        if self.engine.is_none() {
            log::warn!("Clearing filters on a table with no mounted engine");
        }
        self.on_column_filters_change(Vec::new());
        self.on_global_filter_change(String::new());
        self.toasts.notify(Toast::info(FILTERS_CLEARED_MESSAGE));
    }
}
