//! The independently owned state slices of a table.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::RecordId;
use crate::state::State;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

impl ColumnSort {
    pub fn asc(id: impl Into<String>) -> Self {
        Self { id: id.into(), desc: false }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self { id: id.into(), desc: true }
    }
}

/// Case-insensitive substring filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub id: String,
    pub value: String,
}

impl ColumnFilter {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub type SortingState = Vec<ColumnSort>;
pub type ColumnFiltersState = Vec<ColumnFilter>;
/// Column id → visible. Missing ids are visible.
pub type VisibilityState = BTreeMap<String, bool>;
pub type RowSelectionState = BTreeSet<RecordId>;
pub type ExpandedState = BTreeSet<RecordId>;
/// Column id → width in cells.
pub type ColumnSizingState = BTreeMap<String, u16>;
/// Column ids to group by, outermost first.
pub type GroupingState = Vec<String>;

/// Shared handles to every slice. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct TableSlices {
    pub(crate) sorting: State<SortingState>,
    pub(crate) column_filters: State<ColumnFiltersState>,
    pub(crate) global_filter: State<String>,
    pub(crate) column_visibility: State<VisibilityState>,
    pub(crate) row_selection: State<RowSelectionState>,
    pub(crate) expanded: State<ExpandedState>,
    pub(crate) column_sizing: State<ColumnSizingState>,
    pub(crate) grouping: State<GroupingState>,
    pub(crate) pagination: State<PaginationState>,
}

impl TableSlices {
    pub fn sorting(&self) -> SortingState {
        self.sorting.get()
    }

    pub fn column_filters(&self) -> ColumnFiltersState {
        self.column_filters.get()
    }

    pub fn global_filter(&self) -> String {
        self.global_filter.get()
    }

    pub fn column_visibility(&self) -> VisibilityState {
        self.column_visibility.get()
    }

    pub fn row_selection(&self) -> RowSelectionState {
        self.row_selection.get()
    }

    pub fn expanded(&self) -> ExpandedState {
        self.expanded.get()
    }

    pub fn column_sizing(&self) -> ColumnSizingState {
        self.column_sizing.get()
    }

    pub fn grouping(&self) -> GroupingState {
        self.grouping.get()
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination.get()
    }

    /// Whether any slice changed since the last call.
    pub fn take_changes(&self) -> bool {
        // Every flag is cleared, so no short-circuiting.
        [
            self.sorting.take_dirty(),
            self.column_filters.take_dirty(),
            self.global_filter.take_dirty(),
            self.column_visibility.take_dirty(),
            self.row_selection.take_dirty(),
            self.expanded.take_dirty(),
            self.column_sizing.take_dirty(),
            self.grouping.take_dirty(),
            self.pagination.take_dirty(),
        ]
        .contains(&true)
    }
}
