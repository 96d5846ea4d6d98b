//! Row model derivation over mounted columns and rows.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{
    ColumnSort, ExpandedState, PaginationState, RowSelectionState, TableSlices, Updater, apply_updater,
};
use crate::columns::{ColumnDef, ColumnSet};
use crate::model::{Entity, RecordId};
use crate::state::State;

/// Direction of a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Rows sharing the same values in the grouping columns.
#[derive(Debug, Clone)]
pub struct RowGroup<T> {
    /// One display value per grouping column.
    pub key: Vec<String>,
    pub rows: Vec<Arc<T>>,
}

impl<T> RowGroup<T> {
    pub fn label(&self) -> String {
        self.key.join(" / ")
    }
}

/// Mounted columns and rows, reading the table slices.
pub struct TableEngine<T> {
    columns: ColumnSet<T>,
    data: State<Vec<Arc<T>>>,
    slices: TableSlices,
}

impl<T: Entity + 'static> TableEngine<T> {
    pub fn new(columns: ColumnSet<T>, data: Vec<T>, slices: TableSlices) -> Self {
        Self {
            columns,
            data: State::new(data.into_iter().map(Arc::new).collect()),
            slices,
        }
    }

    pub fn columns(&self) -> Arc<Vec<ColumnDef<T>>> {
        self.columns.columns()
    }

    pub fn column_set(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// Replace the rows.
    pub fn set_data(&self, data: Vec<T>) {
        self.data.set(data.into_iter().map(Arc::new).collect());
    }

    pub fn rows(&self) -> Vec<Arc<T>> {
        self.data.get()
    }

    /// Columns to show: visibility map entries, except that non-hideable
    /// columns are always shown.
    pub fn visible_columns(&self) -> Vec<ColumnDef<T>> {
        let visibility = self.slices.column_visibility.get();
        self.columns()
            .iter()
            .filter(|column| !column.enable_hiding || visibility.get(&column.id).copied().unwrap_or(true))
            .cloned()
            .collect()
    }

    /// Rows passing the column filters and the global filter.
    pub fn filtered_rows(&self) -> Vec<Arc<T>> {
        let columns = self.columns();
        let filters: Vec<(&ColumnDef<T>, String)> = self
            .slices
            .column_filters
            .get()
            .into_iter()
            .filter(|filter| !filter.value.trim().is_empty())
            .filter_map(|filter| match columns.iter().find(|c| c.id == filter.id) {
                Some(column) => Some((column, filter.value.trim().to_lowercase())),
                None => {
                    log::debug!("Ignoring filter on unknown column '{}'", filter.id);
                    None
                }
            })
            .collect();
        let global = self.slices.global_filter.get().trim().to_lowercase();

        let matches = |column: &ColumnDef<T>, row: &T, needle: &str| {
            column
                .value(row)
                .is_some_and(|value| value.display().to_lowercase().contains(needle))
        };

        self.rows()
            .into_iter()
            .filter(|row| filters.iter().all(|(column, needle)| matches(column, row, needle)))
            .filter(|row| {
                global.is_empty()
                    || columns
                        .iter()
                        .filter(|column| column.accessor_key.is_some())
                        .any(|column| matches(column, row, &global))
            })
            .collect()
    }

    /// Filtered rows in sort order. Sorts are applied left to right; ties keep
    /// their original order.
    pub fn sorted_rows(&self) -> Vec<Arc<T>> {
        let columns = self.columns();
        let sorting: Vec<(&ColumnDef<T>, bool)> = self
            .slices
            .sorting
            .get()
            .into_iter()
            .filter_map(|sort| {
                columns
                    .iter()
                    .find(|c| c.id == sort.id && c.enable_sorting)
                    .map(|column| (column, sort.desc))
            })
            .collect();

        let mut rows = self.filtered_rows();
        if sorting.is_empty() {
            return rows;
        }
        rows.sort_by(|a, b| {
            sorting
                .iter()
                .map(|(column, desc)| {
                    let left = column.value(a).unwrap_or_default();
                    let right = column.value(b).unwrap_or_default();
                    let ordering = left.compare(&right);
                    if *desc { ordering.reverse() } else { ordering }
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        rows
    }

    /// The current page of sorted rows.
    pub fn row_model(&self) -> Vec<Arc<T>> {
        let pagination = self.slices.pagination.get();
        let size = pagination.page_size.max(1);
        self.sorted_rows()
            .into_iter()
            .skip(pagination.page_index * size)
            .take(size)
            .collect()
    }

    /// Number of pages, at least one.
    pub fn page_count(&self) -> usize {
        let size = self.slices.pagination.get().page_size.max(1);
        self.filtered_rows().len().div_ceil(size).max(1)
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.slices.pagination.get().page_index
    }

    /// Sorted rows grouped by the grouping columns, in order of first
    /// appearance. Without grouping, a single group holds every row.
    pub fn grouped_rows(&self) -> Vec<RowGroup<T>> {
        let columns = self.columns();
        let grouping: Vec<&ColumnDef<T>> = self
            .slices
            .grouping
            .get()
            .iter()
            .filter_map(|id| columns.iter().find(|c| &c.id == id))
            .collect();

        let mut groups: Vec<RowGroup<T>> = Vec::new();
        for row in self.sorted_rows() {
            let key: Vec<String> = grouping
                .iter()
                .map(|column| column.value(&row).map(|v| v.display()).unwrap_or_default())
                .collect();
            match groups.iter_mut().find(|group| group.key == key) {
                Some(group) => group.rows.push(row),
                None => groups.push(RowGroup { key, rows: vec![row] }),
            }
        }
        groups
    }

    /// Rows whose id is selected.
    pub fn selected_rows(&self) -> Vec<Arc<T>> {
        let selection = self.slices.row_selection.get();
        self.rows()
            .into_iter()
            .filter(|row| selection.contains(&row.id()))
            .collect()
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.slices.expanded.with(|expanded| expanded.contains(id))
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.slices.sorting.with(|sorting| {
            sorting.iter().find(|s| s.id == column_id).map(|s| {
                if s.desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                }
            })
        })
    }

    /// Cycle a column through ascending, descending and unsorted.
    ///
    /// Without `multi` the column replaces any other sort. Returns `false`
    /// when the column is unknown or not sortable.
    pub fn toggle_sorting(&self, column_id: &str, multi: bool) -> bool {
        let sortable = self
            .columns()
            .iter()
            .any(|c| c.id == column_id && c.enable_sorting);
        if !sortable {
            return false;
        }

        let id = column_id.to_string();
        apply_updater(
            &self.slices.sorting,
            Updater::func(move |previous: &Vec<ColumnSort>| {
                let current = previous.iter().find(|s| s.id == id).map(|s| s.desc);
                let mut next: Vec<ColumnSort> = if multi {
                    previous.iter().filter(|s| s.id != id).cloned().collect()
                } else {
                    Vec::new()
                };
                match current {
                    None => next.push(ColumnSort::asc(id)),
                    Some(false) => next.push(ColumnSort::desc(id)),
                    Some(true) => {}
                }
                next
            }),
        );
        true
    }

    pub fn toggle_row_selected(&self, id: RecordId) {
        apply_updater(
            &self.slices.row_selection,
            Updater::func(move |previous: &RowSelectionState| {
                let mut next = previous.clone();
                if !next.remove(&id) {
                    next.insert(id);
                }
                next
            }),
        );
    }

    pub fn toggle_expanded(&self, id: RecordId) {
        apply_updater(
            &self.slices.expanded,
            Updater::func(move |previous: &ExpandedState| {
                let mut next = previous.clone();
                if !next.remove(&id) {
                    next.insert(id);
                }
                next
            }),
        );
    }

    /// Move to a page, clamped to the last page.
    pub fn set_page_index(&self, page_index: usize) {
        let last = self.page_count() - 1;
        apply_updater(
            &self.slices.pagination,
            Updater::func(move |previous: &PaginationState| PaginationState {
                page_index: page_index.min(last),
                ..*previous
            }),
        );
    }
}
