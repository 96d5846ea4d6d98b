//! Table state: sorting, filtering, grouping and pagination over a column set.
//!
//! A [`DataTable`] owns one [`State`](crate::State) per slice. Every change
//! goes through an `on_*_change` handler taking an [`Updater`], either a new
//! value or a function of the previous one. Once columns and rows are
//! mounted, the [`TableEngine`] derives the visible row model from the slices.

mod data_table;
mod engine;
mod slices;
mod updater;

pub use data_table::*;
pub use engine::*;
pub use slices::*;
pub use updater::*;
