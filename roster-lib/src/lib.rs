//! Roster data-table and form library
//!
//! Declarative table columns, field/form validation and generic CRUD actions
//! for record-management screens (citizens, payments, users).

pub mod columns;
pub mod crud;
pub mod error;
pub mod format;
pub mod model;
pub mod state;
pub mod table;
pub mod toast;
pub mod validation;

pub use format::FormatOptions;
pub use model::{Entity, Record, RecordId, Value};
pub use state::State;
pub use toast::{Toast, ToastLevel, ToastQueue, ToastSink};
