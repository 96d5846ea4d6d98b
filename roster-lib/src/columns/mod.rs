//! Declarative table columns.
//!
//! A page describes its columns as [`ColumnConfig`] values (usually loaded
//! from JSON) and hands them, together with row [`ColumnCallbacks`], to
//! [`create_columns`]. The result is a list of [`ColumnDef`]s that a table
//! engine can render: each has a header (static or sort-activating), a cell
//! renderer producing a [`Cell`], and sorting/hiding flags.
//!
//! # Example
//!
//! ```
//! use roster_lib::columns::{ColumnCallbacks, create_columns_from_json};
//! use roster_lib::{FormatOptions, Record};
//!
//! let json = r#"[
//!     { "type": "id", "key": "id", "header": "ID" },
//!     { "type": "text", "key": "first_name", "header": "First name", "maxLength": 10 },
//!     { "type": "number", "key": "amount", "header": "Amount", "currency": true }
//! ]"#;
//!
//! let columns = create_columns_from_json::<Record>(
//!     json,
//!     &ColumnCallbacks::new(),
//!     &FormatOptions::default(),
//! )
//! .unwrap();
//!
//! let row = Record::new(1).set("first_name", "Somchai").set("amount", 1500i64);
//! assert_eq!(columns[2].render(&row).text, "฿1,500.00");
//! ```

mod builder;
mod callbacks;
mod cell;
mod config;
mod definition;
mod set;

pub use builder::*;
pub use callbacks::*;
pub use cell::*;
pub use config::*;
pub use definition::*;
pub use set::*;
