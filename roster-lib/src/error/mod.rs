//! Error types

mod column;
mod crud;
mod record;
mod rule;

pub use column::*;
pub use crud::*;
pub use record::*;
pub use rule::*;
