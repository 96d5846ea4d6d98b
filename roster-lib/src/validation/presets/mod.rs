//! Ready-made validators built from rule sets.

mod birth_date;
mod text;
mod thai_id;

pub use birth_date::*;
pub use text::*;
pub use thai_id::*;
