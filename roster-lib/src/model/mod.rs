//! Record model

mod entity;
mod path;
mod record;
mod value;

pub use entity::*;
pub use path::*;
pub use record::*;
pub use value::*;
