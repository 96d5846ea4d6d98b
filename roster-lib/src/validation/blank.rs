//! Default emptiness check used by the `required` flag.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::Value;

/// Types with a notion of "no input".
///
/// Strings are blank when they trim to nothing, collections when they have no
/// entries, options when they are `None`. Numbers, dates and booleans are
/// never blank.
pub trait Blank {
    /// Returns `true` when the value counts as empty input.
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for &'static str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        Value::is_blank(self)
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(impl Blank for $ty {
            fn is_blank(&self) -> bool {
                false
            }
        })*
    };
}

never_blank!(bool, i32, i64, u32, u64, usize, f64, Decimal, NaiveDate);
