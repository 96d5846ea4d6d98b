//! Value-or-function state updates.

use std::fmt;

use crate::state::State;

/// A new state value, or a function computing it from the previous one.
pub enum Updater<T> {
    Value(T),
    Fn(Box<dyn FnOnce(&T) -> T + Send>),
}

impl<T> Updater<T> {
    /// Wraps an update function.
    pub fn func<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + Send + 'static,
    {
        Updater::Fn(Box::new(f))
    }

    /// Resolve against the previous value.
    pub fn resolve(self, previous: &T) -> T {
        match self {
            Updater::Value(value) => value,
            Updater::Fn(f) => f(previous),
        }
    }
}

impl<T> From<T> for Updater<T> {
    fn from(value: T) -> Self {
        Updater::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Updater::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Apply an updater to a state cell.
pub fn apply_updater<T>(state: &State<T>, updater: impl Into<Updater<T>>) {
    match updater.into() {
        Updater::Value(value) => state.set(value),
        Updater::Fn(f) => state.update(|current| *current = f(current)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_replaces() {
        let state = State::new(vec![1, 2]);
        apply_updater(&state, vec![3]);
        assert_eq!(state.get(), vec![3]);
        assert!(state.is_dirty());
    }

    #[test]
    fn test_function_sees_previous() {
        let state = State::new(vec![1, 2]);
        apply_updater(
            &state,
            Updater::func(|prev: &Vec<i32>| prev.iter().map(|v| v * 10).collect()),
        );
        assert_eq!(state.get(), vec![10, 20]);
    }
}
