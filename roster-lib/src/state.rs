use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared state cell with interior mutability and change tracking.
///
/// `State<T>` is the reactive building block of the library: field
/// validators keep their value and status in one, the table keeps each of its
/// slices in one, and [`ColumnSet`](crate::columns::ColumnSet) uses the dirty
/// flag to decide when columns must be rebuilt. Clones share the same cell.
///
/// # Example
///
/// ```
/// use roster_lib::State;
///
/// let count = State::new(0);
/// count.update(|v| *v += 1);
/// assert_eq!(count.get(), 1);
/// assert!(count.take_dirty());
/// assert!(!count.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Clear the dirty flag, returning whether it was set
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
