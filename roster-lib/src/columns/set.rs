//! Memoised column definitions that rebuild when their inputs change.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ColumnCallbacks, ColumnConfig, ColumnDef, create_columns};
use crate::format::FormatOptions;
use crate::model::Entity;
use crate::state::State;

/// Column configs and callbacks plus the columns built from them.
///
/// [`columns`](Self::columns) returns the cached definitions and only rebuilds
/// after [`set_configs`](Self::set_configs), [`set_callbacks`](Self::set_callbacks)
/// or [`set_options`](Self::set_options) marked an input dirty.
pub struct ColumnSet<T> {
    configs: State<Vec<ColumnConfig>>,
    callbacks: State<ColumnCallbacks<T>>,
    options: State<FormatOptions>,
    columns: State<Arc<Vec<ColumnDef<T>>>>,
    builds: Arc<AtomicUsize>,
}

impl<T: Entity + 'static> ColumnSet<T> {
    pub fn new(configs: Vec<ColumnConfig>, callbacks: ColumnCallbacks<T>, options: FormatOptions) -> Self {
        let columns = create_columns(&configs, &callbacks, &options);
        Self {
            configs: State::new(configs),
            callbacks: State::new(callbacks),
            options: State::new(options),
            columns: State::new(Arc::new(columns)),
            builds: Arc::new(AtomicUsize::new(1)),
        }
    }

    /// Current column definitions, rebuilt first if an input changed.
    pub fn columns(&self) -> Arc<Vec<ColumnDef<T>>> {
        let configs_changed = self.configs.take_dirty();
        let callbacks_changed = self.callbacks.take_dirty();
        let options_changed = self.options.take_dirty();

        if configs_changed || callbacks_changed || options_changed {
            let rebuilt = self.configs.with(|configs| {
                self.callbacks
                    .with(|callbacks| self.options.with(|options| create_columns(configs, callbacks, options)))
            });
            self.columns.set(Arc::new(rebuilt));
            self.builds.fetch_add(1, Ordering::SeqCst);
        }
        self.columns.get()
    }

    pub fn set_configs(&self, configs: Vec<ColumnConfig>) {
        self.configs.set(configs);
    }

    /// Edit the configs in place.
    pub fn update_configs(&self, f: impl FnOnce(&mut Vec<ColumnConfig>)) {
        self.configs.update(f);
    }

    pub fn set_callbacks(&self, callbacks: ColumnCallbacks<T>) {
        self.callbacks.set(callbacks);
    }

    pub fn set_options(&self, options: FormatOptions) {
        self.options.set(options);
    }

    /// How many times the definitions have been built.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            configs: self.configs.clone(),
            callbacks: self.callbacks.clone(),
            options: self.options.clone(),
            columns: self.columns.clone(),
            builds: Arc::clone(&self.builds),
        }
    }
}
