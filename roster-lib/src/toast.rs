//! Toast notifications emitted by CRUD actions and table filters.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Short lowercase label, used by log output and the CLI.
    pub fn label(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

/// A toast notification.
///
/// Toasts are fire-and-forget messages for the user. How they are shown is up
/// to the [`ToastSink`] they are handed to.
///
/// # Example
///
/// ```
/// use roster_lib::toast::{Toast, ToastLevel};
///
/// let toast = Toast::success("Citizen deleted");
/// assert_eq!(toast.level, ToastLevel::Success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The text to display.
    pub message: String,
    /// Severity.
    pub level: ToastLevel,
    /// How long to show the toast.
    pub duration: Duration,
}

impl Toast {
    fn with_level(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, ToastLevel::Info)
    }

    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(message, ToastLevel::Success)
    }

    /// Create a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, ToastLevel::Warning)
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, ToastLevel::Error)
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Destination for toast notifications.
pub trait ToastSink: Send + Sync {
    /// Show (or record) a toast.
    fn notify(&self, toast: Toast);
}

/// A sink that collects toasts in memory until drained.
///
/// Cloning shares the underlying queue.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all queued toasts.
    pub fn drain(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    /// Return a copy of the queued toasts without removing them.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of queued toasts with the given level.
    pub fn count(&self, level: ToastLevel) -> usize {
        self.toasts
            .lock()
            .map(|guard| guard.iter().filter(|t| t.level == level).count())
            .unwrap_or(0)
    }
}

impl ToastSink for ToastQueue {
    fn notify(&self, toast: Toast) {
        if let Ok(mut guard) = self.toasts.lock() {
            guard.push(toast);
        }
    }
}

/// A sink that forwards toasts to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogToasts;

impl ToastSink for LogToasts {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => log::error!("[toast] {}", toast.message),
            ToastLevel::Warning => log::warn!("[toast] {}", toast.message),
            ToastLevel::Info | ToastLevel::Success => {
                log::info!("[toast:{}] {}", toast.level.label(), toast.message)
            }
        }
    }
}
