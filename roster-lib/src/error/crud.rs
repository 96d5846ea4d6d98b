//! CRUD operation errors

/// Errors produced by a [`CrudBackend`](crate::crud::CrudBackend) or a custom
/// action handler.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// No route is registered under the requested name.
    #[error("Unknown route '{0}'")]
    UnknownRoute(String),

    /// The route resolved to an unusable URL.
    #[error("Invalid URL for route '{route}': {source}")]
    Url {
        route: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request to '{route}' failed with status {status}")]
    Status { route: String, status: u16 },

    /// A custom action handler reported a failure.
    #[error("{0}")]
    Action(String),
}

impl CrudError {
    /// Creates an action error from any message.
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action(message.into())
    }
}
