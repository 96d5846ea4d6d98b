//! Collaborators of [`CrudOperations`](super::CrudOperations).

use async_trait::async_trait;

use crate::error::CrudError;
use crate::model::RecordId;

/// Where CRUD requests go.
#[async_trait]
pub trait CrudBackend: Send + Sync {
    /// Navigate to a named route for an entity (`citizens.show`).
    fn navigate(&self, route: &str, id: &RecordId) -> Result<(), CrudError>;

    /// Issue a delete request on a named route (`citizens.destroy`).
    async fn delete(&self, route: &str, id: &RecordId) -> Result<(), CrudError>;
}

/// Asks the user a yes/no question.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Returns `true` when the user accepts.
    async fn confirm(&self, message: &str) -> bool;
}

/// A prompt that always gives the same answer (`--yes` style flags, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Prompt for FixedAnswer {
    async fn confirm(&self, message: &str) -> bool {
        log::debug!("Auto-answering '{}' with {}", message, self.0);
        self.0
    }
}
