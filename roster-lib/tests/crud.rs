//! Tests for the CRUD dispatcher against a recording backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_lib::crud::{CrudBackend, CrudMessages, CrudOperations, CrudOptions, DeleteOutcome, FixedAnswer, Prompt};
use roster_lib::error::CrudError;
use roster_lib::{Record, RecordId, ToastLevel, ToastQueue};

#[derive(Default)]
struct RecordingBackend {
    fail_delete: bool,
    calls: Mutex<Vec<String>>,
}

impl RecordingBackend {
    fn failing() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CrudBackend for RecordingBackend {
    fn navigate(&self, route: &str, id: &RecordId) -> Result<(), CrudError> {
        self.calls.lock().unwrap().push(format!("navigate {} {}", route, id));
        Ok(())
    }

    async fn delete(&self, route: &str, id: &RecordId) -> Result<(), CrudError> {
        self.calls.lock().unwrap().push(format!("delete {} {}", route, id));
        if self.fail_delete {
            Err(CrudError::Status {
                route: route.to_string(),
                status: 500,
            })
        } else {
            Ok(())
        }
    }
}

struct RecordingPrompt {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

#[async_trait]
impl Prompt for RecordingPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.questions.lock().unwrap().push(message.to_string());
        self.answer
    }
}

fn citizen() -> Record {
    Record::new(42).set("name", "Somchai Jaidee")
}

fn operations(
    backend: &Arc<RecordingBackend>,
    prompt: Arc<dyn Prompt>,
    toasts: &ToastQueue,
) -> CrudOperations<Record> {
    CrudOperations::new(
        CrudOptions::new("citizens", "citizen"),
        backend.clone(),
        prompt,
        Arc::new(toasts.clone()),
    )
}

#[tokio::test]
async fn test_declined_delete_issues_no_request() {
    let backend = Arc::new(RecordingBackend::default());
    let toasts = ToastQueue::new();
    let prompt = Arc::new(RecordingPrompt {
        answer: false,
        questions: Mutex::new(Vec::new()),
    });
    let ops = operations(&backend, prompt.clone(), &toasts);

    let outcome = ops.delete_item(&citizen()).await;

    assert!(matches!(outcome, DeleteOutcome::Cancelled));
    assert!(backend.calls().is_empty());
    assert!(toasts.snapshot().is_empty());
    assert_eq!(
        *prompt.questions.lock().unwrap(),
        vec!["Are you sure you want to delete citizen \"Somchai Jaidee\"?".to_string()]
    );
}

#[tokio::test]
async fn test_accepted_delete_success() {
    let backend = Arc::new(RecordingBackend::default());
    let toasts = ToastQueue::new();
    let ops = operations(&backend, Arc::new(FixedAnswer(true)), &toasts);

    let outcome = ops.delete_item(&citizen()).await;

    assert!(outcome.is_deleted());
    assert_eq!(backend.calls(), vec!["delete citizens.destroy 42".to_string()]);
    assert_eq!(toasts.count(ToastLevel::Success), 1);
    assert_eq!(toasts.count(ToastLevel::Error), 0);
    assert_eq!(toasts.snapshot()[0].message, "citizen \"Somchai Jaidee\" was deleted");
}

#[tokio::test]
async fn test_accepted_delete_failure() {
    let backend = Arc::new(RecordingBackend::failing());
    let toasts = ToastQueue::new();
    let ops = operations(&backend, Arc::new(FixedAnswer(true)), &toasts);

    let outcome = ops.delete_item(&citizen()).await;

    assert!(matches!(outcome, DeleteOutcome::Failed(CrudError::Status { status: 500, .. })));
    assert_eq!(backend.calls().len(), 1);
    assert_eq!(toasts.count(ToastLevel::Success), 0);
    assert_eq!(toasts.count(ToastLevel::Error), 1);
}

#[tokio::test]
async fn test_custom_messages() {
    let backend = Arc::new(RecordingBackend::default());
    let toasts = ToastQueue::new();
    let messages = CrudMessages {
        delete_success: "Removed {name}".to_string(),
        ..CrudMessages::default()
    };
    let ops = CrudOperations::new(
        CrudOptions::new("citizens", "citizen").messages(messages),
        backend.clone(),
        Arc::new(FixedAnswer(true)),
        Arc::new(toasts.clone()),
    );

    ops.delete_item(&Record::new(7)).await;
    assert_eq!(toasts.drain()[0].message, "Removed ID: 7");
}

#[test]
fn test_view_and_edit_navigate() {
    let backend = Arc::new(RecordingBackend::default());
    let toasts = ToastQueue::new();
    let ops = operations(&backend, Arc::new(FixedAnswer(false)), &toasts);

    ops.view_item(&citizen()).unwrap();
    ops.edit_item(&citizen()).unwrap();

    assert_eq!(
        backend.calls(),
        vec![
            "navigate citizens.show 42".to_string(),
            "navigate citizens.edit 42".to_string()
        ]
    );
}
