//! Rendered cell output.

use serde::Deserialize;
use serde::Serialize;

/// A row-level action offered by an action column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Download,
    /// Page-specific action dispatched through `on_custom_action`.
    Custom { key: String, label: String },
}

impl RowAction {
    /// Button label.
    pub fn label(&self) -> &str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Download => "Download",
            RowAction::Custom { label, .. } => label,
        }
    }

    /// Default actions of an action column.
    pub fn defaults() -> Vec<RowAction> {
        vec![RowAction::View, RowAction::Edit, RowAction::Delete]
    }
}

/// How a cell should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text.
    Text,
    /// Fixed-width text (ids).
    Monospace,
    /// Status badge.
    Badge,
    /// Row expander toggle.
    Expander,
    /// Action buttons, in display order.
    Actions(Vec<RowAction>),
}

/// The rendered content of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Presentation hint.
    pub kind: CellKind,
    /// Style class (for example a status colour).
    pub class_name: Option<String>,
}

impl Cell {
    /// Plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CellKind::Text,
            class_name: None,
        }
    }

    /// Monospace cell.
    pub fn monospace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CellKind::Monospace,
            class_name: None,
        }
    }

    /// Status badge with a style class.
    pub fn badge(label: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            kind: CellKind::Badge,
            class_name: Some(class_name.into()),
        }
    }

    /// Expander toggle.
    pub fn expander() -> Self {
        Self {
            text: "▸".to_string(),
            kind: CellKind::Expander,
            class_name: None,
        }
    }

    /// Action buttons; the text lists the labels.
    pub fn actions(actions: Vec<RowAction>) -> Self {
        let text = actions
            .iter()
            .map(RowAction::label)
            .collect::<Vec<_>>()
            .join(" | ");
        Self {
            text,
            kind: CellKind::Actions(actions),
            class_name: None,
        }
    }

    /// Sets the style class.
    pub fn with_class(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name;
        self
    }
}
