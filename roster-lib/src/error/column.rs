//! Column configuration errors

/// Error raised while turning raw column configs into column definitions.
///
/// These are developer mistakes, not runtime conditions, so callers are
/// expected to surface them immediately rather than recover.
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    /// The `type` discriminant names a column kind that does not exist.
    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),

    /// The config object has no string `type` discriminant.
    #[error("Column config at index {index} has no 'type' field")]
    MissingType { index: usize },

    /// The discriminant is known but the remaining fields are malformed.
    #[error("Invalid '{column_type}' column config: {source}")]
    Invalid {
        column_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not a JSON array of objects.
    #[error("Column configs must be a JSON array: {0}")]
    Json(#[from] serde_json::Error),
}

impl ColumnError {
    /// Creates an unsupported type error.
    pub fn unsupported(column_type: impl Into<String>) -> Self {
        Self::UnsupportedType(column_type.into())
    }
}
