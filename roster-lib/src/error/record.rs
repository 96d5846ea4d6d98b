//! Record construction errors

/// Error type for building a [`Record`](crate::model::Record) from raw data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// The input was not a JSON object.
    #[error("Record must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// The mandatory `id` field is absent.
    #[error("Record is missing its 'id' field")]
    MissingId,

    /// The `id` field is neither a number nor a string.
    #[error("Record 'id' must be a number or string, got {actual}")]
    InvalidId { actual: &'static str },
}
