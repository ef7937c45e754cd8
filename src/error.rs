use thiserror::Error;

/// Errors that can occur when dispatching a render request.
///
/// The generators themselves are infallible: unresolved catalog references
/// degrade to sentinel labels and absent optional fields are omitted. Only
/// the surrounding dispatch can fail.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize flow to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown output format: '{0}'")]
    UnknownFormat(String),
}

/// Errors that can occur when converting a custom editor format into the
/// canonical [`Flow`](crate::model::Flow) or [`Catalog`](crate::model::Catalog).
#[derive(Error, Debug, Clone)]
pub enum ModelConversionError {
    #[error("Invalid workflow data: {0}")]
    Validation(String),
}
