use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Client input rejected before any provider call.
    #[error("{0}")]
    Validation(String),

    /// The provider answered the destroy call without confirming it.
    #[error("could not delete image")]
    DeletionFailed { public_id: String, result: String },

    /// Any failure originating from the media provider, message kept verbatim.
    #[error("{0}")]
    Provider(String),
}
