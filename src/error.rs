/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised while validating or computing a payment plan.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    /// A plan request violated one of the calculator's preconditions.
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// The JSON request could not be parsed (bad shape, unknown frequency, bad date).
    #[error("invalid plan request: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A computed preview could not be serialized.
    #[error("failed to encode plan preview: {0}")]
    Encoding(serde_json::Error),

    /// Plan policy could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PlanError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        PlanError::InvalidRequest(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        PlanError::Configuration(msg.into())
    }

    /// True for both flavours of rejected input: failed preconditions and
    /// requests that never parsed.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, PlanError::InvalidRequest(_) | PlanError::Malformed(_))
    }
}
