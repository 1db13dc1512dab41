use thiserror::Error;

/// Errors raised while configuring link processing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// A player rewrite rule could not be parsed
    #[error("invalid player rewrite rule `{rule}`: {reason}")]
    InvalidRewrite { rule: String, reason: &'static str },
}

/// Result type alias for link operations
pub type Result<T> = std::result::Result<T, LinkError>;
