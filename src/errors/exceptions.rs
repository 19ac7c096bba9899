use thiserror::Error;

/// Typed failures surfaced by catalog client operations
///
/// Messages carried by the server-mapped variants are the server-formatted
/// error text verbatim, nothing added or stripped.
#[derive(Debug, Error)]
pub enum ClientError {
    // Metalake-specific translations
    #[error("{0}")]
    NoSuchMetalake(String),

    #[error("{0}")]
    MetalakeAlreadyExists(String),

    #[error("{0}")]
    MetalakeInUse(String),

    #[error("{0}")]
    MetalakeNotInUse(String),

    // Generic translations applied by the REST fallback handler
    #[error("{0}")]
    IllegalArguments(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    NotEmpty(String),

    #[error("{0}")]
    UnsupportedOperation(String),

    #[error("{0}")]
    ConnectionFailed(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InUse(String),

    #[error("{0}")]
    NotInUse(String),

    #[error("{0}")]
    Rest(String),

    #[error("{0}")]
    Unknown(String),

    /// Server accepted the call but returned a non-zero envelope code
    #[error("unexpected response code {code}")]
    UnexpectedResponseCode { code: u32 },

    // Transport failures, before any error body could be interpreted
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ClientError {
    /// Message carried by a server-mapped variant, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::NoSuchMetalake(msg)
            | Self::MetalakeAlreadyExists(msg)
            | Self::MetalakeInUse(msg)
            | Self::MetalakeNotInUse(msg)
            | Self::IllegalArguments(msg)
            | Self::Internal(msg)
            | Self::NotFound(msg)
            | Self::AlreadyExists(msg)
            | Self::NotEmpty(msg)
            | Self::UnsupportedOperation(msg)
            | Self::ConnectionFailed(msg)
            | Self::Forbidden(msg)
            | Self::InUse(msg)
            | Self::NotInUse(msg)
            | Self::Rest(msg)
            | Self::Unknown(msg) => Some(msg),
            Self::UnexpectedResponseCode { .. } | Self::Http(_) | Self::Serde(_) => None,
        }
    }
}
