use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes carried by failed catalog API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorCode {
    /// Generic REST-level failure
    RestError,

    /// Request arguments rejected by the server
    IllegalArguments,

    /// Unexpected server-side failure
    InternalError,

    /// Referenced resource does not exist
    NotFound,

    /// Resource with the same identifier already exists
    AlreadyExists,

    /// Resource still contains children and cannot be removed
    NotEmpty,

    /// Operation not supported by the server
    UnsupportedOperation,

    /// Server could not reach a backing service
    ConnectionFailed,

    /// Caller lacks permission
    Forbidden,

    /// Resource is in use and the operation requires it disabled
    InUse,

    /// Resource is not in use and the operation requires it enabled
    NotInUse,

    /// Failure the server could not classify
    Unknown,

    /// Code this client version does not recognize
    Other(u32),
}

impl ErrorCode {
    /// Numeric value used on the wire
    pub fn as_u32(self) -> u32 {
        match self {
            Self::RestError => 1000,
            Self::IllegalArguments => 1001,
            Self::InternalError => 1002,
            Self::NotFound => 1003,
            Self::AlreadyExists => 1004,
            Self::NotEmpty => 1005,
            Self::UnsupportedOperation => 1006,
            Self::ConnectionFailed => 1007,
            Self::Forbidden => 1008,
            Self::InUse => 1009,
            Self::NotInUse => 1010,
            Self::Unknown => 1100,
            Self::Other(code) => code,
        }
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            1000 => Self::RestError,
            1001 => Self::IllegalArguments,
            1002 => Self::InternalError,
            1003 => Self::NotFound,
            1004 => Self::AlreadyExists,
            1005 => Self::NotEmpty,
            1006 => Self::UnsupportedOperation,
            1007 => Self::ConnectionFailed,
            1008 => Self::Forbidden,
            1009 => Self::InUse,
            1010 => Self::NotInUse,
            1100 => Self::Unknown,
            other => Self::Other(other),
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> Self {
        code.as_u32()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RestError => write!(f, "REST_ERROR"),
            Self::IllegalArguments => write!(f, "ILLEGAL_ARGUMENTS"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::NotEmpty => write!(f, "NOT_EMPTY"),
            Self::UnsupportedOperation => write!(f, "UNSUPPORTED_OPERATION"),
            Self::ConnectionFailed => write!(f, "CONNECTION_FAILED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::InUse => write!(f, "IN_USE"),
            Self::NotInUse => write!(f, "NOT_IN_USE"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Other(code) => write!(f, "OTHER({})", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_roundtrip() {
        for code in [
            ErrorCode::RestError,
            ErrorCode::IllegalArguments,
            ErrorCode::InternalError,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::NotEmpty,
            ErrorCode::UnsupportedOperation,
            ErrorCode::ConnectionFailed,
            ErrorCode::Forbidden,
            ErrorCode::InUse,
            ErrorCode::NotInUse,
            ErrorCode::Unknown,
        ] {
            assert_eq!(ErrorCode::from(code.as_u32()), code);
        }
    }

    #[test]
    fn test_unrecognized_code_is_preserved() {
        let code = ErrorCode::from(4242);
        assert_eq!(code, ErrorCode::Other(4242));
        assert_eq!(code.as_u32(), 4242);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "1003");
        let parsed: ErrorCode = serde_json::from_str("1009").unwrap();
        assert_eq!(parsed, ErrorCode::InUse);
    }
}
