use serde::{Deserialize, Serialize};

use super::codes::ErrorCode;

/// Parsed body of a failed catalog API call
///
/// Read-only from the client's perspective: the deserialization layer builds
/// it from the wire payload and the error handlers only inspect it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Numeric error category
    code: ErrorCode,
    /// Server-side exception type name
    #[serde(rename = "type")]
    error_type: String,
    /// Human-readable error message
    message: String,
    /// Server stack trace lines, when the server chose to include them
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Create an error response without a stack trace
    pub fn new(code: ErrorCode, error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            error_type: error_type.into(),
            message: message.into(),
            stack: None,
        }
    }

    /// Create an error response carrying server stack trace lines
    pub fn with_stack(
        code: ErrorCode,
        error_type: impl Into<String>,
        message: impl Into<String>,
        stack: Vec<String>,
    ) -> Self {
        Self {
            code,
            error_type: error_type.into(),
            message: message.into(),
            stack: Some(stack),
        }
    }

    /// Synthesize a generic REST error for a body the client could not parse
    pub fn rest_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RestError, "RESTException", message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message as surfaced to callers: verbatim, with the server stack
    /// trace appended on following lines when present.
    pub fn format_error_message(&self) -> String {
        match &self.stack {
            Some(stack) if !stack.is_empty() => {
                format!("{}\n{}", self.message, stack.join("\n"))
            }
            _ => self.message.clone(),
        }
    }
}
