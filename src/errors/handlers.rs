use tracing::debug;

use super::codes::ErrorCode;
use super::exceptions::ClientError;
use super::response::ErrorResponse;

/// Translates a failed API response into a typed [`ClientError`]
///
/// A handler never "succeeds": the returned error is what the REST layer
/// propagates to the caller. Handlers are stateless values, safe to share
/// across threads.
pub trait ErrorHandler {
    fn handle(&self, response: &ErrorResponse) -> ClientError;
}

/// Fallback handler for error codes with no resource-specific translation
#[derive(Debug, Clone, Copy, Default)]
pub struct RestErrorHandler;

impl ErrorHandler for RestErrorHandler {
    fn handle(&self, response: &ErrorResponse) -> ClientError {
        let message = response.format_error_message();

        match response.code() {
            ErrorCode::IllegalArguments => ClientError::IllegalArguments(message),
            ErrorCode::InternalError => ClientError::Internal(message),
            ErrorCode::NotFound => ClientError::NotFound(message),
            ErrorCode::AlreadyExists => ClientError::AlreadyExists(message),
            ErrorCode::NotEmpty => ClientError::NotEmpty(message),
            ErrorCode::UnsupportedOperation => ClientError::UnsupportedOperation(message),
            ErrorCode::ConnectionFailed => ClientError::ConnectionFailed(message),
            ErrorCode::Forbidden => ClientError::Forbidden(message),
            ErrorCode::InUse => ClientError::InUse(message),
            ErrorCode::NotInUse => ClientError::NotInUse(message),
            ErrorCode::Unknown => ClientError::Unknown(message),
            code => {
                debug!("No specific translation for error code {}", code);
                ClientError::Rest(message)
            }
        }
    }
}

/// Handler for metalake operations
///
/// Maps the four metalake error categories to their specific variants and
/// delegates everything else, unchanged, to the held fallback handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetalakeErrorHandler<F = RestErrorHandler> {
    fallback: F,
}

impl MetalakeErrorHandler<RestErrorHandler> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: ErrorHandler> MetalakeErrorHandler<F> {
    /// Build a handler delegating unrecognized codes to `fallback`
    pub fn with_fallback(fallback: F) -> Self {
        Self { fallback }
    }
}

impl<F: ErrorHandler> ErrorHandler for MetalakeErrorHandler<F> {
    fn handle(&self, response: &ErrorResponse) -> ClientError {
        // Formatted once; every branch surfaces it verbatim.
        let message = response.format_error_message();

        match response.code() {
            ErrorCode::NotFound => ClientError::NoSuchMetalake(message),
            ErrorCode::AlreadyExists => ClientError::MetalakeAlreadyExists(message),
            ErrorCode::InUse => ClientError::MetalakeInUse(message),
            ErrorCode::NotInUse => ClientError::MetalakeNotInUse(message),
            _ => self.fallback.handle(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn response(code: ErrorCode, message: &str) -> ErrorResponse {
        ErrorResponse::new(code, "TestException", message)
    }

    /// Fallback stub recording every response it is handed
    #[derive(Default)]
    struct RecordingHandler {
        seen: RefCell<Vec<ErrorResponse>>,
    }

    impl ErrorHandler for &RecordingHandler {
        fn handle(&self, response: &ErrorResponse) -> ClientError {
            self.seen.borrow_mut().push(response.clone());
            ClientError::Rest(response.format_error_message())
        }
    }

    #[test]
    fn test_not_found_maps_to_no_such_metalake() {
        let handler = MetalakeErrorHandler::new();
        let err = handler.handle(&response(ErrorCode::NotFound, "metalake x not found"));

        assert!(matches!(err, ClientError::NoSuchMetalake(_)));
        assert_eq!(err.to_string(), "metalake x not found");
    }

    #[test]
    fn test_already_exists_maps_to_metalake_already_exists() {
        let handler = MetalakeErrorHandler::new();
        let err = handler.handle(&response(ErrorCode::AlreadyExists, "metalake x exists"));

        assert!(matches!(err, ClientError::MetalakeAlreadyExists(_)));
        assert_eq!(err.to_string(), "metalake x exists");
    }

    #[test]
    fn test_in_use_maps_to_metalake_in_use() {
        let handler = MetalakeErrorHandler::new();
        let err = handler.handle(&response(ErrorCode::InUse, "metalake x in use"));

        assert!(matches!(err, ClientError::MetalakeInUse(_)));
        assert_eq!(err.to_string(), "metalake x in use");
    }

    #[test]
    fn test_not_in_use_maps_to_metalake_not_in_use() {
        let handler = MetalakeErrorHandler::new();
        let err = handler.handle(&response(ErrorCode::NotInUse, "metalake x not in use"));

        assert!(matches!(err, ClientError::MetalakeNotInUse(_)));
        assert_eq!(err.to_string(), "metalake x not in use");
    }

    #[test]
    fn test_unrecognized_code_delegates_once_with_same_response() {
        let recorder = RecordingHandler::default();
        let handler = MetalakeErrorHandler::with_fallback(&recorder);
        let input = response(ErrorCode::Other(9999), "oops");

        let err = handler.handle(&input);

        assert!(matches!(err, ClientError::Rest(_)));
        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], input);
    }

    #[test]
    fn test_metalake_codes_never_reach_the_fallback() {
        let recorder = RecordingHandler::default();
        let handler = MetalakeErrorHandler::with_fallback(&recorder);

        for code in [
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InUse,
            ErrorCode::NotInUse,
        ] {
            handler.handle(&response(code, "msg"));
        }

        assert!(recorder.seen.borrow().is_empty());
    }

    #[test]
    fn test_message_includes_server_stack() {
        let handler = MetalakeErrorHandler::new();
        let input = ErrorResponse::with_stack(
            ErrorCode::NotFound,
            "NoSuchMetalakeException",
            "metalake x not found",
            vec!["at server.Frame".to_string()],
        );

        let err = handler.handle(&input);
        assert_eq!(err.to_string(), "metalake x not found\nat server.Frame");
    }

    #[test]
    fn test_handle_is_idempotent() {
        let handler = MetalakeErrorHandler::new();
        let input = response(ErrorCode::InUse, "metalake x in use");

        let first = handler.handle(&input);
        let second = handler.handle(&input);

        assert!(matches!(first, ClientError::MetalakeInUse(_)));
        assert!(matches!(second, ClientError::MetalakeInUse(_)));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_rest_handler_generic_translations() {
        let handler = RestErrorHandler;

        let cases = [
            (ErrorCode::IllegalArguments, "illegal"),
            (ErrorCode::InternalError, "internal"),
            (ErrorCode::NotEmpty, "not empty"),
            (ErrorCode::UnsupportedOperation, "unsupported"),
            (ErrorCode::ConnectionFailed, "connection"),
            (ErrorCode::Forbidden, "forbidden"),
        ];

        for (code, msg) in cases {
            let err = handler.handle(&response(code, msg));
            assert_eq!(err.to_string(), msg);
            assert!(!matches!(err, ClientError::Rest(_)));
        }
    }

    #[test]
    fn test_rest_handler_falls_back_to_rest_error() {
        let handler = RestErrorHandler;

        let err = handler.handle(&response(ErrorCode::Unknown, "who knows"));
        assert!(matches!(err, ClientError::Unknown(_)));

        let err = handler.handle(&response(ErrorCode::Other(2047), "oops"));
        assert!(matches!(err, ClientError::Rest(_)));
        assert_eq!(err.to_string(), "oops");
    }
}
