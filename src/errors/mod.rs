//! Error codes, response bodies, and code-to-error translation

pub mod codes;
pub mod exceptions;
pub mod handlers;
pub mod response;

pub use codes::ErrorCode;
pub use exceptions::ClientError;
pub use handlers::{ErrorHandler, MetalakeErrorHandler, RestErrorHandler};
pub use response::ErrorResponse;
