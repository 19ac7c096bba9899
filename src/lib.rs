//! Client SDK for a metadata-catalog REST service.
//!
//! Failed API calls come back as structured error bodies; the `errors`
//! module translates them into typed [`ClientError`] values, with metalake
//! operations dispatched through [`errors::MetalakeErrorHandler`].

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod rest;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use errors::{ClientError, ErrorCode, ErrorHandler, ErrorResponse};
