pub mod http_client;
pub mod rate_limiter;

pub use http_client::HttpClient;
pub use rate_limiter::RateLimiter;
