pub mod http;
pub mod logger;
pub mod rate_limiter;

pub use rate_limiter::RateLimiter;
