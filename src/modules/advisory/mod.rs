pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use infrastructure::{AdvisoryConfig, GeminiAdvisoryClient};
pub use traits::{AdvisoryGenerator, ADVISORY_DEFAULT_VERDICT, ADVISORY_FALLBACK};

#[cfg(test)]
pub use traits::MockAdvisoryGenerator;
