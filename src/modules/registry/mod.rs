pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::{LookupOutcome, LookupReply, VehicleRecord};
pub use infrastructure::{RegistryConfig, SheetsRegistryClient};
pub use traits::RegistryLookup;

#[cfg(test)]
pub use traits::MockRegistryLookup;
