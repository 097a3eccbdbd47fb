pub mod domain;

// Re-exports for easy external access
pub use domain::services::{InvalidReason, PlateFormatClassifier, PlateValidation};
pub use domain::value_objects::CanonicalPlate;
