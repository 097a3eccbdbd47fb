mod format_classifier;

pub use format_classifier::{InvalidReason, PlateFormatClassifier, PlateValidation};
