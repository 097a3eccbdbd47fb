pub mod controller;
pub mod domain;

// Re-exports for easy external access
pub use controller::{SessionConfig, SessionController, SessionDeps, SessionHandle};
pub use domain::{LookupRequest, SessionEvent, SessionSnapshot, SessionStatus};
