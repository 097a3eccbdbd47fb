mod events;
mod state;

pub use events::SessionEvent;
pub use state::{LookupRequest, SessionSnapshot, SessionStatus};
