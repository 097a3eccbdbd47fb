mod entities;

pub use entities::{LookupOutcome, LookupReply, VehicleRecord};
