//! Checkpoint vehicle-registry lookup core.
//!
//! Everything a guard-booth kiosk needs between the operator's keyboard and
//! the screen: plate canonicalization and format classification, the
//! session state machine with fenced lookups and idle reset, plate text
//! sizing, and clients for the external collaborators (registry sheet,
//! advisory generator, device identity). Rendering stays in the host.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use propusk::{
//!     AdvisoryConfig, FileDeviceIdentity, GeminiAdvisoryClient, RegistryConfig,
//!     SessionConfig, SessionController, SessionDeps, SheetsRegistryClient,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! propusk::shared::utils::logger::init_logger();
//!
//! let handle = SessionController::spawn(
//!     SessionDeps {
//!         registry: Arc::new(SheetsRegistryClient::new(RegistryConfig::from_env())?),
//!         advisory: Arc::new(GeminiAdvisoryClient::new(AdvisoryConfig::from_env())?),
//!         device: Arc::new(FileDeviceIdentity::load_or_create("kiosk_id")?),
//!     },
//!     SessionConfig::default(),
//! );
//!
//! handle.submit("а 123 вс 77");
//! let _snapshot = handle.snapshot();
//! # Ok(())
//! # }
//! ```
//!
//! The presentation layer watches [`SessionSnapshot`] updates via
//! [`SessionHandle::subscribe`] and calls [`fit_plate_text`] itself on every
//! input or resize event; the fitter is pure and owns no state.

pub mod modules;
pub mod shared;

pub use modules::advisory::{
    AdvisoryConfig, AdvisoryGenerator, GeminiAdvisoryClient, ADVISORY_DEFAULT_VERDICT,
    ADVISORY_FALLBACK,
};
pub use modules::device::{DeviceIdentity, FileDeviceIdentity, StaticDeviceIdentity};
pub use modules::display::{fit_plate_text, FontFitParams, LayoutMode};
pub use modules::plate::{CanonicalPlate, InvalidReason, PlateFormatClassifier, PlateValidation};
pub use modules::registry::{
    LookupOutcome, LookupReply, RegistryConfig, RegistryLookup, SheetsRegistryClient, VehicleRecord,
};
pub use modules::session::{
    SessionConfig, SessionController, SessionDeps, SessionHandle, SessionSnapshot, SessionStatus,
};
pub use shared::errors::{AppError, AppResult};
