use crate::shared::errors::{AppError, AppResult};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Stable opaque identifier of this kiosk. The session core only ever
/// reads it; creation and persistence happen at host startup.
pub trait DeviceIdentity: Send + Sync {
    fn device_id(&self) -> &str;
}

/// Fixed identity for tests and embedding hosts that manage their own id.
pub struct StaticDeviceIdentity(String);

impl StaticDeviceIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl DeviceIdentity for StaticDeviceIdentity {
    fn device_id(&self) -> &str {
        &self.0
    }
}

/// File-persisted identity: read the id if present, otherwise mint a
/// `TAB-XXXXX` tag and write it next to the kiosk config. Survives app
/// restarts so the registry can attribute lookups per tablet.
pub struct FileDeviceIdentity {
    id: String,
    path: PathBuf,
}

impl FileDeviceIdentity {
    pub fn load_or_create(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Ok(existing) = fs::read_to_string(&path) {
            let existing = existing.trim();
            if !existing.is_empty() {
                return Ok(Self {
                    id: existing.to_string(),
                    path,
                });
            }
        }

        let id = generate_device_id();
        fs::write(&path, &id).map_err(|e| {
            AppError::InternalError(format!("Failed to persist device id to {:?}: {}", path, e))
        })?;

        Ok(Self { id, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeviceIdentity for FileDeviceIdentity {
    fn device_id(&self) -> &str {
        &self.id
    }
}

fn generate_device_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let tag: String = (0..5)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("TAB-{}", tag)
}
