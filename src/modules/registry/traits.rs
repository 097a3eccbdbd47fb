use crate::modules::plate::CanonicalPlate;
use crate::modules::registry::domain::LookupReply;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// The remote registry collaborator. One call per accepted submit; the
/// session layer owns retries-by-operator, fencing and outcome mapping.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn lookup(&self, plate: &CanonicalPlate, device_id: &str) -> AppResult<LookupReply>;
}
