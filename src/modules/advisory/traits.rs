use crate::modules::registry::VehicleRecord;
use async_trait::async_trait;

/// Shown when the generator cannot be reached or errors out. The guard
/// still needs a line under the record, so degradation is textual, not an
/// error state.
pub const ADVISORY_FALLBACK: &str = "Данные подтверждены в официальном реестре.";

/// Shown when the generator answers with an empty body.
pub const ADVISORY_DEFAULT_VERDICT: &str = "Проверка пройдена. Доступ разрешен.";

/// Short natural-language verdict for an already-found record. Infallible
/// by contract: implementations degrade to [`ADVISORY_FALLBACK`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvisoryGenerator: Send + Sync {
    async fn advise(&self, record: &VehicleRecord) -> String;
}
