use crate::modules::registry::LookupOutcome;

/// Everything that can happen to a session, folded onto one serialized
/// event path. Lookup completions and timer firings re-enter through here,
/// which is what makes fencing by plain sequence comparison sufficient.
#[derive(Debug)]
pub enum SessionEvent {
    /// Raw operator input submitted for lookup.
    Submit(String),
    /// Operator pressed reset, or the host cleared the kiosk.
    Clear,
    /// Qualifying operator activity; holds off the idle reset.
    Activity,
    /// An out-of-band lookup finished.
    LookupDone {
        sequence: u64,
        outcome: LookupOutcome,
    },
    /// An advisory task finished for one found record.
    AdvisoryReady {
        sequence: u64,
        index: usize,
        text: String,
    },
    /// The scheduled idle reset fired.
    IdleTimeout { epoch: u64 },
}
