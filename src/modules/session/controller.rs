/// Session controller: the state machine owning one lookup's lifecycle.
///
/// All state lives inside a single spawned task that drains an event
/// channel strictly one event at a time. Lookups and advisory calls run
/// out-of-band and fold their completions back into the same channel,
/// fenced by sequence number; the idle reset is a single cancellable
/// deferred task fenced by epoch. No locks anywhere.
use crate::modules::advisory::AdvisoryGenerator;
use crate::modules::device::DeviceIdentity;
use crate::modules::plate::{CanonicalPlate, PlateFormatClassifier};
use crate::modules::registry::{LookupOutcome, RegistryLookup, VehicleRecord};
use crate::modules::session::domain::{
    LookupRequest, SessionEvent, SessionSnapshot, SessionStatus,
};
use crate::{log_debug, log_info, log_warn};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock inactivity window after which any state resets to Idle.
    pub idle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// External collaborators the controller consumes. All are trait objects;
/// the controller never knows transport details.
pub struct SessionDeps {
    pub registry: Arc<dyn RegistryLookup>,
    pub advisory: Arc<dyn AdvisoryGenerator>,
    pub device: Arc<dyn DeviceIdentity>,
}

/// Clonable front of a running controller. The presentation layer sends
/// submit/clear/activity through it and watches snapshots on the other
/// side.
#[derive(Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SessionEvent>,
    snapshots: watch::Receiver<SessionSnapshot>,
    cancel: CancellationToken,
}

impl SessionHandle {
    pub fn submit(&self, raw: impl Into<String>) {
        self.send(SessionEvent::Submit(raw.into()));
    }

    pub fn clear(&self) {
        self.send(SessionEvent::Clear);
    }

    pub fn activity(&self) {
        self.send(SessionEvent::Activity);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stop the controller task. In-flight lookups finish on their own and
    /// their results go nowhere.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn send(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            log_warn!("Session controller is gone; event dropped");
        }
    }
}

pub struct SessionController;

impl SessionController {
    /// Spawn the controller actor and hand back its public face.
    pub fn spawn(deps: SessionDeps, config: SessionConfig) -> SessionHandle {
        let (events, inbox) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::idle());
        let cancel = CancellationToken::new();

        let actor = SessionActor {
            deps,
            config,
            events: events.clone(),
            snapshots: snapshot_tx,
            cancel: cancel.clone(),
            classifier: PlateFormatClassifier::new(),
            status: SessionStatus::Idle,
            records: Vec::new(),
            error_message: None,
            next_sequence: 0,
            outstanding: None,
            applied_sequence: None,
            idle_epoch: 0,
            idle_task: None,
        };
        tokio::spawn(actor.run(inbox));

        SessionHandle {
            events,
            snapshots: snapshot_rx,
            cancel,
        }
    }
}

struct SessionActor {
    deps: SessionDeps,
    config: SessionConfig,
    /// Loopback sender for out-of-band completions.
    events: mpsc::UnboundedSender<SessionEvent>,
    snapshots: watch::Sender<SessionSnapshot>,
    cancel: CancellationToken,
    classifier: PlateFormatClassifier,

    status: SessionStatus,
    records: Vec<VehicleRecord>,
    error_message: Option<String>,

    next_sequence: u64,
    outstanding: Option<LookupRequest>,
    /// Sequence that produced the current Found state, for advisory fencing.
    applied_sequence: Option<u64>,

    idle_epoch: u64,
    idle_task: Option<JoinHandle<()>>,
}

impl SessionActor {
    async fn run(mut self, mut inbox: mpsc::UnboundedReceiver<SessionEvent>) {
        log_debug!("Session controller started");
        let cancel = self.cancel.clone();
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                event = inbox.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
            }
        }
        if let Some(task) = self.idle_task.take() {
            task.abort();
        }
        log_debug!("Session controller stopped");
    }

    /// Events are handled synchronously, each to completion. Anything slow
    /// is spawned and re-enters through the inbox.
    fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Submit(raw) => self.on_submit(raw),
            SessionEvent::Clear => {
                log_debug!("Session cleared by operator");
                self.reset_to_idle();
            }
            SessionEvent::Activity => self.arm_idle_timer(),
            SessionEvent::LookupDone { sequence, outcome } => {
                self.on_lookup_done(sequence, outcome)
            }
            SessionEvent::AdvisoryReady {
                sequence,
                index,
                text,
            } => self.on_advisory_ready(sequence, index, text),
            SessionEvent::IdleTimeout { epoch } => {
                if epoch != self.idle_epoch {
                    log_debug!("Fenced out superseded idle timer (epoch {})", epoch);
                    return;
                }
                log_info!("Idle timeout fired, resetting session");
                self.reset_to_idle();
            }
        }
    }

    fn on_submit(&mut self, raw: String) {
        let plate = CanonicalPlate::parse(&raw);
        let verdict = self.classifier.classify(&plate);
        if !verdict.valid {
            // Empty input is the quiet "nothing typed yet" case
            if let Some(reason) = verdict.reason {
                log_debug!("Rejected submit '{}': {}", plate, reason.operator_message());
            }
            return;
        }
        if self.status == SessionStatus::Searching {
            log_debug!("Submit ignored, a lookup is already in flight");
            return;
        }

        self.next_sequence += 1;
        let request = LookupRequest::new(plate.clone(), self.next_sequence);
        let sequence = request.sequence;
        log_info!("Lookup #{} for '{}'", sequence, plate);

        self.status = SessionStatus::Searching;
        self.records.clear();
        self.error_message = None;
        self.outstanding = Some(request);
        self.applied_sequence = None;
        self.arm_idle_timer();
        self.publish();

        let registry = Arc::clone(&self.deps.registry);
        let device_id = self.deps.device.device_id().to_string();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = match registry.lookup(&plate, &device_id).await {
                Ok(reply) => LookupOutcome::from_reply(reply),
                Err(e) => LookupOutcome::from_error(e),
            };
            let _ = events.send(SessionEvent::LookupDone { sequence, outcome });
        });
    }

    fn on_lookup_done(&mut self, sequence: u64, outcome: LookupOutcome) {
        let request = match &self.outstanding {
            Some(request) if request.sequence == sequence => request,
            _ => {
                log_debug!("Fenced out stale lookup response #{}", sequence);
                return;
            }
        };
        let elapsed = Utc::now().signed_duration_since(request.issued_at);
        log_info!(
            "Lookup #{} resolved in {}ms",
            sequence,
            elapsed.num_milliseconds()
        );
        self.outstanding = None;

        match outcome {
            LookupOutcome::Found(records) => {
                self.status = SessionStatus::Found;
                self.records = records;
                self.error_message = None;
                self.applied_sequence = Some(sequence);
                self.spawn_advisories(sequence);
            }
            LookupOutcome::NotFound => {
                self.status = SessionStatus::NotFound;
                self.records.clear();
                self.error_message = None;
            }
            LookupOutcome::Unauthorized(message) => {
                self.status = SessionStatus::Unauthorized;
                self.records.clear();
                self.error_message = Some(message);
            }
            LookupOutcome::Failed(message) => {
                self.status = SessionStatus::Failed;
                self.records.clear();
                self.error_message = Some(message);
            }
        }
        self.publish();
    }

    /// One fire-and-forget advisory task per found record, keyed by the
    /// sequence that produced them.
    fn spawn_advisories(&self, sequence: u64) {
        for (index, record) in self.records.iter().enumerate() {
            let advisory = Arc::clone(&self.deps.advisory);
            let record = record.clone();
            let events = self.events.clone();
            tokio::spawn(async move {
                let text = advisory.advise(&record).await;
                let _ = events.send(SessionEvent::AdvisoryReady {
                    sequence,
                    index,
                    text,
                });
            });
        }
    }

    fn on_advisory_ready(&mut self, sequence: u64, index: usize, text: String) {
        if self.status != SessionStatus::Found || self.applied_sequence != Some(sequence) {
            log_debug!("Fenced out advisory for superseded lookup #{}", sequence);
            return;
        }
        match self.records.get_mut(index) {
            Some(record) => {
                record.advisory = Some(text);
                self.publish();
            }
            None => log_warn!("Advisory index {} out of range", index),
        }
    }

    fn reset_to_idle(&mut self) {
        self.status = SessionStatus::Idle;
        self.records.clear();
        self.error_message = None;
        self.outstanding = None;
        self.applied_sequence = None;
        self.publish();
    }

    /// Replace the pending idle reset, if any, with a fresh one. The abort
    /// plus the epoch check together guarantee at most one effective firing.
    fn arm_idle_timer(&mut self) {
        self.idle_epoch += 1;
        let epoch = self.idle_epoch;
        if let Some(previous) = self.idle_task.take() {
            previous.abort();
        }
        let events = self.events.clone();
        let timeout = self.config.idle_timeout;
        self.idle_task = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let _ = events.send(SessionEvent::IdleTimeout { epoch });
        }));
    }

    fn publish(&self) {
        self.snapshots.send_replace(SessionSnapshot {
            status: self.status,
            records: self.records.clone(),
            error_message: self.error_message.clone(),
        });
    }
}
