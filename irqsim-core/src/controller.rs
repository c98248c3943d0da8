//! The concurrent dispatch engine.
//!
//! One controller instance owns the pending queue, the mask table and the
//! audit history. Producers call [`InterruptController::submit`] from any
//! thread; a single dispatch loop ([`InterruptController::run`]) pops events
//! in priority order and records an outcome for each. Handles are Arc-backed
//! and cheap to clone, so state is never ambient.
//!
//! Locking discipline: the queue and history share one mutex; the lock is
//! released before the mask check, the simulated ISR latency and the sink
//! append, so submitters never wait behind handler work. Mask flags are
//! independent atomics read on the hot path.
//!
//! Lifecycle: Running → `stop()` → Draining → Stopped. The Stopped transition
//! happens under the shared lock, which makes the post-stop contract exact:
//! a submission either lands before the final drain check (and is guaranteed
//! to be dispatched) or is rejected with [`SubmitError::ControllerStopped`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, warn};

use crate::audit::{AuditRecord, AuditSink, Outcome};
use crate::device::Device;
use crate::error::SubmitError;
use crate::event::InterruptEvent;
use crate::mask::MaskTable;
use crate::queue::PendingQueue;

/// Tunables for one controller instance.
#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    /// Upper bound on one condvar wait, so the loop stays responsive to
    /// shutdown even with no traffic.
    pub dispatch_timeout: Duration,
    /// Fixed-latency placeholder for ISR execution.
    pub isr_latency: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            dispatch_timeout: Duration::from_millis(500),
            isr_latency: Duration::from_millis(150),
        }
    }
}

/// Point-in-time snapshot returned by [`InterruptController::status`].
#[derive(Debug, Clone)]
pub struct ControllerStatus {
    pub masks: Vec<(Device, bool)>,
    pub history_len: usize,
}

struct Shared {
    queue: PendingQueue,
    history: Vec<AuditRecord>,
    /// Set by the dispatch loop, under this lock, as its very last act.
    stopped: bool,
}

struct Inner {
    shared: Mutex<Shared>,
    wakeup: Condvar,
    running: AtomicBool,
    masks: MaskTable,
    sink: Mutex<Box<dyn AuditSink>>,
    options: ControllerOptions,
}

/// Shared handle to one dispatch engine.
#[derive(Clone)]
pub struct InterruptController {
    inner: Arc<Inner>,
}

impl InterruptController {
    pub fn new(options: ControllerOptions, sink: Box<dyn AuditSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                shared: Mutex::new(Shared {
                    queue: PendingQueue::new(),
                    history: Vec::new(),
                    stopped: false,
                }),
                wakeup: Condvar::new(),
                running: AtomicBool::new(true),
                masks: MaskTable::new(),
                sink: Mutex::new(sink),
                options,
            }),
        }
    }

    /// Queues an event and wakes the dispatch loop.
    ///
    /// Returns immediately; the only failure is submitting after the dispatch
    /// loop has exited. An accepted event is guaranteed to be drained.
    pub fn submit(&self, event: InterruptEvent) -> Result<(), SubmitError> {
        let (device, sequence) = (event.device, event.sequence);
        {
            let mut shared = self.inner.shared.lock();
            if shared.stopped {
                return Err(SubmitError::ControllerStopped);
            }
            shared.queue.push(event);
        }
        debug!(device = %device, sequence, "interrupt queued");
        self.inner.wakeup.notify_one();
        Ok(())
    }

    /// Suppresses a device. Takes effect at dispatch time; queued events stay
    /// queued. Idempotent.
    pub fn mask(&self, device: Device) {
        self.inner.masks.set(device, true);
        debug!(device = %device, "device masked");
    }

    /// Clears a device's suppression flag. Idempotent.
    pub fn unmask(&self, device: Device) {
        self.inner.masks.set(device, false);
        debug!(device = %device, "device unmasked");
    }

    pub fn is_masked(&self, device: Device) -> bool {
        self.inner.masks.is_masked(device)
    }

    /// Signals the dispatch loop to drain the queue and exit. Idempotent.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::Release);
        self.inner.wakeup.notify_all();
    }

    /// The dispatch loop. Run this on a dedicated thread; it returns once
    /// `stop()` has been called and the queue is fully drained.
    pub fn run(&self) {
        info!("dispatch loop started");
        loop {
            let mut shared = self.inner.shared.lock();
            let event = loop {
                if let Some(event) = shared.queue.pop() {
                    break event;
                }
                if !self.inner.running.load(Ordering::Acquire) {
                    // Final drain check failed to find work: seal the queue
                    // under the lock so late submitters get a clean rejection.
                    shared.stopped = true;
                    drop(shared);
                    info!("interrupt controller shut down");
                    return;
                }
                let _ = self
                    .inner
                    .wakeup
                    .wait_for(&mut shared, self.inner.options.dispatch_timeout);
            };
            drop(shared);
            self.dispatch(event);
        }
    }

    fn dispatch(&self, event: InterruptEvent) {
        let outcome = if self.inner.masks.is_masked(event.device) {
            info!(device = %event.device, sequence = event.sequence, "interrupt ignored (masked)");
            Outcome::IgnoredMasked
        } else {
            info!(device = %event.device, sequence = event.sequence, "handling isr");
            thread::sleep(self.inner.options.isr_latency);
            Outcome::Handled
        };

        let record = AuditRecord::new(event.device, event.sequence, outcome);
        {
            let mut shared = self.inner.shared.lock();
            shared.history.push(record.clone());
        }

        // Durability is best-effort; the simulated ISR result already stands.
        let mut sink = self.inner.sink.lock();
        if let Err(error) = sink.append(&record) {
            warn!(%error, "audit sink append failed; continuing");
        }
    }

    /// Snapshot of mask states and history length. Holds the shared lock only
    /// long enough to read the length.
    pub fn status(&self) -> ControllerStatus {
        let history_len = self.inner.shared.lock().history.len();
        ControllerStatus {
            masks: self.inner.masks.snapshot(),
            history_len,
        }
    }

    /// Snapshot clone of the audit history.
    pub fn history(&self) -> Vec<AuditRecord> {
        self.inner.shared.lock().history.clone()
    }
}
