//! Thread-per-device interrupt generators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use irqsim_config::DeviceProfile;
use irqsim_core::event::InterruptEvent;
use irqsim_core::{InterruptController, SubmitError};

/// An independent event source for one device.
///
/// The worker loop sleeps for the profile's base interval plus uniform
/// jitter, then fabricates the next event (per-device monotonic sequence,
/// current timestamp) and submits it. `stop()` takes effect after the current
/// sleep; it never cancels an in-flight submit.
pub struct DeviceGenerator {
    profile: DeviceProfile,
    controller: InterruptController,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl DeviceGenerator {
    pub fn new(profile: DeviceProfile, controller: InterruptController) -> Self {
        Self {
            profile,
            controller,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// Spawns the worker thread. A second call while running is a no-op.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        self.running.store(true, Ordering::Release);

        let profile = self.profile.clone();
        let controller = self.controller.clone();
        let running = Arc::clone(&self.running);

        self.worker = Some(thread::spawn(move || {
            let mut rng = rand::rng();
            let mut sequence: u64 = 0;

            while running.load(Ordering::Acquire) {
                let jitter =
                    rng.random_range(profile.jitter_min_ms..=profile.jitter_max_ms);
                thread::sleep(Duration::from_millis(profile.base_interval_ms + jitter));

                if !running.load(Ordering::Acquire) {
                    break;
                }

                sequence += 1;
                let event = InterruptEvent::new(profile.device, sequence);
                match controller.submit(event) {
                    Ok(()) => {}
                    Err(SubmitError::ControllerStopped) => {
                        warn!(device = %profile.device, "controller stopped; generator exiting");
                        break;
                    }
                }
            }
            debug!(device = %profile.device, emitted = sequence, "generator stopped");
        }));
    }

    /// Signals the worker loop to exit after its current iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Waits for the worker to exit. Safe to call when `start` was never
    /// called or the worker already finished.
    pub fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!(device = %self.profile.device, "generator worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_core::audit::NullSink;
    use irqsim_core::controller::ControllerOptions;
    use irqsim_core::Device;
    use std::time::Instant;

    fn fast_profile(device: Device) -> DeviceProfile {
        DeviceProfile {
            device,
            base_interval_ms: 1,
            jitter_min_ms: 0,
            jitter_max_ms: 1,
        }
    }

    fn fast_controller() -> InterruptController {
        InterruptController::new(
            ControllerOptions {
                dispatch_timeout: Duration::from_millis(10),
                isr_latency: Duration::ZERO,
            },
            Box::new(NullSink),
        )
    }

    #[test]
    fn join_without_start_is_safe() {
        let mut generator =
            DeviceGenerator::new(fast_profile(Device::Keyboard), fast_controller());
        generator.join();
        generator.stop();
        generator.join();
    }

    #[test]
    fn emits_monotonic_per_device_sequences() {
        let controller = fast_controller();
        let runner = {
            let controller = controller.clone();
            thread::spawn(move || controller.run())
        };

        let mut generator =
            DeviceGenerator::new(fast_profile(Device::Mouse), controller.clone());
        generator.start();
        thread::sleep(Duration::from_millis(100));
        generator.stop();
        generator.join();

        controller.stop();
        runner.join().unwrap();

        let history = controller.history();
        assert!(!history.is_empty(), "generator emitted nothing in 100ms");
        let sequences: Vec<u64> = history.iter().map(|r| r.sequence).collect();
        for (i, pair) in sequences.windows(2).enumerate() {
            assert!(pair[0] < pair[1], "sequence not monotonic at index {i}");
        }
        assert!(history.iter().all(|r| r.device == Device::Mouse));
    }

    #[test]
    fn stop_terminates_within_bounded_time() {
        let controller = fast_controller();
        let runner = {
            let controller = controller.clone();
            thread::spawn(move || controller.run())
        };

        let mut generator =
            DeviceGenerator::new(fast_profile(Device::Printer), controller.clone());
        generator.start();
        thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        generator.stop();
        generator.join();
        assert!(started.elapsed() < Duration::from_secs(1));

        controller.stop();
        runner.join().unwrap();
    }

    #[test]
    fn start_twice_spawns_one_worker() {
        let controller = fast_controller();
        let runner = {
            let controller = controller.clone();
            thread::spawn(move || controller.run())
        };

        let mut generator =
            DeviceGenerator::new(fast_profile(Device::Keyboard), controller.clone());
        generator.start();
        generator.start();
        thread::sleep(Duration::from_millis(50));
        generator.stop();
        generator.join();

        controller.stop();
        runner.join().unwrap();

        // One worker means one monotonic stream with no duplicates.
        let mut seen = std::collections::HashSet::new();
        for record in controller.history() {
            assert!(seen.insert(record.sequence), "duplicate sequence emitted");
        }
    }
}
