//! Orchestration of the full simulation.
//!
//! Wires the controller, its dispatch thread and one generator per configured
//! device profile, and owns the shutdown ordering: generators are stopped and
//! joined before the controller, so nothing submits into a stopped sink.

use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use irqsim_config::IrqsimConfig;
use irqsim_core::controller::ControllerOptions;
use irqsim_core::InterruptController;
use irqsim_devices::DeviceGenerator;
use irqsim_telemetry::FileAuditSink;

/// A running simulation: controller, dispatch thread and generators.
pub struct Simulation {
    controller: InterruptController,
    dispatch: Option<JoinHandle<()>>,
    generators: Vec<DeviceGenerator>,
}

impl Simulation {
    /// Builds the pipeline from configuration and starts every thread.
    pub fn start(config: &IrqsimConfig, log_path: &Path) -> anyhow::Result<Self> {
        let sink = FileAuditSink::open(log_path)
            .with_context(|| format!("opening audit log {}", log_path.display()))?;

        let options = ControllerOptions {
            dispatch_timeout: Duration::from_millis(config.controller.dispatch_timeout_ms),
            isr_latency: Duration::from_millis(config.controller.isr_latency_ms),
        };
        let controller = InterruptController::new(options, Box::new(sink));

        let dispatch = {
            let controller = controller.clone();
            thread::Builder::new()
                .name("dispatch".into())
                .spawn(move || controller.run())
                .context("spawning dispatch thread")?
        };

        let mut generators = Vec::with_capacity(config.devices.profiles.len());
        for profile in &config.devices.profiles {
            info!(device = %profile.device, base_ms = profile.base_interval_ms, "starting generator");
            let mut generator = DeviceGenerator::new(profile.clone(), controller.clone());
            generator.start();
            generators.push(generator);
        }

        Ok(Self {
            controller,
            dispatch: Some(dispatch),
            generators,
        })
    }

    pub fn controller(&self) -> &InterruptController {
        &self.controller
    }

    /// Stops and joins every generator, then drains and joins the dispatch
    /// loop. Idempotent only in the trivial sense: consumes self.
    pub fn shutdown(mut self) {
        for generator in &self.generators {
            generator.stop();
        }
        for generator in &mut self.generators {
            generator.join();
        }

        self.controller.stop();
        if let Some(dispatch) = self.dispatch.take() {
            if dispatch.join().is_err() {
                warn!("dispatch thread panicked during shutdown");
            }
        }
        info!("simulation shut down");
    }
}
