use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use irqsim_config::IrqsimConfig;

use crate::console;
use crate::runtime::Simulation;

#[derive(Parser)]
#[command(version, about = "Interrupt-handling simulation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the simulation with the interactive operator console
    Run(RunArgs),
    /// Run headless for a fixed duration, then print status and exit
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Configuration file (defaults to config/irqsim.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the audit log path
    #[arg(short, long)]
    pub log: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Configuration file (defaults to config/irqsim.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the audit log path
    #[arg(short, long)]
    pub log: Option<PathBuf>,
    /// How long to run before draining and exiting
    #[arg(long, default_value_t = 5000)]
    pub duration_ms: u64,
    /// Devices to keep masked for the whole run (keyboard, mouse, printer)
    #[arg(long)]
    pub mask: Vec<String>,
}

fn load_config(path: Option<&PathBuf>) -> Result<IrqsimConfig, irqsim_config::ConfigError> {
    match path {
        Some(path) => IrqsimConfig::load_from_path(path),
        None => IrqsimConfig::load(),
    }
}

pub fn run_interactive(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let log_path = args.log.unwrap_or_else(|| config.audit.log_path.clone());

    let simulation = Simulation::start(&config, &log_path)?;
    println!("Commands: mask/unmask <keyboard|mouse|printer>, status, exit");

    console::run(io::stdin().lock(), &mut io::stdout(), simulation.controller())?;

    simulation.shutdown();
    info!("simulation finished; log appended to {}", log_path.display());
    Ok(())
}

pub fn run_headless(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let log_path = args.log.unwrap_or_else(|| config.audit.log_path.clone());

    let simulation = Simulation::start(&config, &log_path)?;
    for token in &args.mask {
        match console::device_token(token) {
            Some(device) => simulation.controller().mask(device),
            None => warn!(token = %token, "unknown device token ignored"),
        }
    }

    thread::sleep(Duration::from_millis(args.duration_ms));

    let controller = simulation.controller().clone();
    simulation.shutdown();

    // Status after shutdown reflects the fully drained history.
    let status = controller.status();
    println!("Masks:");
    for (device, masked) in &status.masks {
        println!(
            "  {} => {}",
            device,
            if *masked { "MASKED" } else { "ENABLED" }
        );
    }
    println!("Execution history entries: {}", status.history_len);
    info!("simulation finished; log appended to {}", log_path.display());
    Ok(())
}
