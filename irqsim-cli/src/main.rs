//! ## irqsim-cli
//! **Unified operational interface**
//!
//! Entrypoint for the interrupt-handling simulation: interactive operator
//! console or a bounded headless run.

use clap::Parser;

mod commands;
mod console;
mod runtime;

use commands::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    irqsim_telemetry::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(run_args) => commands::run_interactive(run_args),
        Commands::Simulate(sim_args) => commands::run_headless(sim_args),
    }
}
