//! # irqsim-core
//!
//! Foundation layer for the interrupt-dispatch simulation.
//! Built with safety, determinism, and testability as primary design constraints.
//!
//! ### Key Submodules:
//! - `device`: the closed set of simulated devices and their priority ranks
//! - `event`: immutable interrupt events carrying (device, sequence, timestamp)
//! - `queue`: priority queue with deterministic FIFO tie-breaking
//! - `mask`: per-device atomic suppression flags
//! - `audit`: audit records, outcomes and the durable sink trait
//! - `controller`: the concurrent dispatch engine tying everything together

pub mod audit;
pub mod controller;
pub mod device;
pub mod error;
pub mod event;
pub mod mask;
pub mod queue;

pub mod prelude {
    pub use crate::audit::{AuditRecord, AuditSink, NullSink, Outcome};
    pub use crate::controller::{ControllerOptions, ControllerStatus, InterruptController};
    pub use crate::device::Device;
    pub use crate::error::SubmitError;
    pub use crate::event::InterruptEvent;
}

pub use controller::InterruptController;
pub use device::Device;
pub use error::SubmitError;
