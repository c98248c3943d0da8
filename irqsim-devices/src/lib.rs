//! # irqsim-devices
//!
//! Event sources: one worker thread per device, emitting interrupts at
//! randomized intervals into the controller's submission interface. Workers
//! know nothing about the controller's internals; the public submit/stop/join
//! contract is the whole seam.

pub mod generator;

pub use generator::DeviceGenerator;
