use thiserror::Error;

/// Errors surfaced by the controller's submission interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The dispatch loop has already exited; the event was not queued.
    #[error("controller is stopped; event rejected")]
    ControllerStopped,
}
