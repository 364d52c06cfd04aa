//! The three-state outcome contract shared by every result type

/// Terminal state of an operation.
///
/// Success, cancellation and failure are mutually exclusive and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed
    Success,
    /// The operation was abandoned, usually by the user
    Cancelled,
    /// The operation failed; a message and an error object are attached
    Failure,
}

/// Read access to an operation outcome, plus the caller-owned side channel
/// (`is_handled`, `warnings`) that does not affect the state.
pub trait Outcome {
    /// The terminal state
    fn status(&self) -> Status;

    /// Informational or failure message
    fn message(&self) -> Option<&str>;

    /// Error captured while the operation ran
    fn exception(&self) -> Option<&anyhow::Error>;

    /// Warnings that did not make the operation fail
    fn warnings(&self) -> &[String];

    /// Mutable access to the warnings list
    fn warnings_mut(&mut self) -> &mut Vec<String>;

    /// Whether the caller has acknowledged the attached error
    fn is_handled(&self) -> bool;

    /// Mark the attached error as acknowledged (or not)
    fn set_handled(&mut self, handled: bool);

    /// `true` on success
    fn is_successful(&self) -> bool {
        self.status() == Status::Success
    }

    /// `true` on cancellation
    fn is_cancelled(&self) -> bool {
        self.status() == Status::Cancelled
    }

    /// `true` when neither successful nor cancelled
    fn is_failure(&self) -> bool {
        !self.is_successful() && !self.is_cancelled()
    }
}

/// An outcome that also carries a service status code
pub trait ServiceOutcome: Outcome {
    /// HTTP-style status code; absent for cancellations
    fn status_code(&self) -> Option<u16>;
}
