//! Scheduler gateway contract.

use dedrift_core::GatewayError;

use crate::types::TaskPayload;

/// The OS-facing scheduler collaborator.
///
/// `apply` receives the fully compiled payload and owns diffing against the
/// live task; the engine never pre-reads current state for create/update.
/// Lifecycle operations act on the task name alone. Failures propagate to
/// the engine unmodified.
pub trait TaskGateway {
    /// Create or update the named task to match the payload.
    fn apply(&mut self, payload: &TaskPayload) -> Result<(), GatewayError>;

    /// Start the named task now.
    fn start(&mut self, name: &str) -> Result<(), GatewayError>;

    /// Stop the named task if it is running.
    fn stop(&mut self, name: &str) -> Result<(), GatewayError>;

    /// Enable the named task's triggers.
    fn enable(&mut self, name: &str) -> Result<(), GatewayError>;

    /// Disable the named task's triggers.
    fn disable(&mut self, name: &str) -> Result<(), GatewayError>;

    /// Delete the named task.
    fn delete(&mut self, name: &str) -> Result<(), GatewayError>;
}
