//! Gateway failure type.

/// Opaque failure surfaced by an OS-facing gateway.
///
/// The engines wrap these with operation and resource context but never
/// modify, retry, or roll back the underlying failure; OS task and feature
/// mutations are not assumed transactional.
pub type GatewayError = Box<dyn std::error::Error + Send + Sync + 'static>;
