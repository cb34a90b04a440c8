//! Error types for feature convergence.

use dedrift_core::GatewayError;
use thiserror::Error;

use crate::types::FeatureAction;

/// Errors that can occur while converging an optional feature.
///
/// `UnsupportedAction` and `NotImplemented` mark capability gaps in the
/// current platform provider, not transient conditions; they are never
/// retried.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The provider does not support this mutation.
    #[error("{provider} does not support :{action}")]
    UnsupportedAction {
        action: FeatureAction,
        provider: &'static str,
    },

    /// The provider does not implement this presence query.
    #[error("{provider} does not implement {capability}")]
    NotImplemented {
        capability: &'static str,
        provider: &'static str,
    },

    /// The feature gateway rejected an operation.
    #[error("feature gateway {operation} failed for '{feature}'")]
    Gateway {
        operation: &'static str,
        feature: String,
        #[source]
        source: GatewayError,
    },
}
