//! Platform feature provider contract.

use crate::error::FeatureError;
use crate::types::FeatureAction;

/// Capability interface over one platform's feature tooling.
///
/// A platform implementation overrides the queries and whichever mutations
/// it supports. The defaults fail with `NotImplemented` (queries) or
/// `UnsupportedAction` (mutations) naming the provider, so a capability gap
/// surfaces as a typed error instead of a stub panic.
pub trait FeatureProvider {
    /// Name reported in capability-gap errors, e.g. `"dism"`.
    fn provider_name(&self) -> &'static str;

    /// Whether the feature is currently installed.
    fn installed(&self, name: &str) -> Result<bool, FeatureError> {
        let _ = name;
        Err(FeatureError::NotImplemented {
            capability: "installed",
            provider: self.provider_name(),
        })
    }

    /// Whether the feature's payload is still available on disk.
    fn available(&self, name: &str) -> Result<bool, FeatureError> {
        let _ = name;
        Err(FeatureError::NotImplemented {
            capability: "available",
            provider: self.provider_name(),
        })
    }

    /// Install the feature.
    fn install(&mut self, name: &str) -> Result<(), FeatureError> {
        let _ = name;
        Err(FeatureError::UnsupportedAction {
            action: FeatureAction::Install,
            provider: self.provider_name(),
        })
    }

    /// Remove the feature, keeping its payload available.
    fn remove(&mut self, name: &str) -> Result<(), FeatureError> {
        let _ = name;
        Err(FeatureError::UnsupportedAction {
            action: FeatureAction::Remove,
            provider: self.provider_name(),
        })
    }

    /// Delete the feature's payload from the component store.
    fn delete(&mut self, name: &str) -> Result<(), FeatureError> {
        let _ = name;
        Err(FeatureError::UnsupportedAction {
            action: FeatureAction::Delete,
            provider: self.provider_name(),
        })
    }
}
