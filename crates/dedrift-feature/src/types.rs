//! Feature desired-state types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Desired state of one optional feature package.
///
/// The name is the only identity; presence is queried live each call and
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRequest {
    pub feature_name: String,
}

impl FeatureRequest {
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
        }
    }
}

/// What to do with the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureAction {
    /// Make the feature present.
    Install,
    /// Make the feature absent, keeping its payload available.
    Remove,
    /// Remove the feature's payload from the component store.
    Delete,
}

impl fmt::Display for FeatureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeatureAction::Install => "install",
            FeatureAction::Remove => "remove",
            FeatureAction::Delete => "delete",
        };
        write!(f, "{name}")
    }
}

/// Result of one convergence call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureOutcome {
    /// Whether a mutation ran or, in dry-run, would have run.
    pub changed: bool,
    /// Short summary of what happened.
    pub msg: String,
}

impl FeatureOutcome {
    pub(crate) fn changed(msg: impl Into<String>) -> Self {
        Self {
            changed: true,
            msg: msg.into(),
        }
    }

    pub(crate) fn unchanged(msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            msg: msg.into(),
        }
    }
}
