//! Optional OS feature package convergence.
//!
//! A generic install/remove/delete state machine over feature presence.
//! Presence is queried live through a platform-specific
//! [`FeatureProvider`]; the engine performs the minimum mutation to reach
//! desired state and narrates what it changed.

mod engine;
mod error;
mod provider;
mod types;

pub use engine::FeatureConverger;
pub use error::FeatureError;
pub use provider::FeatureProvider;
pub use types::{FeatureAction, FeatureOutcome, FeatureRequest};
