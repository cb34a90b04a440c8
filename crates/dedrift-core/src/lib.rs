//! Shared capability seams for dedrift convergence engines.
//!
//! This crate holds the collaborator contracts both resource engines depend
//! on:
//! - `Clock`: injectable wall clock for deterministic payload compilation
//! - `Reporter`: sink for human-readable convergence narration
//! - `ApplyMode`: enforce vs. dry-run
//! - `GatewayError`: opaque failure surfaced by an OS-facing gateway

mod clock;
mod gateway;
mod mode;
mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use gateway::GatewayError;
pub use mode::ApplyMode;
pub use report::{MemoryReporter, Reporter, TracingReporter};
