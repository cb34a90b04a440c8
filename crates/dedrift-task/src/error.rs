//! Error types for task convergence.

use dedrift_core::GatewayError;
use thiserror::Error;

use crate::types::Frequency;

/// Errors that can occur while compiling or converging a scheduled task.
///
/// Validation errors are raised before any gateway call is attempted, so a
/// failed validation never leaves a partially applied task behind.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A weekday token outside the accepted set.
    #[error(
        "invalid day token '{token}', valid values are: MON, TUE, WED, THU, FRI, SAT, SUN and *, separated by commas"
    )]
    InvalidDayToken { token: String },

    /// Start day/time did not combine into a parseable boundary.
    #[error("invalid start boundary '{value}', expected DD/MM/YYYY HH:MM")]
    InvalidDateTime { value: String },

    /// A non-service-account user needs a password.
    #[error("password is mandatory when using interactive mode or non-system user '{user}'")]
    MissingPassword { user: String },

    /// `day` supplied for a frequency that has no day field.
    #[error("day should only be used with weekly or monthly frequency, not {frequency}")]
    DayNotApplicable { frequency: Frequency },

    /// The executable path could not be split from the command line.
    #[error("could not split executable path from command '{command}'")]
    MalformedCommand { command: String },

    /// The scheduler gateway rejected an operation.
    #[error("task gateway {operation} failed for '{task}'")]
    Gateway {
        operation: &'static str,
        task: String,
        #[source]
        source: GatewayError,
    },
}
