//! Command-line decomposition.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::TaskError;
use crate::types::ExecAction;

/// Leading token is a double-quoted segment or a run of non-whitespace;
/// the remainder, leading whitespace trimmed, is the argument string.
fn command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:"([^"]+)"|([^"\s]+))\s*(.*)"#).expect("command pattern is valid")
    })
}

/// Split a raw command line into the scheduler's exec action.
///
/// Quotes around the executable path are stripped; the argument string is
/// kept verbatim. The working directory passes through from the desired
/// state unchanged.
pub fn decompose_command(command: &str, working_directory: &str) -> Result<ExecAction, TaskError> {
    let captures =
        command_pattern()
            .captures(command)
            .ok_or_else(|| TaskError::MalformedCommand {
                command: command.to_string(),
            })?;

    let path = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| TaskError::MalformedCommand {
            command: command.to_string(),
        })?;

    let arguments = captures
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Ok(ExecAction {
        path,
        arguments,
        working_directory: working_directory.to_string(),
    })
}
