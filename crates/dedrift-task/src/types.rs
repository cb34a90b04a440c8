//! Task desired-state and wire payload types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::trigger::Trigger;

/// How often a task runs.
///
/// Closed set; the trigger compiler maps each frequency to its scheduler
/// trigger type and populates only the fields that frequency uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Once,
    Minute,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    OnLogon,
    #[serde(rename = "onstart")]
    OnStart,
    OnIdle,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Once => "once",
            Frequency::Minute => "minute",
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::OnLogon => "on_logon",
            Frequency::OnStart => "onstart",
            Frequency::OnIdle => "on_idle",
        };
        write!(f, "{name}")
    }
}

/// The `day` attribute, resolved once at the boundary.
///
/// Weekly frequencies encode tokens into a bitmask; monthly frequencies pass
/// the value through as days of month. `Mask` carries a pre-computed bitmask
/// past the codec unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySpec {
    /// A pre-mixed bitmask, bypassing token encoding.
    Mask(u32),
    /// Comma-separated weekday tokens, e.g. `"MON,WED,FRI"`.
    Tokens(String),
    /// Weekday tokens as a list.
    List(Vec<String>),
}

/// Privilege level the task runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunLevel {
    #[default]
    Limited,
    Highest,
}

/// Authentication mode a task runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogonType {
    /// Well-known service account; no password needed.
    ServiceAccount,
    /// Interactive token if available, password otherwise.
    InteractiveTokenOrPassword,
    /// Stored password.
    Password,
}

/// Desired state of one scheduled task.
///
/// Constructed fresh per convergence call and never mutated; the engine is
/// a pure function of this definition and the injected clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Task name, the identity key in the scheduler.
    pub task_name: String,
    /// Raw command line, decomposed into path and arguments.
    pub command: String,
    /// Working directory for the executable.
    #[serde(default)]
    pub working_directory: String,
    /// Account the task runs as.
    pub user: String,
    /// Password for the account, when one is required.
    #[serde(default)]
    pub password: Option<String>,
    /// Prefer the interactive token over the stored password.
    #[serde(default)]
    pub interactive_enabled: bool,
    /// Privilege level.
    #[serde(default)]
    pub run_level: RunLevel,
    /// Overwrite an existing task of the same name.
    #[serde(default)]
    pub force: bool,
    /// How often the task runs.
    pub frequency: Frequency,
    /// Interval count; unit depends on `frequency`. Defaults to 1.
    #[serde(default)]
    pub frequency_modifier: Option<u32>,
    /// Weekdays (weekly) or days of month (monthly).
    #[serde(default)]
    pub day: Option<DaySpec>,
    /// Start date as `DD/MM/YYYY`.
    #[serde(default)]
    pub start_day: Option<String>,
    /// Start time as `HH:MM`.
    #[serde(default)]
    pub start_time: Option<String>,
}

/// Executable action of a task, as the scheduler expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecAction {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Arguments")]
    pub arguments: String,
    #[serde(rename = "WorkingDirectory")]
    pub working_directory: String,
}

/// Fully compiled task definition, the wire contract toward
/// [`TaskGateway::apply`](crate::TaskGateway::apply).
///
/// `password` is present only when the resolved logon type requires one;
/// field presence tells the gateway which properties to set.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: String,
    pub exec_action: ExecAction,
    pub force: bool,
    pub logon_type: LogonType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub run_level: RunLevel,
    pub trigger: Trigger,
    pub user: String,
}

// Manual Debug so task payloads can be logged without leaking credentials.
impl fmt::Debug for TaskPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskPayload")
            .field("name", &self.name)
            .field("exec_action", &self.exec_action)
            .field("force", &self.force)
            .field("logon_type", &self.logon_type)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("run_level", &self.run_level)
            .field("trigger", &self.trigger)
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frequency_round_trips_through_serde() {
        for (frequency, name) in [
            (Frequency::Once, "\"once\""),
            (Frequency::OnLogon, "\"on_logon\""),
            (Frequency::OnStart, "\"onstart\""),
            (Frequency::OnIdle, "\"on_idle\""),
        ] {
            assert_eq!(serde_json::to_string(&frequency).unwrap(), name);
            let parsed: Frequency = serde_json::from_str(name).unwrap();
            assert_eq!(parsed, frequency);
        }
    }

    #[test]
    fn test_day_spec_deserializes_by_shape() {
        let mask: DaySpec = serde_json::from_str("42").unwrap();
        assert_eq!(mask, DaySpec::Mask(42));

        let tokens: DaySpec = serde_json::from_str("\"MON,FRI\"").unwrap();
        assert_eq!(tokens, DaySpec::Tokens("MON,FRI".to_string()));

        let list: DaySpec = serde_json::from_str("[\"MON\",\"FRI\"]").unwrap();
        assert_eq!(list, DaySpec::List(vec!["MON".to_string(), "FRI".to_string()]));
    }

    #[test]
    fn test_task_definition_optional_fields_default() {
        let def: TaskDefinition = serde_json::from_str(
            r#"{
                "task_name": "backup",
                "command": "C:\\tools\\backup.exe",
                "user": "SYSTEM",
                "frequency": "daily"
            }"#,
        )
        .unwrap();

        assert_eq!(def.working_directory, "");
        assert_eq!(def.password, None);
        assert!(!def.interactive_enabled);
        assert!(!def.force);
        assert_eq!(def.run_level, RunLevel::Limited);
        assert_eq!(def.frequency_modifier, None);
        assert_eq!(def.day, None);
    }

    #[test]
    fn test_payload_debug_redacts_password() {
        let payload = TaskPayload {
            name: "backup".to_string(),
            exec_action: ExecAction {
                path: "C:\\tools\\backup.exe".to_string(),
                arguments: String::new(),
                working_directory: String::new(),
            },
            force: false,
            logon_type: LogonType::Password,
            password: Some("hunter2".to_string()),
            run_level: RunLevel::Limited,
            trigger: Trigger::Once {
                start_boundary: None,
            },
            user: "bob".to_string(),
        };

        let rendered = format!("{payload:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
