//! Trigger compilation.
//!
//! Translates the declarative recurrence spec of a [`TaskDefinition`] into
//! the structured trigger the scheduler gateway expects. Each frequency
//! populates its own disjoint set of wire fields; absent fields must not
//! appear in the serialized mapping at all, since the gateway interprets
//! field presence as "set this property".

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use dedrift_core::Clock;

use crate::boundary::format_start_boundary;
use crate::daymask::encode_days;
use crate::error::TaskError;
use crate::types::{DaySpec, Frequency, TaskDefinition};

/// A compiled trigger, one case per frequency.
///
/// Every case carries only the fields its frequency uses; serialization
/// flattens the case into the gateway's sparse key/value mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Once {
        start_boundary: Option<String>,
    },
    Minute {
        start_boundary: Option<String>,
        interval: u32,
    },
    Hourly {
        start_boundary: Option<String>,
        interval: u32,
    },
    Daily {
        start_boundary: Option<String>,
        days_interval: u32,
    },
    Weekly {
        start_boundary: Option<String>,
        weeks_interval: u32,
        days_of_week: Option<u32>,
    },
    Monthly {
        start_boundary: Option<String>,
        days_interval: u32,
        days_of_month: Option<DaySpec>,
    },
    OnLogon {
        start_boundary: Option<String>,
        user_id: String,
    },
    OnStart {
        start_boundary: Option<String>,
    },
    OnIdle {
        start_boundary: Option<String>,
    },
}

impl Trigger {
    /// The gateway's trigger `Type` for this case.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Trigger::Once { .. } | Trigger::Minute { .. } | Trigger::Hourly { .. } => "time",
            Trigger::Daily { .. } => "daily",
            Trigger::Weekly { .. } => "weekly",
            Trigger::Monthly { .. } => "monthly",
            Trigger::OnLogon { .. } => "logon",
            Trigger::OnStart { .. } => "boot",
            Trigger::OnIdle { .. } => "idle",
        }
    }

    fn start_boundary(&self) -> Option<&str> {
        match self {
            Trigger::Once { start_boundary }
            | Trigger::Minute { start_boundary, .. }
            | Trigger::Hourly { start_boundary, .. }
            | Trigger::Daily { start_boundary, .. }
            | Trigger::Weekly { start_boundary, .. }
            | Trigger::Monthly { start_boundary, .. }
            | Trigger::OnLogon { start_boundary, .. }
            | Trigger::OnStart { start_boundary }
            | Trigger::OnIdle { start_boundary } => start_boundary.as_deref(),
        }
    }

    /// Flatten into the gateway mapping. Only populated fields appear.
    pub fn to_wire(&self) -> Map<String, Value> {
        let mut wire = Map::new();

        if let Some(boundary) = self.start_boundary() {
            wire.insert("StartBoundary".to_string(), Value::from(boundary));
        }
        wire.insert("Type".to_string(), Value::from(self.wire_type()));

        match self {
            Trigger::Minute { interval, .. } => {
                wire.insert(
                    "Repetition".to_string(),
                    json!({ "Interval": format!("PT{interval}M") }),
                );
            }
            Trigger::Hourly { interval, .. } => {
                wire.insert(
                    "Repetition".to_string(),
                    json!({ "Interval": format!("PT{interval}H") }),
                );
            }
            Trigger::Daily { days_interval, .. } => {
                wire.insert("DaysInterval".to_string(), Value::from(*days_interval));
            }
            Trigger::Weekly {
                weeks_interval,
                days_of_week,
                ..
            } => {
                wire.insert("WeeksInterval".to_string(), Value::from(*weeks_interval));
                if let Some(mask) = days_of_week {
                    wire.insert("DaysOfWeek".to_string(), Value::from(*mask));
                }
            }
            Trigger::Monthly {
                days_interval,
                days_of_month,
                ..
            } => {
                wire.insert("DaysInterval".to_string(), Value::from(*days_interval));
                if let Some(days) = days_of_month {
                    wire.insert("DaysOfMonth".to_string(), day_spec_value(days));
                }
            }
            Trigger::OnLogon { user_id, .. } => {
                wire.insert("UserId".to_string(), Value::from(user_id.as_str()));
            }
            Trigger::Once { .. } | Trigger::OnStart { .. } | Trigger::OnIdle { .. } => {}
        }

        wire
    }
}

// Day-of-month values keep the shape they were authored in.
fn day_spec_value(spec: &DaySpec) -> Value {
    match spec {
        DaySpec::Mask(mask) => Value::from(*mask),
        DaySpec::Tokens(tokens) => Value::from(tokens.as_str()),
        DaySpec::List(items) => Value::Array(items.iter().cloned().map(Value::from).collect()),
    }
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

/// Compile a task definition's recurrence spec into a [`Trigger`].
///
/// `day` is rejected outside weekly/monthly frequencies. `StartBoundary` is
/// populated only when the author supplied a start day or time; the
/// frequency modifier defaults to 1.
pub fn compile_trigger(def: &TaskDefinition, clock: &dyn Clock) -> Result<Trigger, TaskError> {
    if def.day.is_some() && !matches!(def.frequency, Frequency::Weekly | Frequency::Monthly) {
        return Err(TaskError::DayNotApplicable {
            frequency: def.frequency,
        });
    }

    let start_boundary = if def.start_day.is_some() || def.start_time.is_some() {
        Some(format_start_boundary(
            def.start_day.as_deref(),
            def.start_time.as_deref(),
            clock,
        )?)
    } else {
        None
    };

    let modifier = def.frequency_modifier.unwrap_or(1);

    Ok(match def.frequency {
        Frequency::Once => Trigger::Once { start_boundary },
        Frequency::Minute => Trigger::Minute {
            start_boundary,
            interval: modifier,
        },
        Frequency::Hourly => Trigger::Hourly {
            start_boundary,
            interval: modifier,
        },
        Frequency::Daily => Trigger::Daily {
            start_boundary,
            days_interval: modifier,
        },
        Frequency::Weekly => Trigger::Weekly {
            start_boundary,
            weeks_interval: modifier,
            days_of_week: def.day.as_ref().map(encode_days).transpose()?,
        },
        Frequency::Monthly => Trigger::Monthly {
            start_boundary,
            days_interval: modifier,
            days_of_month: def.day.clone(),
        },
        Frequency::OnLogon => Trigger::OnLogon {
            start_boundary,
            user_id: def.user.clone(),
        },
        Frequency::OnStart => Trigger::OnStart { start_boundary },
        Frequency::OnIdle => Trigger::OnIdle { start_boundary },
    })
}
