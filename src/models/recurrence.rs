use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

fn default_interval() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub days_of_week: Vec<Weekday>,
    #[serde(default)]
    pub until: Option<NaiveDate>,
}

impl RecurrencePattern {
    pub fn describe(&self) -> String {
        let unit = match self.frequency {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
        };
        let mut out = if self.interval <= 1 {
            format!("Every {unit}")
        } else {
            format!("Every {} {unit}s", self.interval)
        };

        if !self.days_of_week.is_empty() {
            let mut days = self.days_of_week.clone();
            days.sort();
            days.dedup();
            let days: Vec<&str> = days.iter().map(|d| d.label()).collect();
            out.push_str(&format!(" on {}", days.join(", ")));
        }
        if let Some(until) = self.until {
            out.push_str(&format!(" until {}", until.format("%Y-%m-%d")));
        }
        out
    }
}

/// A job's repeat rule as the backend hands it over: absent, an opaque
/// string, or a structured pattern. Resolved once while decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Value>", into = "Option<Value>")]
pub enum Recurrence {
    #[default]
    Unset,
    Raw(String),
    Parsed(RecurrencePattern),
}

impl Recurrence {
    /// A pattern that never advances (interval 0) is no recurrence at all.
    fn resolved(pattern: RecurrencePattern) -> Self {
        if pattern.interval == 0 {
            tracing::warn!("recurrence with zero interval, treating as none");
            return Recurrence::Unset;
        }
        Recurrence::Parsed(pattern)
    }

    /// Weekly rules without weekdays repeat on the day the job starts.
    pub fn with_default_weekday(self, day: Weekday) -> Self {
        match self {
            Recurrence::Parsed(mut p)
                if p.frequency == Frequency::Weekly && p.days_of_week.is_empty() =>
            {
                p.days_of_week.push(day);
                Recurrence::Parsed(p)
            }
            other => other,
        }
    }

    pub fn pattern(&self) -> Option<&RecurrencePattern> {
        match self {
            Recurrence::Parsed(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.pattern().is_some()
    }

    pub fn describe(&self) -> String {
        match self {
            Recurrence::Unset => "Does not repeat".to_string(),
            Recurrence::Raw(raw) => raw.clone(),
            Recurrence::Parsed(p) => p.describe(),
        }
    }
}

impl From<Option<Value>> for Recurrence {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Recurrence::Unset,
            Some(Value::String(raw)) => {
                if raw.trim().is_empty() {
                    return Recurrence::Unset;
                }
                match serde_json::from_str::<RecurrencePattern>(&raw) {
                    Ok(pattern) => Recurrence::resolved(pattern),
                    Err(_) => Recurrence::Raw(raw),
                }
            }
            Some(obj @ Value::Object(_)) => match serde_json::from_value(obj) {
                Ok(pattern) => Recurrence::resolved(pattern),
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable recurrence pattern, treating as none");
                    Recurrence::Unset
                }
            },
            Some(other) => {
                tracing::warn!(value = %other, "unexpected recurrence value, treating as none");
                Recurrence::Unset
            }
        }
    }
}

impl From<Recurrence> for Option<Value> {
    fn from(recurrence: Recurrence) -> Self {
        match recurrence {
            Recurrence::Unset => None,
            Recurrence::Raw(raw) => Some(Value::String(raw)),
            Recurrence::Parsed(pattern) => serde_json::to_value(pattern).ok(),
        }
    }
}
