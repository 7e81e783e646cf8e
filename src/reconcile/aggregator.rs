use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Key names tried in order when resolving which user a log entry belongs to.
const LOG_USER_ALIASES: &[&str] = &["user", "user_id", "userId", "userid"];

/// A user identifier as it appears in source payloads: either a JSON integer
/// or a string. Serializes back to the same scalar it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl UserId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(UserId::Int),
            Value::String(s) => Some(UserId::Text(s.clone())),
            _ => None,
        }
    }
}

/// Per-user point totals summed from the log records.
pub type PointsSum = HashMap<UserId, f64>;

/// Resolve a record's user identifier by trying alias keys in order; the
/// first non-null value wins. Returns None when no alias resolves.
pub fn resolve_user_id(record: &Value, aliases: &[&str]) -> Option<UserId> {
    aliases
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
        .and_then(UserId::from_value)
}

/// Read a record's point value, defaulting to 0 when absent or non-numeric.
pub fn points_of(record: &Value) -> f64 {
    record.get("points").and_then(Value::as_f64).unwrap_or(0.0)
}

/// Sum points per user across the normalized log records. Records with no
/// resolvable user identifier are skipped.
pub fn sum_points(logs: &[Value]) -> PointsSum {
    let mut sums = PointsSum::new();
    for entry in logs {
        let Some(user_id) = resolve_user_id(entry, LOG_USER_ALIASES) else {
            continue;
        };
        *sums.entry(user_id).or_insert(0.0) += points_of(entry);
    }
    sums
}
