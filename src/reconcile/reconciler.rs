use serde::Serialize;
use serde_json::{Number, Value};

use super::aggregator::{points_of, resolve_user_id, PointsSum, UserId};

/// Key names tried in order when resolving a user record's identifier.
const USER_ID_ALIASES: &[&str] = &["_id", "id"];

/// One user whose recorded total disagrees with the sum of their logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub id: UserId,
    pub name: Option<String>,
    pub user_points: Number,
    pub sum_of_logs: Number,
}

/// Serialize a total as a JSON integer when it is integral, so `10` stays
/// `10` on the wire rather than becoming `10.0`.
fn to_number(value: f64) -> Number {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

/// Resolve the display name: `name` verbatim when present, else whichever of
/// `firstname`/`lastname` are present joined with a space, else nothing.
fn display_name(user: &Value) -> Option<String> {
    if let Some(name) = user.get("name").and_then(Value::as_str) {
        return Some(name.to_string());
    }
    let parts: Vec<&str> = ["firstname", "lastname"]
        .iter()
        .filter_map(|key| user.get(*key).and_then(Value::as_str))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Compare each user's recorded total against the summed logs, preserving
/// the input order of user records. Users with no resolvable identifier are
/// excluded; users absent from the sums compare against 0.
pub fn find_mismatches(users: &[Value], sums: &PointsSum) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for user in users {
        let Some(user_id) = resolve_user_id(user, USER_ID_ALIASES) else {
            continue;
        };
        let recorded = points_of(user);
        let summed = sums.get(&user_id).copied().unwrap_or(0.0);
        if recorded != summed {
            mismatches.push(Mismatch {
                id: user_id,
                name: display_name(user),
                user_points: to_number(recorded),
                sum_of_logs: to_number(summed),
            });
        }
    }
    mismatches
}
