use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Which of the two data sources a payload came from. Each kind carries its
/// own wrapper-key priority list and single-record marker keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Users,
    Logs,
}

impl SourceKind {
    /// Source name used in error messages, matching the request field that
    /// configured it.
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Users => "users_url",
            SourceKind::Logs => "logs_url",
        }
    }

    /// Wrapper keys probed in priority order when the payload is an object.
    fn plural_keys(self) -> &'static [&'static str] {
        match self {
            SourceKind::Users => &["users", "data"],
            SourceKind::Logs => &["points_logs", "logs", "data"],
        }
    }

    /// Keys whose presence marks a bare object as a single record.
    fn marker_keys(self) -> &'static [&'static str] {
        match self {
            SourceKind::Users => &["_id", "id", "name"],
            SourceKind::Logs => &["user", "user_id", "points"],
        }
    }

    /// The conventional wrapper key named in the malformed-source error.
    fn expected_key(self) -> &'static str {
        match self {
            SourceKind::Users => "users",
            SourceKind::Logs => "points_logs",
        }
    }

    fn malformed(self) -> AppError {
        AppError::MalformedSource {
            source: self.label(),
            expected_key: self.expected_key(),
        }
    }
}

/// Normalize a decoded payload into a flat list of records.
///
/// Accepted shapes: a bare array, an object wrapping an array under one of
/// the source's conventional keys, or a single bare record carrying at least
/// one marker key. Anything else fails the whole run.
pub fn normalize(kind: SourceKind, value: Value) -> AppResult<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(map) => {
            for key in kind.plural_keys() {
                match map.get(*key) {
                    Some(Value::Array(records)) => return Ok(records.clone()),
                    Some(Value::Null) | None => continue,
                    // A wrapper key holding a non-sequence is not a usable
                    // record list.
                    Some(_) => return Err(kind.malformed()),
                }
            }
            if kind.marker_keys().iter().any(|k| map.contains_key(*k)) {
                return Ok(vec![Value::Object(map)]);
            }
            Err(kind.malformed())
        }
        _ => Err(kind.malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_passes_through() {
        let records = normalize(SourceKind::Users, json!([{"_id": 1, "name": "A"}])).unwrap();
        assert_eq!(records, vec![json!({"_id": 1, "name": "A"})]);
    }

    #[test]
    fn test_wrapped_array_variants_agree() {
        let record = json!({"_id": 1, "name": "A"});
        let shapes = vec![
            json!([{"_id": 1, "name": "A"}]),
            json!({"users": [{"_id": 1, "name": "A"}]}),
            json!({"data": [{"_id": 1, "name": "A"}]}),
            json!({"_id": 1, "name": "A"}),
        ];
        for shape in shapes {
            let records = normalize(SourceKind::Users, shape).unwrap();
            assert_eq!(records, vec![record.clone()]);
        }
    }

    #[test]
    fn test_users_key_beats_data_key() {
        let payload = json!({
            "data": [{"_id": 2}],
            "users": [{"_id": 1}],
        });
        let records = normalize(SourceKind::Users, payload).unwrap();
        assert_eq!(records, vec![json!({"_id": 1})]);
    }

    #[test]
    fn test_logs_key_priority_order() {
        let payload = json!({
            "data": [{"user": 3}],
            "logs": [{"user": 2}],
            "points_logs": [{"user": 1}],
        });
        let records = normalize(SourceKind::Logs, payload).unwrap();
        assert_eq!(records, vec![json!({"user": 1})]);
    }

    #[test]
    fn test_null_wrapper_key_falls_through() {
        let payload = json!({"users": null, "data": [{"_id": 1}]});
        let records = normalize(SourceKind::Users, payload).unwrap();
        assert_eq!(records, vec![json!({"_id": 1})]);
    }

    #[test]
    fn test_single_log_record_wrapped() {
        let records = normalize(SourceKind::Logs, json!({"user": 1, "points": 5})).unwrap();
        assert_eq!(records, vec![json!({"user": 1, "points": 5})]);
    }

    #[test]
    fn test_unrecognized_object_fails() {
        let err = normalize(SourceKind::Users, json!({"foo": "bar"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "users_url did not return expected JSON (array or object with \"users\" key)"
        );

        let err = normalize(SourceKind::Logs, json!({"foo": "bar"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "logs_url did not return expected JSON (array or object with \"points_logs\" key)"
        );
    }

    #[test]
    fn test_scalar_payload_fails() {
        assert!(normalize(SourceKind::Users, json!(42)).is_err());
        assert!(normalize(SourceKind::Logs, json!("nope")).is_err());
        assert!(normalize(SourceKind::Users, Value::Null).is_err());
    }

    #[test]
    fn test_non_array_wrapper_value_fails() {
        let err = normalize(SourceKind::Users, json!({"users": {"_id": 1}})).unwrap_err();
        assert!(matches!(err, AppError::MalformedSource { source: "users_url", .. }));
    }
}
