//! Support for example-driven integration suites.
//!
//! A test corpus that creates real columns cannot reuse names between runs,
//! so [`ColumnTranslator`] rewrites column names with a per-run timestamp and
//! then rewrites every payload that references them. [`compare_json`] diffs
//! the service's response against the expected tree while tolerating the
//! things that legitimately vary: array order and number representation.

use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Rewrites column names so a test corpus can run repeatedly against the
/// same live database.
#[derive(Debug, Default)]
pub struct ColumnTranslator {
    renames: HashMap<String, String>,
}

impl ColumnTranslator {
    pub fn new() -> Self {
        ColumnTranslator::default()
    }

    /// Append the current millisecond timestamp to a column definition's
    /// `name` and `api-name`, recording the rename for [`translate`].
    ///
    /// [`translate`]: ColumnTranslator::translate
    pub fn timestamp_column(&mut self, column: &mut Value) {
        let timestamp = Utc::now().timestamp_millis().to_string();
        let Some(column) = column.as_object_mut() else {
            return;
        };
        let old_api_name = match column.get("api-name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => return,
        };
        let new_api_name = format!("{}{}", old_api_name, timestamp);
        if let Some(Value::String(name)) = column.get_mut("name") {
            name.push_str(&timestamp);
        }
        column.insert("api-name".into(), Value::String(new_api_name.clone()));
        self.renames.insert(old_api_name, new_api_name);
    }

    /// Apply every recorded rename to a payload: object keys and string
    /// values that start with an original api-name get the timestamped one.
    pub fn translate(&self, payload: &Value) -> Value {
        match payload {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (self.rename(k), self.translate(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.translate(v)).collect()),
            Value::String(s) => Value::String(self.rename(s)),
            other => other.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.renames.clear();
    }

    fn rename(&self, s: &str) -> String {
        for (old, new) in &self.renames {
            if let Some(rest) = s.strip_prefix(old.as_str()) {
                return format!("{}{}", new, rest);
            }
        }
        s.to_string()
    }
}

/// Structural comparison of two JSON trees. Objects must match key for key,
/// arrays are compared as unordered multisets, and numbers compare by value
/// so `2` matches `2.0`.
pub fn compare_json(expected: &Value, got: &Value) -> bool {
    match (expected, got) {
        (Value::Object(expected), Value::Object(got)) => {
            expected.len() == got.len()
                && expected
                    .iter()
                    .all(|(k, v)| got.get(k).is_some_and(|g| compare_json(v, g)))
        }
        (Value::Array(expected), Value::Array(got)) => {
            expected.len() == got.len()
                && expected
                    .iter()
                    .all(|e| got.iter().any(|g| compare_json(e, g)))
        }
        (Value::Number(expected), Value::Number(got)) => expected.as_f64() == got.as_f64(),
        _ => expected == got,
    }
}

/// Compare a response against an expected object, skipping expected entries
/// whose value is the string `"ignore"` (timing and other volatile keys).
pub fn compare_result(expected: &Map<String, Value>, got: &Map<String, Value>) -> bool {
    expected.iter().all(|(key, value)| {
        if value == "ignore" {
            return true;
        }
        got.get(key).is_some_and(|g| compare_json(value, g))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timestamped_names_stay_in_sync() {
        let mut translator = ColumnTranslator::new();
        let mut column = json!({"name": "Model", "api-name": "model", "type": "string", "cardinality": "high"});
        translator.timestamp_column(&mut column);

        let name = column["name"].as_str().unwrap();
        let api_name = column["api-name"].as_str().unwrap();
        assert!(name.starts_with("Model") && name.len() > "Model".len());
        assert!(api_name.starts_with("model"));
        assert_eq!(&name["Model".len()..], &api_name["model".len()..]);
    }

    #[test]
    fn translate_rewrites_keys_and_values() {
        let mut translator = ColumnTranslator::new();
        let mut column = json!({"name": "Model", "api-name": "model", "type": "string", "cardinality": "high"});
        translator.timestamp_column(&mut column);
        let new_name = column["api-name"].as_str().unwrap().to_string();

        let query = json!([{"model": {"equals": "ford"}}, {"select": "model"}]);
        let translated = translator.translate(&query);
        assert!(translated[0].get(&new_name).is_some());
        assert_eq!(translated[1]["select"], json!(new_name));
    }

    #[test]
    fn translate_leaves_unrelated_payloads_alone() {
        let translator = ColumnTranslator::new();
        let query = json!({"year": {"equals": 2016}});
        assert_eq!(translator.translate(&query), query);
    }

    #[test]
    fn clear_forgets_renames() {
        let mut translator = ColumnTranslator::new();
        let mut column = json!({"name": "M", "api-name": "m", "type": "integer"});
        translator.timestamp_column(&mut column);
        translator.clear();
        assert_eq!(translator.translate(&json!("m")), json!("m"));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(compare_json(&json!(2), &json!(2.0)));
        assert!(!compare_json(&json!(2), &json!(3)));
    }

    #[test]
    fn arrays_compare_unordered() {
        assert!(compare_json(&json!([1, 2, 3]), &json!([3, 1, 2])));
        assert!(!compare_json(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn objects_must_match_exactly() {
        assert!(compare_json(
            &json!({"a": 1, "b": [1, 2]}),
            &json!({"b": [2, 1], "a": 1.0})
        ));
        assert!(!compare_json(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn ignore_marker_skips_volatile_keys() {
        let expected = json!({"status": "success", "took": "ignore"});
        let got = json!({"status": "success", "took": 0.1234});
        assert!(compare_result(
            expected.as_object().unwrap(),
            got.as_object().unwrap()
        ));
    }

    #[test]
    fn missing_expected_key_fails() {
        let expected = json!({"result": {"q": 1}});
        let got = json!({"status": "success"});
        assert!(!compare_result(
            expected.as_object().unwrap(),
            got.as_object().unwrap()
        ));
    }
}
