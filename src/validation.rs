//! Per-operation request validation.
//!
//! Every validator checks the caller-supplied payload before any network
//! activity and returns the first violation found, in a fixed check order so
//! error messages are deterministic. Payloads of the wrong JSON kind are
//! rejected with a precise error rather than being coerced.

use crate::column::{Cardinality, ColumnType};
use crate::error::Error;
use serde_json::{Map, Value};

/// Limit on queries per count request.
const COUNT_QUERY_LIMIT: usize = 10;
/// Limit on queries per top-values request.
const TOP_VALUES_QUERY_LIMIT: usize = 5;
/// Limit on columns per query inside a top-values request.
const TOP_VALUES_COLUMN_LIMIT: usize = 6;
/// Limit on columns per data-extraction request.
const EXTRACTION_COLUMN_LIMIT: usize = 10;

const MAX_COLUMN_NAME_LEN: usize = 80;
const MAX_COLUMN_DESCRIPTION_LEN: usize = 300;

const SAVED_QUERY_TYPES: &[&str] = &[
    "count/entity",
    "count/event",
    "count/entity/total",
    "aggregation",
    "top_values",
];

/// Validate a column payload: one definition object or an array of them.
pub fn validate_column(payload: &Value) -> Result<(), Error> {
    match payload {
        Value::Array(defs) => {
            for def in defs {
                validate_column_def(def)?;
            }
            Ok(())
        }
        _ => validate_column_def(payload),
    }
}

fn validate_column_def(def: &Value) -> Result<(), Error> {
    let def = match def {
        Value::Object(map) => map,
        _ => {
            return Err(Error::Validation(
                "column definition must be a JSON object".into(),
            ))
        }
    };

    let name = def
        .get("name")
        .ok_or_else(|| Error::Validation("column definition is missing the 'name' key".into()))?;
    match name {
        Value::String(name) if name.len() <= MAX_COLUMN_NAME_LEN => {}
        Value::String(_) => {
            return Err(Error::Validation(format!(
                "column name is too long (max {} chars)",
                MAX_COLUMN_NAME_LEN
            )))
        }
        _ => return Err(Error::Validation("column 'name' must be a string".into())),
    }

    if let Some(description) = def.get("description") {
        match description {
            Value::String(d) if d.len() <= MAX_COLUMN_DESCRIPTION_LEN => {}
            Value::String(_) => {
                return Err(Error::Validation(format!(
                    "column description is too long (max {} chars)",
                    MAX_COLUMN_DESCRIPTION_LEN
                )))
            }
            _ => {
                return Err(Error::Validation(
                    "column 'description' must be a string".into(),
                ))
            }
        }
    }

    let type_value = def
        .get("type")
        .ok_or_else(|| Error::Validation("column definition is missing the 'type' key".into()))?;
    let column_type: ColumnType = serde_json::from_value(type_value.clone())
        .map_err(|_| Error::Validation(format!("column has an invalid type: {}", type_value)))?;

    if def.contains_key("decimal-place") && !column_type.is_decimal() {
        return Err(Error::Validation(
            "'decimal-place' is only accepted on 'decimal' or 'decimal-time-series' columns".into(),
        ));
    }

    if column_type == ColumnType::String {
        let cardinality = def.get("cardinality").ok_or_else(|| {
            Error::Validation("string columns require the 'cardinality' key".into())
        })?;
        serde_json::from_value::<Cardinality>(cardinality.clone()).map_err(|_| {
            Error::Validation("column 'cardinality' must be 'high' or 'low'".into())
        })?;
    }

    if column_type == ColumnType::Enumerated && !def.contains_key("range") {
        return Err(Error::Validation(
            "enumerated columns require the 'range' key".into(),
        ));
    }

    Ok(())
}

/// Validate a count-entity or count-event query payload.
pub fn validate_count_query(payload: &Value) -> Result<(), Error> {
    if let Value::Array(queries) = payload {
        if queries.len() > COUNT_QUERY_LIMIT {
            return Err(Error::Validation(format!(
                "count queries are limited to {} queries per request",
                COUNT_QUERY_LIMIT
            )));
        }
    }
    Ok(())
}

/// Validate a top-values query payload.
pub fn validate_top_values_query(payload: &Value) -> Result<(), Error> {
    let queries = as_object(payload, "top values query")?;
    if queries.len() > TOP_VALUES_QUERY_LIMIT {
        return Err(Error::Validation(format!(
            "top values queries are limited to {} queries per request",
            TOP_VALUES_QUERY_LIMIT
        )));
    }
    for (name, query) in queries {
        let columns = match query {
            Value::Object(columns) => columns,
            _ => {
                return Err(Error::Validation(format!(
                    "top values query '{}' must be a JSON object",
                    name
                )))
            }
        };
        if columns.len() > TOP_VALUES_COLUMN_LIMIT {
            return Err(Error::Validation(format!(
                "top values query '{}' exceeds the limit of {} columns per query",
                name, TOP_VALUES_COLUMN_LIMIT
            )));
        }
    }
    Ok(())
}

/// Validate a data-extraction (result or score) query payload.
pub fn validate_data_extraction_query(payload: &Value) -> Result<(), Error> {
    let query = as_object(payload, "data extraction query")?;
    if let Some(columns) = query.get("columns") {
        let len = match columns {
            Value::Array(a) => a.len(),
            Value::Object(m) => m.len(),
            _ => 0,
        };
        if len > EXTRACTION_COLUMN_LIMIT {
            return Err(Error::Validation(format!(
                "the 'columns' key must list at most {} columns",
                EXTRACTION_COLUMN_LIMIT
            )));
        }
    }
    Ok(())
}

/// Validate a saved-query definition.
pub fn validate_saved_query(payload: &Value) -> Result<(), Error> {
    let query = as_object(payload, "saved query")?;
    let query_type = query
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Validation("saved query must declare a 'type'".into()))?;
    if !SAVED_QUERY_TYPES.contains(&query_type) {
        return Err(Error::Validation(format!(
            "saved query has an invalid type '{}'",
            query_type
        )));
    }
    Ok(())
}

fn as_object<'a>(payload: &'a Value, what: &str) -> Result<&'a Map<String, Value>, Error> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Validation(format!("{} must be a JSON object", what))),
    }
}
