//! Typed column definitions.
//!
//! Column payloads can always be passed as raw JSON; this module is the
//! typed construction surface for callers who want the supported types and
//! cardinalities as closed enums rather than strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The column types the service supports.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    UniqueId,
    Boolean,
    String,
    Integer,
    Decimal,
    Enumerated,
    Date,
    IntegerTimeSeries,
    DecimalTimeSeries,
    StringTimeSeries,
    Datetime,
}

impl ColumnType {
    /// Whether this type accepts a `decimal-place` setting.
    pub fn is_decimal(self) -> bool {
        matches!(self, ColumnType::Decimal | ColumnType::DecimalTimeSeries)
    }
}

/// Expected value distribution of a string column.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    High,
    Low,
}

/// A column definition as accepted by the create-column operation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,
    #[serde(rename = "decimal-place", skip_serializing_if = "Option::is_none")]
    pub decimal_place: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<String>>,
    #[serde(rename = "api-name", skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        ColumnDef {
            name: name.into(),
            column_type,
            description: None,
            cardinality: None,
            decimal_place: None,
            range: None,
            api_name: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = Some(cardinality);
        self
    }

    pub fn decimal_place(mut self, places: u32) -> Self {
        self.decimal_place = Some(places);
        self
    }

    pub fn range(mut self, range: Vec<String>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn api_name(mut self, api_name: impl Into<String>) -> Self {
        self.api_name = Some(api_name.into());
        self
    }

    /// The wire representation, ready for [`crate::Client::create_column`].
    pub fn to_value(&self) -> Value {
        // ColumnDef serializes to plain strings and numbers only.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let def = ColumnDef::new("year", ColumnType::Integer).description("model year");
        assert_eq!(
            def.to_value(),
            json!({"name": "year", "type": "integer", "description": "model year"})
        );
    }

    #[test]
    fn kebab_case_types_round_trip() {
        let def = ColumnDef::new("visits", ColumnType::IntegerTimeSeries);
        assert_eq!(def.to_value()["type"], json!("integer-time-series"));
    }

    #[test]
    fn string_column_with_cardinality() {
        let def = ColumnDef::new("model", ColumnType::String)
            .cardinality(Cardinality::High)
            .api_name("model");
        let v = def.to_value();
        assert_eq!(v["cardinality"], json!("high"));
        assert_eq!(v["api-name"], json!("model"));
    }

    #[test]
    fn decimal_place_uses_wire_key() {
        let def = ColumnDef::new("price", ColumnType::Decimal).decimal_place(2);
        assert_eq!(def.to_value()["decimal-place"], json!(2));
    }

    #[test]
    fn decimal_variants() {
        assert!(ColumnType::Decimal.is_decimal());
        assert!(ColumnType::DecimalTimeSeries.is_decimal());
        assert!(!ColumnType::Integer.is_decimal());
    }
}
