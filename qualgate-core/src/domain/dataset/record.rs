// qualgate-core/src/domain/dataset/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// One input row. Fields keep the column order of the source header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Builds a record by zipping a header with one row of values.
    /// Missing trailing values are absent from the record, extra values are dropped.
    pub fn from_row<H, V>(header: &[H], values: impl IntoIterator<Item = V>) -> Self
    where
        H: AsRef<str>,
        V: Into<String>,
    {
        let fields = header
            .iter()
            .zip(values)
            .map(|(h, v)| (h.as_ref().to_string(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .fields
            .iter()
            .map(|(name, value)| format!("{}={:?}", name, value))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// A loaded tabular source: the header plus its rows in source order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::from_row(&["customer_id", "name", "age"], ["7", "Ada", "36"])
    }

    #[test]
    fn test_get_returns_field_value() {
        let record = sample();
        assert_eq!(record.get("name"), Some("Ada"));
        assert_eq!(record.get("email"), None);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_from_row_short_row_leaves_field_absent() {
        let record = Record::from_row(&["customer_id", "name", "age"], ["7", "Ada"]);
        assert_eq!(record.get("age"), None);
    }

    #[test]
    fn test_display_keeps_header_order() {
        assert_eq!(
            sample().to_string(),
            r#"{customer_id="7", name="Ada", age="36"}"#
        );
    }

    #[test]
    fn test_serialize_as_ordered_map() -> anyhow::Result<()> {
        let json = serde_json::to_string(&sample())?;
        assert_eq!(json, r#"{"customer_id":"7","name":"Ada","age":"36"}"#);
        Ok(())
    }
}
