use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untyped record exactly as one source returned it.
///
/// Field names vary by source and across records of the same source, so
/// nothing here is interpreted. The normalizer probes alias tables against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RawRecord(pub Map<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_only_objects() {
        assert!(RawRecord::from_value(json!({"room": "101"})).is_some());
        assert!(RawRecord::from_value(json!(["101"])).is_none());
        assert!(RawRecord::from_value(json!("101")).is_none());
    }

    #[test]
    fn serializes_transparently() {
        let record = RawRecord::new().with("room_number", "205").with("floor", 2);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"room_number": "205", "floor": 2}));

        let back: RawRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
