use crate::utils::error::ResolverError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An 8-digit postal code key. Only produced by validating caller input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPostalCode(String);

impl NormalizedPostalCode {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw object returned by an address directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryPayload {
    fields: Map<String, Value>,
}

impl DirectoryPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// True when the directory flagged the code as unknown (`"erro": true`).
    ///
    /// Some directory versions send the flag as the string `"true"`.
    pub fn is_not_found(&self) -> bool {
        match self.fields.get("erro") {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

impl TryFrom<Value> for DirectoryPayload {
    type Error = ResolverError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(ResolverError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolved address in the service's own vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub cep: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siafi: Option<String>,
}

/// Target slot of an [`AddressRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Cep,
    Address,
    Neighborhood,
    City,
    State,
    Ibge,
    Gia,
    Ddd,
    Siafi,
}

impl AddressRecord {
    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Cep => self.cep = value,
            AddressField::Address => self.address = Some(value),
            AddressField::Neighborhood => self.neighborhood = Some(value),
            AddressField::City => self.city = Some(value),
            AddressField::State => self.state = Some(value),
            AddressField::Ibge => self.ibge = Some(value),
            AddressField::Gia => self.gia = Some(value),
            AddressField::Ddd => self.ddd = Some(value),
            AddressField::Siafi => self.siafi = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> DirectoryPayload {
        DirectoryPayload::try_from(value).unwrap()
    }

    #[test]
    fn test_not_found_marker_variants() {
        assert!(payload(json!({"erro": true})).is_not_found());
        assert!(payload(json!({"erro": "true"})).is_not_found());
        assert!(!payload(json!({"erro": false})).is_not_found());
        assert!(!payload(json!({"cep": "01310-100"})).is_not_found());
    }

    #[test]
    fn test_payload_must_be_object() {
        assert!(matches!(
            DirectoryPayload::try_from(json!([1, 2])),
            Err(ResolverError::Decode(_))
        ));
        assert!(matches!(
            DirectoryPayload::try_from(json!("erro")),
            Err(ResolverError::Decode(_))
        ));
    }

    #[test]
    fn test_address_record_omits_absent_fields() {
        let mut record = AddressRecord::default();
        record.set(AddressField::Cep, "01310-100".to_string());
        record.set(AddressField::State, "SP".to_string());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"cep": "01310-100", "state": "SP"}));
    }
}
