//! Variable records as they appear in remote variable documents.
//!
//! A variable document is a JSON array of `{ "key": ..., "value": ... }`
//! objects. Extra fields found in exported environment files (`enabled`,
//! `type`, ...) are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// A single key/value entry from a variable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Variable name.
    pub key: String,
    /// Variable value.
    ///
    /// Numbers and booleans are accepted and kept as their JSON text.
    #[serde(deserialize_with = "scalar_as_string")]
    pub value: String,
}

impl VariableRecord {
    /// Create a new record.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Decode a whole variable document.
///
/// The document is decoded completely before anything is returned, so a
/// single bad entry rejects the whole document.
pub fn parse_document(json: &str) -> Result<Vec<VariableRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, number or boolean value, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_in_order() {
        let records =
            parse_document(r#"[{"key":"a","value":"1"},{"key":"b","value":"2"}]"#).unwrap();
        assert_eq!(
            records,
            vec![VariableRecord::new("a", "1"), VariableRecord::new("b", "2")]
        );
    }

    #[test]
    fn test_parse_document_ignores_extra_fields() {
        let records =
            parse_document(r#"[{"key":"host","value":"api.local","enabled":true,"type":"default"}]"#)
                .unwrap();
        assert_eq!(records, vec![VariableRecord::new("host", "api.local")]);
    }

    #[test]
    fn test_scalar_values_become_text() {
        let records =
            parse_document(r#"[{"key":"port","value":8080},{"key":"tls","value":false}]"#).unwrap();
        assert_eq!(records[0].value, "8080");
        assert_eq!(records[1].value, "false");
    }

    #[test]
    fn test_rejects_non_array_document() {
        assert!(parse_document(r#"{"key":"a","value":"1"}"#).is_err());
        assert!(parse_document("not json").is_err());
    }

    #[test]
    fn test_rejects_structured_value() {
        assert!(parse_document(r#"[{"key":"a","value":{"nested":1}}]"#).is_err());
        assert!(parse_document(r#"[{"key":"a","value":null}]"#).is_err());
    }

    #[test]
    fn test_rejects_missing_key() {
        assert!(parse_document(r#"[{"value":"1"}]"#).is_err());
    }
}
