//! Flat person records, the input side of the transform.
//!
//! A record references its parents by id rather than by nesting:
//!
//! ```text
//! [
//!   { "id": 1, "paiId": null, "maeId": null, "name": "Ana" },
//!   { "id": 2, "paiId": 1,    "maeId": null, "name": "Bruno" }
//! ]
//! ```
//!
//! Only `id`, `paiId` and `maeId` carry meaning for the builder. Every
//! other field (`name`, `birthDate`, photos, whatever the data file
//! contains) is opaque payload, captured in [`PersonRecord::details`] and
//! passed through to the output tree unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Identifier of a person record, unique within one input collection.
///
/// Id `0` is reserved for the synthetic root and must not appear in real
/// data (see [`crate::tree::VIRTUAL_ROOT_ID`]).
pub type PersonId = u64;

/// One entry of the flat input collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Unique identifier.
    pub id: PersonId,
    /// Father reference, if known. Used for attachment in the tree.
    #[serde(default)]
    pub pai_id: Option<PersonId>,
    /// Mother reference, if known. Only consulted to decide root candidacy.
    #[serde(default)]
    pub mae_id: Option<PersonId>,
    /// All remaining fields of the record, preserved in input order.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl PersonRecord {
    /// Create a record with no parent references and no details.
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            pai_id: None,
            mae_id: None,
            details: Map::new(),
        }
    }

    /// Set the father reference.
    pub fn with_pai(mut self, pai_id: PersonId) -> Self {
        self.pai_id = Some(pai_id);
        self
    }

    /// Set the mother reference.
    pub fn with_mae(mut self, mae_id: PersonId) -> Self {
        self.mae_id = Some(mae_id);
        self
    }

    /// Attach an opaque detail field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// A record with neither parent reference set is eligible to become
    /// (or contribute to) the tree's root.
    pub fn is_root_candidate(&self) -> bool {
        self.pai_id.is_none() && self.mae_id.is_none()
    }

    /// Display name, if the record carries a string `name` detail.
    pub fn name(&self) -> Option<&str> {
        self.details.get("name").and_then(Value::as_str)
    }
}

/// Parse a flat JSON array of person records.
///
/// This is the only fallible surface of the crate: malformed JSON or a
/// non-array document maps to [`crate::Error::Parse`]. Unknown fields are
/// kept as opaque details, never rejected.
pub fn records_from_json(json: &str) -> Result<Vec<PersonRecord>> {
    let records = serde_json::from_str(json)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let records = records_from_json(r#"[{"id": 1}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].pai_id, None);
        assert_eq!(records[0].mae_id, None);
        assert!(records[0].is_root_candidate());
    }

    #[test]
    fn test_parse_camel_case_parent_keys() {
        let records = records_from_json(
            r#"[{"id": 2, "paiId": 1, "maeId": null, "name": "Bruno", "birthDate": "1980-03-01"}]"#,
        )
        .unwrap();
        let rec = &records[0];
        assert_eq!(rec.pai_id, Some(1));
        assert_eq!(rec.mae_id, None);
        assert_eq!(rec.name(), Some("Bruno"));
        assert_eq!(
            rec.details.get("birthDate").and_then(Value::as_str),
            Some("1980-03-01")
        );
        assert!(!rec.is_root_candidate());
    }

    #[test]
    fn test_unknown_fields_are_opaque_payload() {
        let records =
            records_from_json(r#"[{"id": 3, "photo": "3.png", "notes": {"a": 1}}]"#).unwrap();
        assert_eq!(records[0].details.len(), 2);
        assert!(records[0].details.contains_key("notes"));
    }

    #[test]
    fn test_details_keep_input_order() {
        let records =
            records_from_json(r#"[{"id": 1, "zeta": 1, "alpha": 2, "mid": 3}]"#).unwrap();
        let keys: Vec<_> = records[0].details.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = records_from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(records_from_json(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_builder_style_construction() {
        let rec = PersonRecord::new(7)
            .with_pai(1)
            .with_mae(2)
            .with_detail("name", "Carla");
        assert_eq!(rec.pai_id, Some(1));
        assert_eq!(rec.mae_id, Some(2));
        assert_eq!(rec.name(), Some("Carla"));
    }
}
