//! # Record Model
//!
//! A [`Record`] is an open key→value mapping plus a runtime-only chain of
//! type tags. Storage is a [`serde_json::Value`]:
//!
//! - object storage → the record is **open**: arbitrary extension fields can
//!   be set, and a [`MetadataBundle`] can be attached under [`BUNDLE_KEY`].
//! - any other storage (string, number, boolean, array, null) → the record
//!   is **fixed**: it carries data but has no slot to extend, and bundle
//!   attachment fails with [`DecorateError::FixedType`].
//!
//! The open/fixed decision is an explicit capability check
//! ([`Record::supports_extension_fields`]) on the storage shape, never
//! pattern-matching on an underlying error.
//!
//! Type tags live **next to** the storage, not inside it: tagging a record
//! never changes its stored fields, and serializing a record writes the
//! storage value alone. Tags are process-local presentation hints, in the
//! same spirit as the bundle.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::bundle::{MetadataBundle, BUNDLE_KEY};
use crate::env;
use crate::error::{DecorateError, Result};

/// An open, dynamically-extensible record with a type-tag chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    value: Value,
    type_tags: Vec<String>,
}

impl Record {
    /// An empty open record.
    pub fn new() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// Wrap an arbitrary storage value. Object values yield open records,
    /// everything else yields fixed ones.
    pub fn from_value(value: Value) -> Self {
        Self {
            value,
            type_tags: Vec::new(),
        }
    }

    /// Build an open record from `(field, value)` pairs, preserving the
    /// order they arrive in (subject to the build's map ordering, see the
    /// `preserve-order` feature).
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let map: Map<String, Value> = fields
            .into_iter()
            .map(|(field, value)| (field.into(), value))
            .collect();
        Self::from_value(Value::Object(map))
    }

    /// The underlying storage value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the underlying storage value, discarding type tags.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Whether this record can host arbitrary extension fields (and thus a
    /// metadata bundle).
    pub fn supports_extension_fields(&self) -> bool {
        self.value.is_object()
    }

    /// Name of the storage shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match &self.value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(field))
    }

    /// Set an extension field. Fails on fixed records.
    ///
    /// [`BUNDLE_KEY`] is an ordinary key at this level; setting it by hand
    /// is allowed but clobbers any attached bundle.
    pub fn set(&mut self, field: impl Into<String>, value: Value) -> Result<()> {
        match self.value.as_object_mut() {
            Some(map) => {
                map.insert(field.into(), value);
                Ok(())
            }
            None => Err(DecorateError::FixedType { shape: self.shape() }),
        }
    }

    /// The record's field names, skipping the reserved bundle key.
    /// Empty for fixed records.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.value
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys())
            .map(String::as_str)
            .filter(|field| *field != BUNDLE_KEY)
    }

    /// The type-tag chain, most-specific tag first.
    pub fn type_tags(&self) -> &[String] {
        &self.type_tags
    }

    /// Push a tag onto the front of the chain. Repeated calls keep stacking:
    /// the most recently applied tag is the most specific.
    pub fn prepend_type_tag(&mut self, tag: impl Into<String>) {
        self.type_tags.insert(0, tag.into());
    }

    /// Read back the attached bundle, if any. A slot holding something that
    /// does not decode as a bundle reads as absent.
    pub fn bundle(&self) -> Option<MetadataBundle> {
        let slot = self.value.as_object()?.get(BUNDLE_KEY)?;
        serde_json::from_value(slot.clone()).ok()
    }

    /// Attach `bundle` under [`BUNDLE_KEY`], replacing any previous bundle
    /// in full. Fails on fixed records; any encoding failure propagates
    /// verbatim.
    pub fn attach_bundle(&mut self, bundle: &MetadataBundle) -> Result<()> {
        let shape = self.shape();
        let map = self
            .value
            .as_object_mut()
            .ok_or(DecorateError::FixedType { shape })?;
        let encoded = serde_json::to_value(bundle)?;
        env::warn_if_order_unstable();
        map.insert(BUNDLE_KEY.to_string(), encoded);
        Ok(())
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_value(Value::Object(map))
    }
}

// A record serializes as its storage value alone; type tags are runtime-only
// and do not survive a round trip.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Record::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_record_sets_and_gets_fields() {
        let mut record = Record::new();
        record.set("name", json!("disk0")).unwrap();
        record.set("size", json!(512)).unwrap();

        assert!(record.supports_extension_fields());
        assert_eq!(record.get("name"), Some(&json!("disk0")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn fixed_record_rejects_set_with_shape_name() {
        let mut record = Record::from_value(json!("just a string"));

        let err = record.set("name", json!(1)).unwrap_err();
        assert!(matches!(
            err,
            DecorateError::FixedType { shape: "string" }
        ));
    }

    #[test]
    fn fields_skip_the_bundle_slot() {
        let mut record = Record::from_fields([("b", json!(1)), ("a", json!(2))]);
        record
            .attach_bundle(&MetadataBundle {
                display_fields: Some(vec!["a".into()]),
                sort_fields: None,
            })
            .unwrap();

        let mut fields: Vec<&str> = record.fields().collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn fields_are_empty_for_fixed_records() {
        let record = Record::from_value(json!([1, 2, 3]));
        assert_eq!(record.fields().count(), 0);
        assert_eq!(record.shape(), "array");
    }

    #[test]
    fn attach_replaces_previous_bundle_in_full() {
        let mut record = Record::new();
        record
            .attach_bundle(&MetadataBundle {
                display_fields: Some(vec!["old".into()]),
                sort_fields: Some(vec!["old".into()]),
            })
            .unwrap();
        record
            .attach_bundle(&MetadataBundle {
                display_fields: Some(vec!["new".into()]),
                sort_fields: None,
            })
            .unwrap();

        let bundle = record.bundle().unwrap();
        assert_eq!(bundle.display_fields, Some(vec!["new".to_string()]));
        assert_eq!(bundle.sort_fields, None);
    }

    #[test]
    fn undecodable_slot_reads_as_absent() {
        let mut record = Record::new();
        record.set(BUNDLE_KEY, json!(42)).unwrap();
        assert!(record.bundle().is_none());
    }

    #[test]
    fn serde_round_trip_keeps_storage_and_drops_tags() {
        let mut record = Record::from_fields([("name", json!("disk0"))]);
        record.prepend_type_tag("Veneer.Disk");
        record
            .attach_bundle(&MetadataBundle {
                display_fields: Some(vec!["name".into()]),
                sort_fields: None,
            })
            .unwrap();

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&encoded).unwrap();

        assert!(decoded.type_tags().is_empty());
        assert_eq!(decoded.get("name"), Some(&json!("disk0")));
        assert_eq!(decoded.bundle(), record.bundle());
    }

    #[test]
    fn tag_chain_stacks_at_the_front() {
        let mut record = Record::new();
        record.prepend_type_tag("A");
        record.prepend_type_tag("B");
        assert_eq!(record.type_tags(), ["B", "A"]);
    }
}
