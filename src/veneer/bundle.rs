use serde::{Deserialize, Serialize};

/// The reserved storage key a [`MetadataBundle`] is attached under.
///
/// Consumers that list a record's fields should skip this key; `Record::fields`
/// already does.
pub const BUNDLE_KEY: &str = "__veneer__";

/// The presentation metadata attached to a record: which fields a default
/// summary view shows, and which fields a default comparator orders by.
///
/// A record carries at most one bundle. Attaching a new bundle replaces the
/// previous one in full; there is no field-level merge. The bundle is pure
/// data: rendering and sorting based on it is the business of whoever reads
/// it back, never of this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBundle {
    /// Fields a default summary view should show, in priority order.
    /// Uniqueness is not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<Vec<String>>,

    /// Default comparison key precedence: first field is the primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_fields: Option<Vec<String>>,
}

impl MetadataBundle {
    /// True when the bundle carries neither field set.
    pub fn is_empty(&self) -> bool {
        self.display_fields.is_none() && self.sort_fields.is_none()
    }
}
