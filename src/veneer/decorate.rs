//! # The Decorate Operation
//!
//! [`Decorator`] is the one operation this crate exists for: attach a
//! [`MetadataBundle`] and/or prepend a type label to a caller-owned
//! [`Record`], in place.
//!
//! ## Contract
//!
//! A decorator is built once with chained setters and applied to any number
//! of records. Per [`Decorator::apply`] call:
//!
//! 1. A configured type label is prepended to the record's tag chain.
//!    This happens for open and fixed records alike.
//! 2. If at least one field set is configured, a bundle holding exactly the
//!    configured set(s) is attached, **overwriting** any existing bundle in
//!    full. With neither set configured, bundle attachment is skipped
//!    entirely and an existing bundle stays untouched.
//!
//! Label attachment and bundle attachment enable independently: a
//! label-only decorator re-tags records without disturbing their bundles,
//! and a fields-only decorator never touches the tag chain.
//!
//! ## Pass-through
//!
//! The record is always mutated through the caller's own `&mut` handle.
//! `pass_through` only selects whether `apply` hands that same handle back
//! (`Some`) or returns nothing observable (`None`); there is no copy in
//! either mode.
//!
//! ## Sequences
//!
//! [`Decorator::apply_all`] runs over borrowed records strictly in order,
//! stopping at the first failure; records before the failure stay mutated.
//! For owned streaming input, see [`crate::stream::DecorateExt`].

use crate::bundle::MetadataBundle;
use crate::error::Result;
use crate::model::Record;

/// Configuration for the decorate operation. Cheap to clone, reusable
/// across records.
#[derive(Debug, Clone, Default)]
pub struct Decorator {
    display_fields: Option<Vec<String>>,
    sort_fields: Option<Vec<String>>,
    type_label: Option<String>,
    pass_through: bool,
}

impl Decorator {
    /// A decorator that does nothing. Configure it with the chained setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields a default summary view should show, in priority order.
    pub fn display_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Fields a default comparator orders by, primary key first.
    pub fn sort_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Logical type name to prepend to the record's tag chain.
    pub fn type_label(mut self, label: impl Into<String>) -> Self {
        self.type_label = Some(label.into());
        self
    }

    /// Whether [`apply`](Self::apply) returns the mutated record's handle.
    pub fn pass_through(mut self, pass_through: bool) -> Self {
        self.pass_through = pass_through;
        self
    }

    /// Decorate one record in place.
    ///
    /// Returns `Some` of the identical handle iff pass-through is set. On
    /// failure the label (step 1) may already be attached; the bundle never
    /// is.
    pub fn apply<'a>(&self, record: &'a mut Record) -> Result<Option<&'a mut Record>> {
        if let Some(label) = &self.type_label {
            record.prepend_type_tag(label.clone());
        }

        if self.display_fields.is_some() || self.sort_fields.is_some() {
            let bundle = MetadataBundle {
                display_fields: self.display_fields.clone(),
                sort_fields: self.sort_fields.clone(),
            };
            record.attach_bundle(&bundle)?;
        }

        if self.pass_through {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Decorate a sequence of borrowed records, one at a time, in arrival
    /// order. The first failure aborts: earlier records stay mutated, later
    /// records are never reached, and the error surfaces at the record that
    /// raised it.
    pub fn apply_all<'a, I>(&self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a mut Record>,
    {
        for record in records {
            self.apply(record)?;
        }
        Ok(())
    }
}
