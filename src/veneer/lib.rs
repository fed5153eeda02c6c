//! # Veneer Architecture
//!
//! Veneer attaches **presentation metadata** to dynamic records: which fields
//! a default summary view should show, which fields a default comparator
//! orders by, and an optional logical type label. Downstream consumers (a
//! table printer or a default sorter, for instance) read the attached bundle
//! to learn "how should this record be summarized" instead of hardcoding
//! field lists at every call site.
//!
//! This is a library with exactly one job. It is **not** a rendering engine
//! (it never decides how to draw anything), **not** a schema system (listed
//! fields are not checked against the record), and **not** a reflection
//! framework: it manages one named bundle of presentation metadata per
//! record, full stop.
//!
//! ## The Shape of the Crate
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Decoration (decorate.rs, stream.rs)                        │
//! │  - The Decorator: builder config + in-place application     │
//! │  - Sequence forms: borrowed apply_all, owned Decorated      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, bundle.rs)                                │
//! │  - Record: open field map + runtime type-tag chain          │
//! │  - MetadataBundle under one reserved storage key            │
//! │  - The open/fixed capability check                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Mutate in place, never copy.** The caller owns the record; decoration
//!   goes through their `&mut` handle. Pass-through mode only selects
//!   whether that same handle is returned, it never clones.
//! - **Overwrite, never merge.** Attaching a bundle replaces the previous
//!   one in full. Replaying a decorator leaves exactly its own sets behind.
//! - **Capability check over error sniffing.** Whether a record can host the
//!   bundle is decided up front from its storage shape; a fixed record gets
//!   a [`error::DecorateError::FixedType`] telling the caller to project it
//!   into an open field map first. Failures the crate does not recognize
//!   propagate verbatim.
//! - **Pure data out.** The bundle is inert. Anything that renders or sorts
//!   differently because of it is an external collaborator, tested on its
//!   own; nothing here special-cases consumers.
//!
//! ## Testing Strategy
//!
//! Contract logic is unit-tested next to each module; the `tests/` suite
//! exercises the whole call surface end-to-end, streaming included. There is
//! no I/O anywhere, so every test runs against in-memory records.
//!
//! ## Module Overview
//!
//! - [`decorate`]: Decorator configuration and application
//! - [`stream`]: Pass-through iterator adapter over owned records
//! - [`model`]: The `Record` type and its capability check
//! - [`bundle`]: The `MetadataBundle` and its reserved storage key
//! - [`error`]: Error types
//! - `env`: build-graph field-ordering probe (internal)

pub mod bundle;
pub mod decorate;
mod env;
pub mod error;
pub mod model;
pub mod stream;
