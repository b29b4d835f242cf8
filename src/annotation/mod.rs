//! Entity annotation data model.
//!
//! This module defines the request-scoped data that flows through the
//! classification pipeline:
//!
//! - [`EntityLabel`] / [`OrgSubtype`] / [`EntityClass`] - label types
//! - [`EntitySpan`] - a labeled region of the source text
//! - [`Document`] - source text plus its entity spans and subtype map

pub mod document;
pub mod label;
pub mod span;

pub use document::{Document, DocumentBuilder};
pub use label::{EntityClass, EntityLabel, OrgSubtype};
pub use span::EntitySpan;
