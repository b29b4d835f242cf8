//! Rule-based entity type decision logic.
//!
//! This module provides the two decision components of the classifier:
//!
//! - `EntityTyper` trait: common interface for typing strategies
//! - `KeywordEntityTyper`: keyword and token-shape typing implementation
//! - `OrgSubclassifier`: UNIVERSITY vs COMPANY resolution for organizations
//!
//! An upstream recognizer and the keyword typer are interchangeable behind
//! the `EntityTyper` contract, so either can be substituted or A/B tested.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use taxon::annotation::EntityLabel;
//! use taxon::classify::{EntityTyper, KeywordEntityTyper};
//! use taxon::lexicon::Lexicon;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let typer = KeywordEntityTyper::new(Arc::new(Lexicon::default()));
//! let label = typer.predict("Marie Curie")?;
//! assert_eq!(label, EntityLabel::Person);
//! # Ok(())
//! # }
//! ```

mod keyword_typer;
mod org_subclassifier;
mod typer;

// Public exports
pub use keyword_typer::KeywordEntityTyper;
pub use org_subclassifier::OrgSubclassifier;
pub use typer::EntityTyper;
