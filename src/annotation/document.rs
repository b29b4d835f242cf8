//! Request-scoped document structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::annotation::label::OrgSubtype;
use crate::annotation::span::EntitySpan;

/// A document holds one classification request's text and its annotations.
///
/// The entity span list is replaced wholesale by the filter stage, and the
/// subtype map records one entry per distinct organization text. The map is
/// keyed by entity text rather than span identity, so two identical entity
/// strings share one entry.
///
/// Documents are created per request and discarded after the response is
/// produced; nothing here persists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    /// The source text for this request
    text: String,
    /// Ordered entity spans over the text
    entities: Vec<EntitySpan>,
    /// Organization subtype results, keyed by entity text
    org_subtypes: HashMap<String, OrgSubtype>,
}

impl Document {
    /// Create a new document with no entity spans.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            text: text.into(),
            entities: Vec::new(),
            org_subtypes: HashMap::new(),
        }
    }

    /// Get the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the entity spans.
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Replace the entity span list.
    pub fn set_entities(&mut self, entities: Vec<EntitySpan>) {
        self.entities = entities;
    }

    /// Get the organization subtype map.
    pub fn org_subtypes(&self) -> &HashMap<String, OrgSubtype> {
        &self.org_subtypes
    }

    /// Record a subtype for an entity text. Later writes overwrite earlier
    /// entries for the same text.
    pub fn set_org_subtype<S: Into<String>>(&mut self, entity_text: S, subtype: OrgSubtype) {
        self.org_subtypes.insert(entity_text.into(), subtype);
    }

    /// Look up the recorded subtype for an entity text.
    pub fn org_subtype(&self, entity_text: &str) -> Option<OrgSubtype> {
        self.org_subtypes.get(entity_text).copied()
    }

    /// Check if the document text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    text: String,
    entities: Vec<EntitySpan>,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder::default()
    }

    /// Set the source text.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Add an upstream entity span.
    pub fn add_entity(mut self, entity: EntitySpan) -> Self {
        self.entities.push(entity);
        self
    }

    /// Set the full entity span list.
    pub fn entities(mut self, entities: Vec<EntitySpan>) -> Self {
        self.entities = entities;
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        Document {
            text: self.text,
            entities: self.entities,
            org_subtypes: HashMap::new(),
        }
    }
}
