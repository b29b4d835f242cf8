//! Keyword-based entity typer.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::annotation::EntityLabel;
use crate::error::Result;
use crate::lexicon::Lexicon;

use super::typer::EntityTyper;

lazy_static! {
    // A token that reads as part of a personal name: alphabetic characters,
    // apostrophes, and hyphens only.
    static ref PERSON_TOKEN: Regex =
        Regex::new(r"^[\p{Alphabetic}'\-]+$").expect("person token pattern should be valid");
}

/// Keyword-based entity typer.
///
/// Applies rules in order, first match wins:
///
/// 1. text containing a known-entity key is an organization,
/// 2. text containing a university or company keyword is an organization,
/// 3. one to three name-shaped tokens read as a person,
/// 4. anything else defaults to an organization.
///
/// Total for any non-empty string; the caller guards emptiness.
#[derive(Clone, Debug)]
pub struct KeywordEntityTyper {
    lexicon: Arc<Lexicon>,
}

impl KeywordEntityTyper {
    /// Create a new keyword-based entity typer.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Get the lexicon used by this typer.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }
}

impl EntityTyper for KeywordEntityTyper {
    fn predict(&self, text: &str) -> Result<EntityLabel> {
        // All known entities are organizations
        if self.lexicon.is_known_entity(text) {
            return Ok(EntityLabel::Org);
        }

        if self.lexicon.has_org_keyword(text) {
            return Ok(EntityLabel::Org);
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        if (1..=3).contains(&words.len()) && words.iter().all(|w| PERSON_TOKEN.is_match(w)) {
            return Ok(EntityLabel::Person);
        }

        Ok(EntityLabel::Org)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
