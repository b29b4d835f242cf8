//! Static keyword and known-entity rule data for entity classification.
//!
//! The [`Lexicon`] is pure data: two keyword sets (university and company
//! indicators) and a small table of known entities with fixed subtypes.
//! It is immutable after construction and shared across calls, so a single
//! instance can serve any number of concurrent classifications.
//!
//! All membership tests are case-insensitive substring containment: a
//! keyword `k` matches text `t` iff `k` occurs anywhere in the lowercased
//! `t`. This is deliberately permissive ("collegetown" matches "college")
//! and callers rely on it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::annotation::OrgSubtype;
use crate::error::Result;

/// Immutable rule data for entity classification.
///
/// # Examples
///
/// ```
/// use taxon::annotation::OrgSubtype;
/// use taxon::lexicon::Lexicon;
///
/// let lexicon = Lexicon::default();
/// assert!(lexicon.has_university_keyword("Boston College"));
/// assert_eq!(
///     lexicon.known_subtype("Apple Records"),
///     Some(OrgSubtype::Company)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// Keywords indicating a university
    university_keywords: AHashSet<String>,
    /// Keywords indicating a company
    company_keywords: AHashSet<String>,
    /// Known entities with fixed subtypes, scanned in insertion order
    known_entities: Vec<(String, OrgSubtype)>,
}

impl Lexicon {
    /// Create an empty lexicon with no keywords or known entities.
    pub fn empty() -> Self {
        Lexicon {
            university_keywords: AHashSet::new(),
            company_keywords: AHashSet::new(),
            known_entities: Vec::new(),
        }
    }

    /// Create a builder for constructing lexicons.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Build a lexicon from its plain-data configuration form.
    pub fn from_config(config: LexiconConfig) -> Self {
        let mut builder = Lexicon::builder();

        for keyword in config.university_keywords {
            builder = builder.add_university_keyword(keyword);
        }
        for keyword in config.company_keywords {
            builder = builder.add_company_keyword(keyword);
        }
        for entry in config.known_entities {
            builder = builder.add_known_entity(entry.name, entry.subtype);
        }

        builder.build()
    }

    /// Load a lexicon from a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: LexiconConfig = serde_json::from_reader(reader)?;

        Ok(Lexicon::from_config(config))
    }

    /// Check whether the text contains a university keyword.
    pub fn has_university_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.university_keywords.iter().any(|k| lower.contains(k))
    }

    /// Check whether the text contains a company keyword.
    pub fn has_company_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.company_keywords.iter().any(|k| lower.contains(k))
    }

    /// Check whether the text contains any organization keyword.
    pub fn has_org_keyword(&self, text: &str) -> bool {
        self.has_university_keyword(text) || self.has_company_keyword(text)
    }

    /// Look up the subtype of the first known entity whose key occurs in
    /// the text. Keys are scanned in insertion order, so the result is
    /// deterministic when several keys match.
    pub fn known_subtype(&self, text: &str) -> Option<OrgSubtype> {
        let lower = text.to_lowercase();
        self.known_entities
            .iter()
            .find(|(key, _)| lower.contains(key))
            .map(|(_, subtype)| *subtype)
    }

    /// Check whether the text contains a known-entity key.
    pub fn is_known_entity(&self, text: &str) -> bool {
        self.known_subtype(text).is_some()
    }

    /// Get the number of university keywords.
    pub fn university_keyword_count(&self) -> usize {
        self.university_keywords.len()
    }

    /// Get the number of company keywords.
    pub fn company_keyword_count(&self) -> usize {
        self.company_keywords.len()
    }

    /// Get the number of known entities.
    pub fn known_entity_count(&self) -> usize {
        self.known_entities.len()
    }
}

impl Default for Lexicon {
    /// The built-in rule data.
    fn default() -> Self {
        let mut builder = Lexicon::builder();

        for keyword in [
            "university",
            "college",
            "institute",
            "school",
            "academy",
            "polytechnic",
            "conservatory",
        ] {
            builder = builder.add_university_keyword(keyword);
        }

        for keyword in [
            "inc",
            "corp",
            "ltd",
            "limited",
            "llc",
            "company",
            "technologies",
            "systems",
            "group",
            "industries",
        ] {
            builder = builder.add_company_keyword(keyword);
        }

        for (name, subtype) in [
            ("mit", OrgSubtype::University),
            ("harvard", OrgSubtype::University),
            ("oxford", OrgSubtype::University),
            ("cambridge", OrgSubtype::University),
            ("apple", OrgSubtype::Company),
            ("google", OrgSubtype::Company),
            ("microsoft", OrgSubtype::Company),
            ("amazon", OrgSubtype::Company),
        ] {
            builder = builder.add_known_entity(name, subtype);
        }

        builder.build()
    }
}

/// A builder for constructing lexicons in a fluent manner.
///
/// Keywords and known-entity keys are lowercase-normalized at insert so
/// membership tests only ever lowercase the probe text.
#[derive(Debug)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Create a new builder starting from an empty lexicon.
    pub fn new() -> Self {
        LexiconBuilder {
            lexicon: Lexicon::empty(),
        }
    }

    /// Add a university keyword.
    pub fn add_university_keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        let normalized = keyword.into().to_lowercase();
        if !normalized.is_empty() {
            self.lexicon.university_keywords.insert(normalized);
        }
        self
    }

    /// Add a company keyword.
    pub fn add_company_keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        let normalized = keyword.into().to_lowercase();
        if !normalized.is_empty() {
            self.lexicon.company_keywords.insert(normalized);
        }
        self
    }

    /// Add a known entity with its fixed subtype.
    ///
    /// Re-adding an existing key updates its subtype in place, keeping the
    /// original scan position.
    pub fn add_known_entity<S: Into<String>>(mut self, name: S, subtype: OrgSubtype) -> Self {
        let normalized = name.into().to_lowercase();
        if normalized.is_empty() {
            return self;
        }

        match self
            .lexicon
            .known_entities
            .iter_mut()
            .find(|(key, _)| *key == normalized)
        {
            Some(entry) => entry.1 = subtype,
            None => self.lexicon.known_entities.push((normalized, subtype)),
        }

        self
    }

    /// Build the lexicon.
    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-data configuration form of a [`Lexicon`].
///
/// Known entities are a list rather than a map so their scan order survives
/// the round trip through JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Keywords indicating a university
    #[serde(default)]
    pub university_keywords: Vec<String>,
    /// Keywords indicating a company
    #[serde(default)]
    pub company_keywords: Vec<String>,
    /// Known entities with fixed subtypes
    #[serde(default)]
    pub known_entities: Vec<KnownEntity>,
}

/// One known-entity entry in a [`LexiconConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KnownEntity {
    /// The entity key, matched as a case-insensitive substring
    pub name: String,
    /// The fixed subtype for this entity
    pub subtype: OrgSubtype,
}
