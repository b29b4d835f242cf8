//! Organization subtype classification.

use std::sync::Arc;

use crate::annotation::OrgSubtype;
use crate::lexicon::Lexicon;

/// Subclassifies organization text as a university or a company.
///
/// Rules apply in order, first match wins:
///
/// 1. text containing a known-entity key gets that key's fixed subtype,
/// 2. text containing a university keyword or the literal `" of "` is a
///    university,
/// 3. anything else defaults to a company.
///
/// Matching is case-insensitive substring containment throughout, so
/// incidental substrings count: "Bank of England" resolves to a university
/// via the `" of "` rule. Callers rely on this permissiveness.
#[derive(Clone, Debug)]
pub struct OrgSubclassifier {
    lexicon: Arc<Lexicon>,
}

impl OrgSubclassifier {
    /// Create a new organization subclassifier.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Get the lexicon used by this subclassifier.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Classify organization text. Total: every string yields a subtype.
    pub fn classify(&self, org_text: &str) -> OrgSubtype {
        if let Some(subtype) = self.lexicon.known_subtype(org_text) {
            return subtype;
        }

        if self.lexicon.has_university_keyword(org_text)
            || org_text.to_lowercase().contains(" of ")
        {
            return OrgSubtype::University;
        }

        OrgSubtype::Company
    }
}
