//! Label types for entity annotation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label attached to an entity span.
///
/// `Person` and `Org` are the two labels this crate classifies. Upstream
/// recognizers can emit labels outside that set (locations, dates, and so
/// on); those are carried as `Other` until the filter stage discards them.
///
/// Labels serialize as their wire strings (`"PERSON"`, `"ORG"`, or the raw
/// upstream string for `Other`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// A person name
    Person,
    /// An organization
    Org,
    /// Any other upstream label, kept verbatim
    Other(String),
}

impl EntityLabel {
    /// Whether this label survives the entity filter.
    pub fn is_person_or_org(&self) -> bool {
        matches!(self, EntityLabel::Person | EntityLabel::Org)
    }

    /// The wire form of this label.
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Other(label) => label,
        }
    }
}

impl From<&str> for EntityLabel {
    fn from(value: &str) -> Self {
        match value {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityLabel {
    fn from(value: String) -> Self {
        EntityLabel::from(value.as_str())
    }
}

impl From<EntityLabel> for String {
    fn from(value: EntityLabel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Organization subtype resolved by the subclassifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrgSubtype {
    /// Educational institution
    University,
    /// Commercial organization
    Company,
}

impl OrgSubtype {
    /// The wire form of this subtype.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgSubtype::University => "UNIVERSITY",
            OrgSubtype::Company => "COMPANY",
        }
    }
}

impl fmt::Display for OrgSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully resolved classification result for one input text.
///
/// This is what the serving boundary reports: a bare type for persons,
/// a resolved subtype for organizations when one was recorded, bare `Org`
/// when none was, and the `Unknown` sentinel when no entity was identified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityClass {
    /// A person name
    Person,
    /// An organization with no resolved subtype
    Org,
    /// An organization subclassified as a university
    University,
    /// An organization subclassified as a company
    Company,
    /// No entity or type could be determined
    Unknown,
}

impl EntityClass {
    /// The wire form of this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityClass::Person => "PERSON",
            EntityClass::Org => "ORG",
            EntityClass::University => "UNIVERSITY",
            EntityClass::Company => "COMPANY",
            EntityClass::Unknown => "UNKNOWN",
        }
    }
}

impl From<OrgSubtype> for EntityClass {
    fn from(subtype: OrgSubtype) -> Self {
        match subtype {
            OrgSubtype::University => EntityClass::University,
            OrgSubtype::Company => EntityClass::Company,
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
