//! Output formatting for CLI commands.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::{EntityClass, EntityLabel, EntitySpan, OrgSubtype};
use crate::cli::args::{OutputFormat, TaxonArgs};
use crate::error::Result;

/// Result structure for end-to-end classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub input: String,
    pub class: EntityClass,
    pub entities: Vec<EntitySpan>,
    pub org_subtypes: HashMap<String, OrgSubtype>,
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input)?;
        write!(f, "Class: {}", self.class)?;

        for entity in &self.entities {
            write!(
                f,
                "\nEntity: {}..{} {}",
                entity.start, entity.end, entity.label
            )?;
        }
        for (text, subtype) in &self.org_subtypes {
            write!(f, "\nSubtype: {text} -> {subtype}")?;
        }

        Ok(())
    }
}

/// Result structure for entity type guessing.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuessResult {
    pub input: String,
    pub label: EntityLabel,
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input: {}\nLabel: {}", self.input, self.label)
    }
}

/// Result structure for organization subclassification.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubtypeResult {
    pub input: String,
    pub subtype: OrgSubtype,
}

impl fmt::Display for SubtypeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input: {}\nSubtype: {}", self.input, self.subtype)
    }
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconStats {
    pub university_keywords: usize,
    pub company_keywords: usize,
    pub known_entities: usize,
}

impl fmt::Display for LexiconStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "University keywords: {}\nCompany keywords: {}\nKnown entities: {}",
            self.university_keywords, self.company_keywords, self.known_entities
        )
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + fmt::Display>(
    message: &str,
    result: &T,
    args: &TaxonArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &TaxonArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    println!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TaxonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_result_display() {
        let result = ClassificationResult {
            input: "Harvard University".to_string(),
            class: EntityClass::University,
            entities: vec![EntitySpan {
                start: 0,
                end: 18,
                label: EntityLabel::Org,
            }],
            org_subtypes: HashMap::from([(
                "Harvard University".to_string(),
                OrgSubtype::University,
            )]),
        };

        let rendered = result.to_string();
        assert!(rendered.contains("Class: UNIVERSITY"));
        assert!(rendered.contains("Entity: 0..18 ORG"));
        assert!(rendered.contains("Subtype: Harvard University -> UNIVERSITY"));
    }

    #[test]
    fn test_guess_result_serializes_wire_labels() {
        let result = GuessResult {
            input: "Marie Curie".to_string(),
            label: EntityLabel::Person,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"label\":\"PERSON\""));
    }

    #[test]
    fn test_lexicon_stats_display() {
        let stats = LexiconStats {
            university_keywords: 7,
            company_keywords: 10,
            known_entities: 8,
        };

        let rendered = stats.to_string();
        assert!(rendered.contains("University keywords: 7"));
        assert!(rendered.contains("Known entities: 8"));
    }
}
