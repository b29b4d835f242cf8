//! Entity filtering and classification pipeline.
//!
//! The pipeline owns the orchestration step of the classifier: it fills in
//! entity spans when the upstream recognizer produced none, filters spans
//! down to persons and organizations, and records organization subtypes in
//! the document's side map. Stages are composable behind [`PipelineStage`]
//! in the same way analysis filters chain in a text-analysis pipeline.
//!
//! The whole module is pure and synchronous: stages hold only immutable
//! shared state (the lexicon behind an `Arc`), so one pipeline instance is
//! safe to use from any number of threads as long as each call operates on
//! its own [`Document`].

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::annotation::{Document, EntityClass, EntityLabel, EntitySpan, OrgSubtype};
use crate::classify::{EntityTyper, KeywordEntityTyper, OrgSubclassifier};
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Trait for stages that transform a document in place.
pub trait PipelineStage: Send + Sync {
    /// Process the document, mutating its spans or subtype map.
    fn process(&self, document: &mut Document) -> Result<()>;

    /// Get the name of this stage for debugging and logging.
    fn name(&self) -> &str;
}

/// The entity filter/classify stage.
///
/// For a document with no upstream spans and non-empty text, the typer is
/// consulted for a whole-text label and a single covering span installed.
/// Otherwise existing spans are filtered down to persons and organizations.
/// Every organization span then gets a subtype entry in the document's side
/// map, keyed by span text, in span order, last write wins.
pub struct EntityFilter {
    typer: Arc<dyn EntityTyper>,
    subclassifier: OrgSubclassifier,
}

impl EntityFilter {
    /// Create a new entity filter from a typer and a subclassifier.
    pub fn new(typer: Arc<dyn EntityTyper>, subclassifier: OrgSubclassifier) -> Self {
        Self {
            typer,
            subclassifier,
        }
    }

    /// Create an entity filter using the keyword typer over the given lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self::new(
            Arc::new(KeywordEntityTyper::new(lexicon.clone())),
            OrgSubclassifier::new(lexicon),
        )
    }
}

impl PipelineStage for EntityFilter {
    fn process(&self, document: &mut Document) -> Result<()> {
        if document.entities().is_empty() && !document.is_empty() {
            // No upstream spans: type the whole text ourselves.
            let label = self.typer.predict(document.text())?;
            let mut entities = Vec::new();

            if label.is_person_or_org() {
                match EntitySpan::over(document.text(), 0, document.text().len(), label) {
                    Some(span) => entities.push(span),
                    None => debug!("whole-text span construction failed, no entity recorded"),
                }
            }

            document.set_entities(entities);
        } else {
            let kept: Vec<EntitySpan> = document
                .entities()
                .iter()
                .filter(|entity| entity.label.is_person_or_org())
                .cloned()
                .collect();

            document.set_entities(kept);
        }

        let subtypes: Vec<(String, OrgSubtype)> = document
            .entities()
            .iter()
            .filter(|entity| entity.label == EntityLabel::Org)
            .map(|entity| {
                let text = entity.text(document.text());
                (text.to_string(), self.subclassifier.classify(text))
            })
            .collect();

        for (text, subtype) in subtypes {
            debug!("org span {text:?} subclassified as {subtype}");
            document.set_org_subtype(text, subtype);
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "entity_filter"
    }
}

impl fmt::Debug for EntityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityFilter")
            .field("typer", &self.typer.name())
            .finish()
    }
}

/// An ordered composition of pipeline stages over a document.
///
/// This is the main entry point for classification. [`standard`] wires the
/// keyword typer and subclassifier over one shared lexicon; custom stages
/// can be appended for substitution or A/B testing.
///
/// [`standard`]: ClassificationPipeline::standard
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use taxon::annotation::EntityClass;
/// use taxon::lexicon::Lexicon;
/// use taxon::pipeline::ClassificationPipeline;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = ClassificationPipeline::standard(Arc::new(Lexicon::default()));
/// let class = pipeline.classify("Harvard University", Vec::new())?;
/// assert_eq!(class, EntityClass::University);
/// # Ok(())
/// # }
/// ```
pub struct ClassificationPipeline {
    stages: Vec<Arc<dyn PipelineStage>>,
}

impl ClassificationPipeline {
    /// Create a pipeline with no stages.
    pub fn new() -> Self {
        ClassificationPipeline { stages: Vec::new() }
    }

    /// Add a stage to the pipeline.
    pub fn add_stage(mut self, stage: Arc<dyn PipelineStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Create the standard pipeline: one entity filter stage using the
    /// keyword typer and subclassifier over the given lexicon.
    pub fn standard(lexicon: Arc<Lexicon>) -> Self {
        Self::new().add_stage(Arc::new(EntityFilter::with_lexicon(lexicon)))
    }

    /// Get the stages in this pipeline.
    pub fn stages(&self) -> &[Arc<dyn PipelineStage>] {
        &self.stages
    }

    /// Run all stages over the document in order.
    pub fn run(&self, document: &mut Document) -> Result<()> {
        for stage in &self.stages {
            debug!("running pipeline stage {}", stage.name());
            stage.process(document)?;
        }
        Ok(())
    }

    /// Classify a text end to end.
    ///
    /// `upstream` carries the spans an upstream recognizer produced over
    /// `text`, if any; pass an empty vector to fall back to whole-text
    /// guessing. The result is the first surviving span's label, with
    /// organizations resolved through the subtype map under the full input
    /// text. Empty or unusable input yields [`EntityClass::Unknown`].
    pub fn classify(&self, text: &str, upstream: Vec<EntitySpan>) -> Result<EntityClass> {
        let mut document = Document::new(text);
        document.set_entities(upstream);

        self.run(&mut document)?;

        let class = resolve_class(&document);
        debug!("classified {text:?} as {class}");
        Ok(class)
    }
}

impl fmt::Debug for ClassificationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationPipeline")
            .field(
                "stages",
                &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Resolve a processed document to its reported class.
///
/// The subtype lookup uses the full input text, matching the serving
/// contract: an organization span that does not cover the whole input
/// resolves to bare `Org`.
pub fn resolve_class(document: &Document) -> EntityClass {
    let Some(first) = document.entities().first() else {
        return EntityClass::Unknown;
    };

    match &first.label {
        EntityLabel::Person => EntityClass::Person,
        EntityLabel::Org => match document.org_subtype(document.text()) {
            Some(subtype) => subtype.into(),
            None => EntityClass::Org,
        },
        EntityLabel::Other(_) => EntityClass::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> ClassificationPipeline {
        ClassificationPipeline::standard(Arc::new(Lexicon::default()))
    }

    #[test]
    fn test_whole_text_fallback_installs_one_span() {
        let mut document = Document::new("Harvard University");
        pipeline().run(&mut document).unwrap();

        assert_eq!(document.entities().len(), 1);
        let span = &document.entities()[0];
        assert_eq!(span.label, EntityLabel::Org);
        assert_eq!(span.text(document.text()), "Harvard University");
        assert_eq!(
            document.org_subtype("Harvard University"),
            Some(OrgSubtype::University)
        );
    }

    #[test]
    fn test_empty_document_stays_empty() {
        let mut document = Document::new("");
        pipeline().run(&mut document).unwrap();

        assert!(document.entities().is_empty());
        assert!(document.org_subtypes().is_empty());
    }

    #[test]
    fn test_filter_discards_foreign_labels() {
        let text = "Paris and Marie Curie";
        let mut document = Document::builder()
            .text(text)
            .add_entity(EntitySpan::over(text, 0, 5, EntityLabel::Other("GPE".to_string())).unwrap())
            .add_entity(EntitySpan::over(text, 10, 21, EntityLabel::Person).unwrap())
            .build();

        pipeline().run(&mut document).unwrap();

        assert_eq!(document.entities().len(), 1);
        assert_eq!(document.entities()[0].label, EntityLabel::Person);
        assert!(document.org_subtypes().is_empty());
    }

    #[test]
    fn test_every_org_span_gets_a_subtype_entry() {
        let text = "Google Inc and Imperial College";
        let mut document = Document::builder()
            .text(text)
            .add_entity(EntitySpan::over(text, 0, 10, EntityLabel::Org).unwrap())
            .add_entity(EntitySpan::over(text, 15, 31, EntityLabel::Org).unwrap())
            .build();

        pipeline().run(&mut document).unwrap();

        assert_eq!(document.org_subtypes().len(), 2);
        assert_eq!(
            document.org_subtype("Google Inc"),
            Some(OrgSubtype::Company)
        );
        assert_eq!(
            document.org_subtype("Imperial College"),
            Some(OrgSubtype::University)
        );
    }

    #[test]
    fn test_identical_org_texts_share_one_entry() {
        let text = "apple vs apple";
        let mut document = Document::builder()
            .text(text)
            .add_entity(EntitySpan::over(text, 0, 5, EntityLabel::Org).unwrap())
            .add_entity(EntitySpan::over(text, 9, 14, EntityLabel::Org).unwrap())
            .build();

        pipeline().run(&mut document).unwrap();

        assert_eq!(document.entities().len(), 2);
        assert_eq!(document.org_subtypes().len(), 1);
        assert_eq!(document.org_subtype("apple"), Some(OrgSubtype::Company));
    }

    #[test]
    fn test_classify_person_end_to_end() {
        let class = pipeline().classify("Marie Curie", Vec::new()).unwrap();
        assert_eq!(class, EntityClass::Person);
    }

    #[test]
    fn test_classify_university_end_to_end() {
        let class = pipeline()
            .classify("Harvard University", Vec::new())
            .unwrap();
        assert_eq!(class, EntityClass::University);
    }

    #[test]
    fn test_classify_fall_through_is_company() {
        // Digits fail the person shape, so the typer defaults to ORG and
        // the subclassifier defaults to COMPANY.
        let class = pipeline().classify("xyzzy123", Vec::new()).unwrap();
        assert_eq!(class, EntityClass::Company);
    }

    #[test]
    fn test_classify_empty_text_is_unknown() {
        let class = pipeline().classify("", Vec::new()).unwrap();
        assert_eq!(class, EntityClass::Unknown);
    }

    #[test]
    fn test_classify_name_shape_wins_without_keywords() {
        // Three alphabetic tokens and no keyword hits: the typer reads this
        // as a person before the subclassifier ever sees it.
        let class = pipeline().classify("Bank of England", Vec::new()).unwrap();
        assert_eq!(class, EntityClass::Person);
    }

    #[test]
    fn test_classify_of_heuristic_with_upstream_org_span() {
        // An upstream ORG label routes the same text to the subclassifier,
        // where the " of " rule resolves it as a university.
        let text = "Bank of England";
        let upstream = vec![EntitySpan::over(text, 0, text.len(), EntityLabel::Org).unwrap()];

        let class = pipeline().classify(text, upstream).unwrap();
        assert_eq!(class, EntityClass::University);
    }

    #[test]
    fn test_classify_partial_org_span_stays_bare_org() {
        let text = "I love Initech Inc";
        let upstream = vec![EntitySpan::over(text, 7, 18, EntityLabel::Org).unwrap()];

        // The subtype map is keyed by the span text, not the full input,
        // so the serving lookup misses and reports bare ORG.
        let class = pipeline().classify(text, upstream).unwrap();
        assert_eq!(class, EntityClass::Org);
    }

    #[test]
    fn test_classify_with_upstream_person_span() {
        let text = "Marie Curie";
        let upstream = vec![EntitySpan::over(text, 0, text.len(), EntityLabel::Person).unwrap()];

        let class = pipeline().classify(text, upstream).unwrap();
        assert_eq!(class, EntityClass::Person);
    }

    #[test]
    fn test_classify_only_foreign_upstream_spans_is_unknown() {
        let text = "Paris";
        let upstream =
            vec![EntitySpan::over(text, 0, 5, EntityLabel::Other("GPE".to_string())).unwrap()];

        let class = pipeline().classify(text, upstream).unwrap();
        assert_eq!(class, EntityClass::Unknown);
    }

    #[test]
    fn test_pipeline_debug_lists_stage_names() {
        let debug = format!("{:?}", pipeline());
        assert!(debug.contains("entity_filter"));
    }
}
