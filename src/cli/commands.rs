//! Command implementations for the Taxon CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::annotation::{Document, EntitySpan};
use crate::classify::{EntityTyper, KeywordEntityTyper, OrgSubclassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TaxonError};
use crate::lexicon::Lexicon;
use crate::pipeline::{ClassificationPipeline, resolve_class};

/// Execute a CLI command.
pub fn execute_command(args: TaxonArgs) -> Result<()> {
    let lexicon = load_lexicon(&args)?;

    match &args.command {
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args, lexicon),
        Command::Guess(guess_args) => guess_type(guess_args.clone(), &args, lexicon),
        Command::Subtype(subtype_args) => subtype_org(subtype_args.clone(), &args, lexicon),
        Command::Lexicon => show_lexicon(&args, lexicon),
    }
}

/// Load the lexicon, either from the override file or the built-in defaults.
fn load_lexicon(args: &TaxonArgs) -> Result<Arc<Lexicon>> {
    match &args.lexicon_file {
        Some(path) => {
            if args.verbosity() > 1 {
                println!("Loading lexicon from: {}", path.display());
            }
            Ok(Arc::new(Lexicon::from_json_file(path)?))
        }
        None => Ok(Arc::new(Lexicon::default())),
    }
}

/// Classify a text end to end.
fn classify_text(args: ClassifyArgs, cli_args: &TaxonArgs, lexicon: Arc<Lexicon>) -> Result<()> {
    let upstream = match &args.entities_file {
        Some(path) => load_entities_from_file(path)?,
        None => Vec::new(),
    };
    debug!("classifying with {} upstream spans", upstream.len());

    let pipeline = ClassificationPipeline::standard(lexicon);
    let mut document = Document::new(args.text.as_str());
    document.set_entities(upstream);
    pipeline.run(&mut document)?;

    let class = resolve_class(&document);

    output_result(
        "Classification complete",
        &ClassificationResult {
            input: args.text,
            class,
            entities: document.entities().to_vec(),
            org_subtypes: document.org_subtypes().clone(),
        },
        cli_args,
    )
}

/// Guess whether a text names a person or an organization.
fn guess_type(args: GuessArgs, cli_args: &TaxonArgs, lexicon: Arc<Lexicon>) -> Result<()> {
    if args.text.is_empty() {
        return Err(TaxonError::invalid_argument("text must not be empty"));
    }

    let typer = KeywordEntityTyper::new(lexicon);
    let label = typer.predict(&args.text)?;

    output_result(
        "Guess complete",
        &GuessResult {
            input: args.text,
            label,
        },
        cli_args,
    )
}

/// Subclassify organization text.
fn subtype_org(args: SubtypeArgs, cli_args: &TaxonArgs, lexicon: Arc<Lexicon>) -> Result<()> {
    let subclassifier = OrgSubclassifier::new(lexicon);
    let subtype = subclassifier.classify(&args.text);

    output_result(
        "Subclassification complete",
        &SubtypeResult {
            input: args.text,
            subtype,
        },
        cli_args,
    )
}

/// Show statistics for the loaded lexicon.
fn show_lexicon(cli_args: &TaxonArgs, lexicon: Arc<Lexicon>) -> Result<()> {
    output_result(
        "Lexicon loaded",
        &LexiconStats {
            university_keywords: lexicon.university_keyword_count(),
            company_keywords: lexicon.company_keyword_count(),
            known_entities: lexicon.known_entity_count(),
        },
        cli_args,
    )
}

/// Load upstream entity spans from a JSON file.
fn load_entities_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<EntitySpan>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let entities: Vec<EntitySpan> = serde_json::from_reader(reader)?;

    Ok(entities)
}
