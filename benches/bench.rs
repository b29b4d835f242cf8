//! Criterion benchmarks for the Taxon entity classifier.
//!
//! Covers the three decision layers:
//! - entity type guessing (keyword typer)
//! - organization subclassification
//! - the end-to-end pipeline with whole-text fallback

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use taxon::classify::{EntityTyper, KeywordEntityTyper, OrgSubclassifier};
use taxon::lexicon::Lexicon;
use taxon::pipeline::ClassificationPipeline;

/// Generate a mixed batch of classification inputs.
fn generate_inputs(count: usize) -> Vec<String> {
    let samples = [
        "Marie Curie",
        "Harvard University",
        "Apple Records",
        "Bank of England",
        "Initech Technologies",
        "O'Brien",
        "Jean-Claude Van Damme",
        "Imperial College London",
        "xyzzy123",
        "Royal Academy of Arts",
        "Stark Industries",
        "collegetown bagels",
    ];

    (0..count)
        .map(|i| samples[i % samples.len()].to_string())
        .collect()
}

fn bench_guess(c: &mut Criterion) {
    let typer = KeywordEntityTyper::new(Arc::new(Lexicon::default()));
    let inputs = generate_inputs(100);

    let mut group = c.benchmark_group("guess");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("keyword_typer", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(typer.predict(black_box(input)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_subtype(c: &mut Criterion) {
    let subclassifier = OrgSubclassifier::new(Arc::new(Lexicon::default()));
    let inputs = generate_inputs(100);

    let mut group = c.benchmark_group("subtype");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("org_subclassifier", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(subclassifier.classify(black_box(input)));
            }
        })
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = ClassificationPipeline::standard(Arc::new(Lexicon::default()));
    let inputs = generate_inputs(100);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("classify_whole_text", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(pipeline.classify(black_box(input), Vec::new()).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_guess, bench_subtype, bench_pipeline);
criterion_main!(benches);
