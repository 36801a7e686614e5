use criterion::{criterion_group, criterion_main, Criterion};
use healthvoice_core::{summarize, Extractor};
use std::hint::black_box;

const NOTE: &str = "Woke up with a pounding headache and a sore throat, slept 5 hours. \
    Feeling anxious and a bit worn out. Took Advil around nine and Tylenol 500mg at lunch. \
    Skipped the gym because of work pressure but drank plenty of water.";

fn bench_extract_note(c: &mut Criterion) {
    let extractor = Extractor::default();

    c.bench_function("extract_note", |b| {
        b.iter(|| extractor.analyze(black_box(NOTE)).unwrap());
    });

    let long_note = NOTE.repeat(30);
    c.bench_function("extract_note_long", |b| {
        b.iter(|| extractor.analyze(black_box(&long_note)).unwrap());
    });
}

fn bench_summarize(c: &mut Criterion) {
    let analysis = Extractor::default().analyze(NOTE).unwrap();

    c.bench_function("summarize_note", |b| {
        b.iter(|| summarize(black_box(&analysis)));
    });
}

criterion_group!(benches, bench_extract_note, bench_summarize);
criterion_main!(benches);
