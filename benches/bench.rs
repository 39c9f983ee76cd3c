//! Criterion benchmarks for the Arabic stemmer.
//!
//! Covers single-word stemming and root extraction, parallel batches and the
//! full analysis pipeline.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use arabic_stemmer::analysis::analyzer::analyzer::Analyzer;
use arabic_stemmer::analysis::analyzer::language::arabic::ArabicAnalyzer;
use arabic_stemmer::arabic::ArabicLightStemmer;

const WORDS: &[&str] = &[
    "الكاتب",
    "يكتبون",
    "مدرستهم",
    "والمعلمون",
    "فسيكتبونها",
    "بالقلم",
    "استخدام",
    "المكتبات",
    "سيذهبون",
    "وكتابه",
    "المدرسة",
    "أفتكتبون",
    "لاعبين",
    "درسوا",
    "في",
    "عليها",
];

/// Generate test words for benchmarking.
fn generate_test_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| WORDS[(i * 7) % WORDS.len()].to_string())
        .collect()
}

/// Generate test sentences for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let length = 20 + (i % 30);
            (0..length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_stemming(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemming");
    let stemmer = ArabicLightStemmer::new();

    group.bench_function("light_stem_single_word", |b| {
        b.iter(|| black_box(stemmer.light_stem(black_box("فسيكتبونها"))));
    });

    group.bench_function("choose_root_single_word", |b| {
        b.iter(|| black_box(stemmer.choose_root(black_box("فسيكتبونها"))));
    });

    group.bench_function("analyze_single_word", |b| {
        b.iter(|| black_box(stemmer.analyze(black_box("والمعلمون"))));
    });

    let words = generate_test_words(1000);
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("light_stem_sequential", |b| {
        b.iter(|| {
            let stems: Vec<String> = words.iter().map(|w| stemmer.light_stem(w)).collect();
            black_box(stems)
        });
    });

    group.bench_function("stem_all_parallel", |b| {
        b.iter(|| black_box(stemmer.stem_all(&words)));
    });

    group.bench_function("root_all_parallel", |b| {
        b.iter(|| black_box(stemmer.root_all(&words)));
    });

    group.finish();
}

fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");
    group.sample_size(20);

    group.bench_function("construct_default_stemmer", |b| {
        b.iter(|| black_box(ArabicLightStemmer::new()));
    });

    let stemmer = ArabicLightStemmer::new();
    let prefixes = stemmer.prefix_list().to_vec();
    group.bench_function("rebuild_prefix_trie", |b| {
        b.iter_with_setup(
            || stemmer.clone(),
            |mut stemmer| {
                stemmer.set_prefix_list(prefixes.clone());
                black_box(stemmer)
            },
        );
    });

    group.finish();
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let analyzer = ArabicAnalyzer::new().expect("default analyzer");
    let documents = generate_test_documents(100);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&documents[0])).unwrap().collect();
            black_box(tokens)
        });
    });

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for doc in &documents {
                let tokens: Vec<_> = analyzer.analyze(black_box(doc)).unwrap().collect();
                black_box(tokens);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_stemming,
    bench_configuration,
    bench_text_analysis
);
criterion_main!(benches);
