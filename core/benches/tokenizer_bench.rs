use criterion::{criterion_group, criterion_main, Criterion};
use vsm_core::tokenizer::tokenize;
use vsm_core::Index;

const WORDS: &[&str] = &["retrieval", "vector", "space", "model", "cosine", "Robert", "index", "query", "term", "weight"];

fn synthetic_doc(seed: usize, len: usize) -> String {
    (0..len).map(|i| WORDS[(seed * 7 + i * 3) % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synthetic_doc(1, 5_000);
    c.bench_function("tokenize_5k_words", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let index = Index::from_texts((0..2_000).map(|i| synthetic_doc(i, 200)));
    c.bench_function("search_two_terms", |b| b.iter(|| index.search("cosine query", 10)));
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
