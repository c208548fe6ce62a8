// Criterion benchmarks for polyspell.
//
// Measures per-call overhead of the session layer (validity gate plus
// forwarding) against the in-memory backend, and the cost of a rebuild.
//
// Run:
//   cargo bench -p polyspell

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use polyspell::{Attribute, Loader, MemoryClient, Settings, Speller};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const WORDS: &[&str] = &[
    "house", "boat", "the", "a", "spell", "checker", "language", "session", "word", "list",
];

const INPUT: &[&str] = &[
    "house", "House", "HOUSE", "hosue", "houseboat", "spellchecker", "1984", "zzz",
];

fn loader() -> Arc<Loader> {
    let client = MemoryClient::new("memory").with_words("en-US", WORDS.iter().copied());
    Arc::new(Loader::new(Arc::new(Settings::new())).with_client(client))
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_is_correct(c: &mut Criterion) {
    let speller = Speller::new(loader(), "en-US");
    c.bench_function("speller_is_correct", |b| {
        b.iter(|| {
            for word in INPUT {
                black_box(speller.is_correct(black_box(word)));
            }
        })
    });
}

fn bench_backend_is_correct(c: &mut Criterion) {
    let dict = loader()
        .create_dictionary("en-US")
        .expect("en-US dictionary");
    c.bench_function("backend_is_correct", |b| {
        b.iter(|| {
            for word in INPUT {
                black_box(dict.is_correct(black_box(word)));
            }
        })
    });
}

fn bench_check_and_suggest(c: &mut Criterion) {
    let mut speller = Speller::new(loader(), "en-US");
    speller.store_replacement("hosue", "house");
    c.bench_function("speller_check_and_suggest", |b| {
        b.iter(|| {
            for word in INPUT {
                black_box(speller.check_and_suggest(black_box(word)));
            }
        })
    });
}

/// Every iteration flips an attribute, so the next check rebuilds.
fn bench_rebuild(c: &mut Criterion) {
    let speller = Speller::new(loader(), "en-US");
    let mut value = false;
    c.bench_function("speller_rebuild", |b| {
        b.iter(|| {
            speller.set_attribute(Attribute::CheckUppercase, value);
            value = !value;
            black_box(speller.is_correct("house"))
        })
    });
}

criterion_group!(
    benches,
    bench_is_correct,
    bench_backend_is_correct,
    bench_check_and_suggest,
    bench_rebuild
);
criterion_main!(benches);
