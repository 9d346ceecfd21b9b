use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use speakcards::card::{Flashcard, SENTENCE_KIND, VOCABULARY_KIND};
use speakcards::session::Session;

fn bench_filter_and_shuffle(c: &mut Criterion) {
    let deck: Vec<Flashcard> = (0..10_000)
        .map(|i| {
            let kind = if i % 2 == 0 {
                SENTENCE_KIND
            } else {
                VOCABULARY_KIND
            };
            Flashcard::new(kind, format!("prompt {i}"), format!("answer {i}"))
        })
        .collect();

    c.bench_function("apply_filter_10k", |b| {
        let mut session = Session::new(deck.clone(), SENTENCE_KIND);
        b.iter(|| {
            session.apply_filter(black_box(VOCABULARY_KIND));
            black_box(session.current_view());
        });
    });
}

criterion_group!(benches, bench_filter_and_shuffle);
criterion_main!(benches);
