use criterion::{black_box, criterion_group, criterion_main, Criterion};

use open_set::cards::Universe;
use open_set::core::{EngineConfig, GameRng};
use open_set::engine::DeckEngine;
use open_set::rules::{find_set, is_set};
use open_set::zones::ShuffleOrder;

fn bench_is_set(c: &mut Criterion) {
    let cards: Vec<_> = Universe::new().iter().copied().collect();
    c.bench_function("is_set_universe_sweep", |b| {
        b.iter(|| {
            let mut sets = 0;
            for window in cards.windows(3) {
                if is_set(&window[0], &window[1], &window[2]) {
                    sets += 1;
                }
            }
            black_box(sets)
        })
    });
}

fn bench_find_set(c: &mut Criterion) {
    let engine = DeckEngine::new(EngineConfig::new().with_seed(42));
    let deck = engine.get_deck();
    c.bench_function("find_set_twelve_slots", |b| b.iter(|| find_set(black_box(&deck))));
}

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_order", |b| {
        b.iter(|| ShuffleOrder::new(&mut GameRng::new(black_box(7))))
    });
}

criterion_group!(benches, bench_is_set, bench_find_set, bench_shuffle);
criterion_main!(benches);
