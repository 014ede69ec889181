use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use knockout::{KnockOut, OneThroughTen};

fn bench_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("play");

    for player_count in [1u32, 4, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(player_count),
            &player_count,
            |b, &count| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut game = KnockOut::new(count, OneThroughTen::new(seed)).unwrap();
                    black_box(game.play().unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_play);
criterion_main!(benches);
