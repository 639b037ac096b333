use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ply_chess::game_state::chess_types::*;
use ply_chess::move_generation::legal_move_generator::generate_legal_moves;
use ply_chess::search::find_move::find_move;
use ply_chess::search::search_types::{SearchAlgorithm, SearchConfig};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_initial");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let cases = [
        (SearchAlgorithm::Minimax, 2u8),
        (SearchAlgorithm::Negamax, 2),
        (SearchAlgorithm::Negamax, 3),
    ];

    for (algorithm, depth) in cases {
        let config = SearchConfig {
            depth,
            algorithm,
            shuffle_seed: Some(2024),
        };
        let mut game = GameState::new_game();
        let legal_moves = generate_legal_moves(&mut game);

        group.bench_with_input(
            BenchmarkId::new(format!("{algorithm:?}"), depth),
            &config,
            |b, config| {
                b.iter(|| {
                    let outcome = find_move(black_box(&mut game), &legal_moves, config, None);
                    black_box(outcome.best_move)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
