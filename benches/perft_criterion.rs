use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ply_chess::game_state::chess_types::*;
use ply_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rows: [&'static str; 8],
    castling: CastlingRights,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "initial",
        rows: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
            "PPPPPPPP", "RNBQKBNR",
        ],
        castling: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        rows: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p",
            "PPPBBPPP", "R...K..R",
        ],
        castling: CastlingRights::ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        rows: [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........",
            "....P.P.", "........",
        ],
        castling: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812],
    },
];

fn build_position(case: &BenchCase) -> GameState {
    let mut game_state = GameState::new_empty();
    for (row, line) in case.rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => continue,
            };
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            game_state.put_piece(Square::new(row as u8, col as u8), Piece::new(color, kind));
        }
    }
    game_state.set_side_to_move(Color::Light);
    game_state.set_castling_rights(case.castling);
    game_state
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = build_position(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game.clone(), depth);
            assert_eq!(
                warmup, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    let mut bench_game = game.clone();
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
