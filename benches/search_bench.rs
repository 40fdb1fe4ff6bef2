use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isolation_search::core::{GameRng, Unlimited};
use isolation_search::eval::WeightedMobility;
use isolation_search::games::isolation::IsolationBoard;
use isolation_search::search::{FixedDepthAgent, IterativeDeepeningAgent, SearchConfig};

fn mid_game() -> IsolationBoard {
    let mut board = IsolationBoard::new(7, 7).unwrap();
    board.play_random(4, &mut GameRng::new(42));
    board
}

fn bench_minimax_depth_4(c: &mut Criterion) {
    let board = mid_game();
    let mut agent = FixedDepthAgent::new(SearchConfig::default(), WeightedMobility);
    c.bench_function("minimax depth 4", |b| {
        b.iter(|| black_box(agent.search(&board, 4, &Unlimited)))
    });
}

fn bench_alpha_beta_depth_4(c: &mut Criterion) {
    let board = mid_game();
    let mut agent = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);
    c.bench_function("alpha-beta depth 4", |b| {
        b.iter(|| black_box(agent.alpha_beta(&board, 4, &Unlimited)))
    });
}

criterion_group!(benches, bench_minimax_depth_4, bench_alpha_beta_depth_4);
criterion_main!(benches);
