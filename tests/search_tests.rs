//! Search integration tests using the Isolation board.

use std::time::Instant;

use isolation_search::core::{CountdownProbe, Deadline, GameRng, Move, PlayerId, Unlimited};
use isolation_search::eval::{CenterWeightedMobility, Evaluator, MobilityRatio, WeightedMobility};
use isolation_search::games::isolation::{IsolationBoard, IsolationBoardBuilder};
use isolation_search::rules::{GameResult, GameState};
use isolation_search::search::{
    self, Agent, FixedDepthAgent, IterativeDeepeningAgent, SearchConfig, SearchMode,
};

fn mid_game(seed: u64, plies: usize) -> IsolationBoard {
    let mut board = IsolationBoard::new(7, 7).unwrap();
    board.play_random(plies, &mut GameRng::new(seed));
    board
}

/// Player 1 has exactly one jump; player 2 has none.
fn one_move_left() -> IsolationBoard {
    IsolationBoardBuilder::new()
        .size(4, 4)
        .place(PlayerId::FIRST, Move::new(0, 0))
        .place(PlayerId::SECOND, Move::new(3, 0))
        .block(Move::new(1, 2))
        .block(Move::new(1, 1))
        .block(Move::new(2, 2))
        .build()
        .unwrap()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_single_legal_move_is_chosen() {
    let board = one_move_left();

    let mut fixed = FixedDepthAgent::new(SearchConfig::default().with_depth(1), MobilityRatio);
    assert_eq!(fixed.choose_move(&board, &Unlimited), Move::new(2, 1));

    let mut iterative = IterativeDeepeningAgent::new(SearchConfig::default(), MobilityRatio);
    assert_eq!(iterative.choose_move(&board, &Unlimited), Move::new(2, 1));
}

#[test]
fn test_opening_is_symmetric() {
    let board = IsolationBoard::new(7, 7).unwrap();

    assert_eq!(MobilityRatio.score(&board, PlayerId::FIRST), 0.5);
    assert_eq!(MobilityRatio.score(&board, PlayerId::SECOND), 0.5);
}

#[test]
fn test_no_legal_moves_returns_sentinel() {
    let board = IsolationBoardBuilder::new()
        .size(3, 3)
        .place(PlayerId::FIRST, Move::new(1, 1))
        .place(PlayerId::SECOND, Move::new(0, 0))
        .build()
        .unwrap();

    let mut fixed = FixedDepthAgent::new(SearchConfig::default(), WeightedMobility);
    let mut iterative = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);

    assert_eq!(fixed.choose_move(&board, &Unlimited), Move::NONE);
    assert_eq!(iterative.choose_move(&board, &Unlimited), Move::NONE);
}

#[test]
fn test_hopeless_evaluator_still_plays_legal_moves() {
    fn lost(_: &IsolationBoard, _: PlayerId) -> f64 {
        f64::NEG_INFINITY
    }

    let board = IsolationBoard::new(5, 5).unwrap();
    let first = board.legal_moves()[0];

    let mut fixed = FixedDepthAgent::new(SearchConfig::default().with_depth(2), lost);
    assert_eq!(fixed.choose_move(&board, &Unlimited), first);

    let mut iterative = IterativeDeepeningAgent::new(SearchConfig::default().with_max_depth(2), lost);
    assert_eq!(iterative.choose_move(&board, &Unlimited), first);

    // Two root moves scored before time runs out at depth 1.
    let mut interrupted = IterativeDeepeningAgent::new(SearchConfig::default(), lost);
    assert_eq!(interrupted.choose_move(&board, &CountdownProbe::new(3)), first);
    assert!(interrupted.stats().timed_out);
}

#[test]
fn test_immediate_timeout_fallbacks() {
    let board = mid_game(5, 2);
    let legal = board.legal_moves();
    assert!(!legal.is_empty());

    // Fixed depth trusts nothing from an unfinished pass.
    let mut fixed = FixedDepthAgent::new(SearchConfig::default(), MobilityRatio);
    assert_eq!(fixed.choose_move(&board, &CountdownProbe::new(0)), Move::NONE);

    // Iterative deepening falls back to the first legal move.
    let mut iterative = IterativeDeepeningAgent::new(SearchConfig::default(), MobilityRatio);
    assert_eq!(iterative.choose_move(&board, &CountdownProbe::new(0)), legal[0]);
}

#[test]
fn test_threshold_is_inclusive() {
    let board = mid_game(5, 2);
    let at_threshold = || 10.0;
    let above_threshold = || 10.5;

    let mut fixed = FixedDepthAgent::new(SearchConfig::default().with_depth(1), MobilityRatio);
    assert_eq!(fixed.choose_move(&board, &at_threshold), Move::NONE);
    assert!(fixed.stats().timed_out);

    let mv = fixed.choose_move(&board, &above_threshold);
    assert!(board.legal_moves().contains(&mv));
    assert!(!fixed.stats().timed_out);
}

// =============================================================================
// Budget Tests
// =============================================================================

#[test]
fn test_probe_read_at_every_node() {
    let board = mid_game(9, 4);

    let probe = CountdownProbe::new(u64::MAX);
    let mut fixed = FixedDepthAgent::new(SearchConfig::default().with_depth(3), WeightedMobility);
    fixed.choose_move(&board, &probe);
    // One root check plus one per node.
    assert_eq!(probe.reads(), fixed.stats().nodes + 1);

    let probe = CountdownProbe::new(u64::MAX);
    let mut iterative = IterativeDeepeningAgent::new(
        SearchConfig::default().with_max_depth(3),
        WeightedMobility,
    );
    iterative.choose_move(&board, &probe);
    // One root check per depth.
    let depths = u64::from(iterative.stats().depth_completed);
    assert_eq!(probe.reads(), iterative.stats().nodes + depths);
}

#[test]
fn test_wall_clock_deadline_is_respected() {
    let board = mid_game(21, 2);
    let mut agent = IterativeDeepeningAgent::new(SearchConfig::default().with_threshold(20.0), CenterWeightedMobility);

    let start = Instant::now();
    let mv = agent.choose_move(&board, &Deadline::after_ms(100));
    let elapsed_ms = start.elapsed().as_millis();

    assert!(board.legal_moves().contains(&mv));
    assert!(agent.stats().depth_completed >= 1);
    assert!(elapsed_ms < 1_000, "search overran its budget: {}ms", elapsed_ms);
}

#[test]
fn test_more_nodes_with_more_time() {
    let board = mid_game(3, 2);

    let mut short = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);
    short.choose_move(&board, &CountdownProbe::new(200));

    let mut long = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);
    long.choose_move(&board, &CountdownProbe::new(20_000));

    assert!(long.stats().depth_completed >= short.stats().depth_completed);
    assert!(long.stats().nodes > short.stats().nodes);
}

// =============================================================================
// Strategy Comparison Tests
// =============================================================================

#[test]
fn test_alpha_beta_visits_fewer_nodes() {
    let board = mid_game(17, 4);

    let mut fixed = FixedDepthAgent::new(SearchConfig::default().with_depth(4), WeightedMobility);
    let plain = fixed.search(&board, 4, &Unlimited).unwrap();
    let plain_nodes = fixed.stats().nodes;

    let mut iterative = IterativeDeepeningAgent::new(SearchConfig::default(), WeightedMobility);
    let pruned = iterative.alpha_beta(&board, 4, &Unlimited).unwrap();
    let pruned_nodes = iterative.stats().nodes;

    assert_eq!(plain, pruned);
    assert!(pruned_nodes <= plain_nodes);
}

#[test]
fn test_iterative_matches_alpha_beta_at_cap() {
    let board = mid_game(8, 6);

    let mut capped = IterativeDeepeningAgent::new(SearchConfig::default().with_max_depth(3), MobilityRatio);
    let deepened = capped.choose_move(&board, &Unlimited);

    let mut single = IterativeDeepeningAgent::new(SearchConfig::default(), MobilityRatio);
    let direct = single.alpha_beta(&board, capped.stats().depth_completed, &Unlimited).unwrap();

    assert_eq!(deepened, direct);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_agent_from_json_config() {
    let json = r#"{
        "mode": "iterative_deepening",
        "heuristic": "center_weighted_mobility",
        "time_threshold_ms": 5.0,
        "max_depth": 2
    }"#;
    let config: SearchConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.mode, SearchMode::IterativeDeepening);

    let board = mid_game(1, 2);
    let mut agent = search::from_config::<IsolationBoard>(config).unwrap();
    let mv = agent.choose_move(&board, &Unlimited);

    assert!(board.legal_moves().contains(&mv));
    assert_eq!(agent.stats().depth_completed, 2);
}

// =============================================================================
// Full Game Tests
// =============================================================================

#[test]
fn test_agents_play_a_full_game() {
    let mut board = IsolationBoard::new(5, 5).unwrap();
    let mut first = from_mode(SearchMode::IterativeDeepening);
    let mut second = from_mode(SearchMode::FixedDepth);

    let result = loop {
        if let Some(result) = board.outcome() {
            break result;
        }
        let agent = if board.active_player() == PlayerId::FIRST {
            &mut first
        } else {
            &mut second
        };
        let mv = agent.choose_move(&board, &Unlimited);
        board.apply_move(mv).unwrap();
    };

    let GameResult::Winner(winner) = result;
    let loser = winner.other();
    assert!(board.legal_moves_for(loser).is_empty());
    assert!(board.move_count() <= 25);
}

fn from_mode(mode: SearchMode) -> Box<dyn Agent<IsolationBoard>> {
    let config = SearchConfig::default()
        .with_mode(mode)
        .with_depth(2)
        .with_max_depth(3);
    search::from_config(config).unwrap()
}
