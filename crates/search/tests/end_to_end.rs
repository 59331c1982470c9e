use blokie_core::{all_transformations, left_top_justify, Bitset81, GameState, Hand, PIECES};
use blokie_engine::{next_boards, perform_clears, random_board, random_piece_set, ScoreConfig};
use blokie_eval::{evaluate, EvalWeights};
use blokie_search::permutations::ALL_ORDERINGS;
use blokie_search::{ai_make_move, fitness_sample, new_game, AutoPlayer, Planner, Step};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Prefers crowded boards, so games end within a few hands.
fn filler() -> Planner {
    let weights = EvalWeights {
        occupied_side_square: -1000,
        occupied_center_square: -1000,
        occupied_corner_square: -1000,
        side_cube: 0,
        corner_cube: 0,
        center_cube: 0,
        squashed_empty_middle: 0,
        squashed_empty_edge: 0,
        alternating_unaligned: 0,
        alternating_aligned: 0,
        cornered_empty: 0,
        deadly_piece: 0,
        three_bar: 0,
    };
    Planner::new(weights, ScoreConfig::standard())
}

fn single_cell_hand() -> Hand {
    Hand::new([PIECES[0], Bitset81::EMPTY, Bitset81::EMPTY])
}

#[test]
fn test_empty_hand_on_new_game() {
    let result = ai_make_move(&new_game(), Hand::EMPTY).unwrap();
    assert_eq!(result.evaluation, 0);
    assert!(result
        .new_game_states
        .iter()
        .all(|s| s.board == Bitset81::EMPTY));
}

#[test]
fn test_every_missing_row_cell_is_filled() {
    for r in 0..9 {
        for c in 0..9 {
            let board = Bitset81::row(r).toggle(r, c);
            let result = ai_make_move(&GameState::with_board(board), single_cell_hand()).unwrap();
            let last = result.final_state();
            assert_eq!(last.board, Bitset81::EMPTY, "row {r} col {c}");
            assert_eq!(last.previous_piece_placement, Bitset81::bit(r, c));
            assert_eq!(last.score, 18);
            assert!(last.previous_move_was_clear);
        }
    }
}

#[test]
fn test_missing_column_and_cube_cells() {
    for i in 0..9 {
        for board in [
            Bitset81::column(i).toggle(i, i),
            Bitset81::cube(i).toggle(i / 3 * 3 + 1, i % 3 * 3 + 1),
        ] {
            let result = ai_make_move(&GameState::with_board(board), single_cell_hand()).unwrap();
            assert_eq!(result.final_state().board, Bitset81::EMPTY);
            assert_eq!(result.final_state().score, 18);
        }
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for step in 0..5 {
        let board = random_board(&mut rng, step as f64 / 10.0);
        let game = GameState::with_board(perform_clears(board));
        let hand = random_piece_set(&mut rng);
        let first = ai_make_move(&game, hand);
        let second = ai_make_move(&game, hand);
        assert_eq!(first, second);
    }
}

#[test]
fn test_played_pieces_match_hand() {
    let mut rng = StdRng::seed_from_u64(42);
    let hand = random_piece_set(&mut rng);
    let result = ai_make_move(&new_game(), hand).unwrap();
    let mut remaining = hand;
    for state in result.new_game_states {
        assert!(remaining.consume(state.previous_piece).is_some());
        assert_eq!(
            state.previous_piece_placement.count(),
            state.previous_piece.count()
        );
    }
    assert!(remaining.is_exhausted());
}

#[test]
fn test_transformed_board_keeps_evaluation() {
    // a single cell fits anywhere, so the best leaf is symmetric too
    let board = Bitset81::row(2) | Bitset81::column(6).toggle(2, 6) | Bitset81::bit(8, 0);
    let hand = Hand::new([PIECES[0], PIECES[0], Bitset81::EMPTY]);
    let base = ai_make_move(&GameState::with_board(board), hand)
        .unwrap()
        .evaluation;
    for t in all_transformations(board) {
        let result = ai_make_move(&GameState::with_board(t), hand).unwrap();
        assert_eq!(result.evaluation, base);
    }
}

#[test]
fn test_custom_scoring_flows_through() {
    let planner = Planner::new(
        EvalWeights::default(),
        ScoreConfig::standard().with_tier_multiplier(0, 100),
    );
    let board = Bitset81::row(1).toggle(1, 1);
    let result = planner
        .ai_make_move(&GameState::with_board(board), single_cell_hand())
        .unwrap();
    assert_eq!(result.final_state().score, 100);
}

#[test]
fn test_fitness_sample_ends() {
    let mut rng = StdRng::seed_from_u64(2024);
    let sample = fitness_sample(&filler(), &mut rng).unwrap();
    assert!(sample.num_moves > 0);
    assert!(sample.score as u64 >= sample.num_moves as u64);
}

#[test]
fn test_auto_player_runs_to_end() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut player = AutoPlayer::new(filler());
    let last = player.run_to_end(&mut rng).unwrap();
    assert_eq!(player.step(&mut rng).unwrap(), Step::Over);
    assert!(last.score > 0);
    assert!(!last.is_over());
}

/// Lowest evaluation over every ordering and placement, no pruning.
fn exhaustive_best(board: Bitset81, pieces: [Bitset81; 3], weights: &EvalWeights) -> Option<i32> {
    let mut best: Option<i32> = None;
    for [i0, i1, i2] in ALL_ORDERINGS {
        for (_, after_0) in next_boards(board, pieces[i0]) {
            for (_, after_1) in next_boards(after_0, pieces[i1]) {
                for (_, after_2) in next_boards(after_1, pieces[i2]) {
                    let evaluation = evaluate(after_2, weights);
                    best = Some(best.map_or(evaluation, |b| b.min(evaluation)));
                }
            }
        }
    }
    best
}

#[test]
fn test_pruned_plan_matches_exhaustive_search() {
    let planner = Planner::default();
    let mut rng = StdRng::seed_from_u64(0xb0a2d);
    for case in 0..40 {
        let fullness = 0.3 + (case % 4) as f64 * 0.1;
        let board = perform_clears(random_board(&mut rng, fullness));
        let hand = random_piece_set(&mut rng);
        let pieces = hand.slots().map(left_top_justify);

        let plan = planner.plan_best_boards(board, pieces);
        assert_eq!(
            plan.map(|p| p.evaluation),
            exhaustive_best(board, pieces, &planner.weights),
            "case {case}\n{board}"
        );
    }
}

#[test]
fn test_result_ends_on_evaluated_board() {
    let planner = Planner::default();
    let mut rng = StdRng::seed_from_u64(0xe7a1);
    for case in 0..60 {
        let fullness = 0.2 + (case % 5) as f64 * 0.1;
        let board = perform_clears(random_board(&mut rng, fullness));
        let hand = random_piece_set(&mut rng);
        let result = planner
            .ai_make_move(&GameState::with_board(board), hand)
            .unwrap();
        if result.is_game_over() {
            continue;
        }
        assert_eq!(
            evaluate(result.final_state().board, &planner.weights),
            result.evaluation,
            "case {case}\n{board}"
        );
    }
}
