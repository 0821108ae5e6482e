use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::position::{position_gen, Board, Player};
use crate::search::{AlphaBeta, Greedy, Minmax, NodeLabel, Strategy, TraceEntry, NEG_INFINITY};
use crate::tests::board_from;
use crate::trace_writer;

#[test]
fn greedy_picks_the_highest_weight_cell() {
    let board: Board<3> = board_from([[1, 2, 3], [4, 9, 5], [6, 7, 8]], ["***", "***", "***"]);
    let (trace, next) = Greedy::new(Player::X).choose_move(&board);
    assert!(trace.is_empty());
    let expected: Board<3> = board_from([[1; 3]; 3], ["***", "*X*", "***"]);
    assert_eq!(next, expected);
}

#[test]
fn greedy_prefers_a_raid_over_a_plain_placement() {
    // Raiding B2 flips the 10-weight O on A2, which beats claiming the
    // 15-weight C3 outright
    let board: Board<3> = board_from([[1, 1, 1], [10, 2, 1], [1, 1, 15]], ["*X*", "O**", "***"]);
    let (_, next) = Greedy::new(Player::X).choose_move(&board);
    let expected: Board<3> = board_from([[1; 3]; 3], ["*X*", "XX*", "***"]);
    assert_eq!(next, expected);
    assert_eq!(next.evaluate(Player::X), 13);
}

#[test]
fn greedy_stands_pat_when_no_move_improves() {
    let board: Board<3> = board_from([[0; 3]; 3], ["***", "*X*", "***"]);
    let (trace, next) = Greedy::new(Player::O).choose_move(&board);
    assert!(trace.is_empty());
    assert_eq!(next, board);
}

#[test]
fn minmax_depth_1_agrees_with_greedy_on_an_empty_board() {
    // With uniform weights both searches keep the first-found square
    let uniform: Board<5> = board_from([[1; 5]; 5], ["*****"; 5]);
    let (_, greedy_choice) = Greedy::new(Player::X).choose_move(&uniform);
    let (_, minmax_choice) = Minmax::new(Player::X, 1).choose_move(&uniform);
    assert_eq!(greedy_choice, minmax_choice);

    let board: Board<5> = position_gen::random_board(&mut SmallRng::seed_from_u64(77), 0.0);
    let (_, greedy_choice) = Greedy::new(Player::X).choose_move(&board);
    let (_, minmax_choice) = Minmax::new(Player::X, 1).choose_move(&board);
    assert_eq!(greedy_choice, minmax_choice);
}

#[test]
fn minmax_depth_1_trace_test() {
    let board: Board<2> = board_from([[1, 2], [3, 4]], ["**", "**"]);
    let (trace, next) = Minmax::new(Player::X, 1).choose_move(&board);

    let mv = |name| NodeLabel::Move(crate::position::Square::parse_square(name).unwrap());
    let expected = vec![
        TraceEntry::plain(NodeLabel::Root, 0, NEG_INFINITY),
        TraceEntry::plain(mv("A1"), 1, 1),
        TraceEntry::plain(NodeLabel::Root, 0, 1),
        TraceEntry::plain(mv("B1"), 1, 2),
        TraceEntry::plain(NodeLabel::Root, 0, 2),
        TraceEntry::plain(mv("A2"), 1, 3),
        TraceEntry::plain(NodeLabel::Root, 0, 3),
        TraceEntry::plain(mv("B2"), 1, 4),
        TraceEntry::plain(NodeLabel::Root, 0, 4),
    ];
    assert_eq!(trace, expected);

    let expected_board: Board<2> = board_from([[1; 2]; 2], ["**", "*X"]);
    assert_eq!(next, expected_board);
}

// Depth 2 on the [[1,2],[3,4]] board: the opponent always answers with
// the best remaining cell, so claiming B2 (min reply -3 weight, score 1)
// beats every alternative. Root values per branch: A1 -3, B1 -2, A2 -1,
// B2 1.
#[test]
fn minmax_finds_the_two_ply_line() {
    let board: Board<2> = board_from([[1, 2], [3, 4]], ["**", "**"]);
    let (trace, next) = Minmax::new(Player::X, 2).choose_move(&board);

    let expected_board: Board<2> = board_from([[1; 2]; 2], ["**", "*X"]);
    assert_eq!(next, expected_board);
    let last = trace.last().unwrap();
    assert_eq!(last.node, NodeLabel::Root);
    assert_eq!(last.value, 1);
}

#[test]
fn alpha_beta_agrees_on_the_two_ply_line() {
    let board: Board<2> = board_from([[1, 2], [3, 4]], ["**", "**"]);
    let (trace, next) = AlphaBeta::new(Player::X, 2).choose_move(&board);

    let expected_board: Board<2> = board_from([[1; 2]; 2], ["**", "*X"]);
    assert_eq!(next, expected_board);
    let last = trace.last().unwrap();
    assert_eq!(last.node, NodeLabel::Root);
    assert_eq!(last.value, 1);
}

#[test]
fn alpha_beta_prunes_dominated_branches() {
    // The first branch establishes alpha = 1; every later minimizing node
    // drops to or below it on its first child and is cut off
    let board: Board<2> = board_from([[4, 3], [2, 1]], ["**", "**"]);
    let (minmax_trace, minmax_choice) = Minmax::new(Player::X, 2).choose_move(&board);
    let (ab_trace, ab_choice) = AlphaBeta::new(Player::X, 2).choose_move(&board);

    assert_eq!(ab_choice, minmax_choice);
    let expected: Board<2> = board_from([[1; 2]; 2], ["X*", "**"]);
    assert_eq!(ab_choice, expected);
    assert!(ab_trace.len() < minmax_trace.len());
}

#[test]
fn trace_window_columns_test() {
    let board: Board<2> = board_from([[1, 2], [3, 4]], ["**", "**"]);
    let (minmax_trace, _) = Minmax::new(Player::X, 2).choose_move(&board);
    let (ab_trace, _) = AlphaBeta::new(Player::X, 2).choose_move(&board);
    assert!(minmax_trace.iter().all(|entry| entry.window.is_none()));
    assert!(ab_trace.iter().all(|entry| entry.window.is_some()));
}

#[test]
fn strategies_stand_pat_on_a_full_board() {
    let board: Board<2> = board_from([[1; 2]; 2], ["XO", "OX"]);
    let (_, greedy_choice) = Greedy::new(Player::X).choose_move(&board);
    let (minmax_trace, minmax_choice) = Minmax::new(Player::X, 2).choose_move(&board);
    let (_, ab_choice) = AlphaBeta::new(Player::X, 2).choose_move(&board);
    assert_eq!(greedy_choice, board);
    assert_eq!(minmax_choice, board);
    assert_eq!(ab_choice, board);
    // Only the initial root entry is logged when there is nothing to search
    assert_eq!(minmax_trace.len(), 1);
}

#[test]
fn minmax_and_alpha_beta_agree_on_random_boards() {
    let mut rng = SmallRng::seed_from_u64(64);
    let mut pruned_anything = false;
    for _ in 0..20 {
        let board: Board<5> = position_gen::random_board(&mut rng, 0.3);
        for player in [Player::X, Player::O] {
            for depth in 1..=3 {
                let (minmax_trace, minmax_choice) =
                    Minmax::new(player, depth).choose_move(&board);
                let (ab_trace, ab_choice) = AlphaBeta::new(player, depth).choose_move(&board);
                assert_eq!(
                    ab_choice, minmax_choice,
                    "strategies disagree at depth {} for {} on\n{:?}",
                    depth, player, board
                );
                assert_eq!(
                    ab_trace.last().unwrap().value,
                    minmax_trace.last().unwrap().value
                );
                assert!(ab_trace.len() <= minmax_trace.len());
                pruned_anything |= ab_trace.len() < minmax_trace.len();
            }
        }
    }
    assert!(pruned_anything);
}

#[test]
fn trace_log_format_test() {
    let board: Board<2> = board_from([[1, 2], [3, 4]], ["**", "**"]);

    let (minmax_trace, _) = Minmax::new(Player::X, 2).choose_move(&board);
    let mut output = Vec::new();
    trace_writer::write_trace_log(&mut output, &minmax_trace).unwrap();
    let text = String::from_utf8(output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Node,Depth,Value"));
    assert_eq!(lines.next(), Some("root,0,-Infinity"));

    let (ab_trace, _) = AlphaBeta::new(Player::X, 2).choose_move(&board);
    let mut output = Vec::new();
    trace_writer::write_trace_log(&mut output, &ab_trace).unwrap();
    let text = String::from_utf8(output).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Node,Depth,Value,Alpha,Beta"));
    assert_eq!(lines.next(), Some("root,0,-Infinity,-Infinity,Infinity"));
    assert!(text.lines().last().unwrap().starts_with("root,0,1,1,"));
}
