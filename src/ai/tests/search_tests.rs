// Tests for the iterative deepening driver and the engine around it

use std::sync::mpsc::sync_channel;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{board, test_engine};
use crate::ai::engine::ChannelListener;
use crate::ai::score::MATE_SCORE;
use crate::ai::search::SearchResult;
use crate::game_repr::{GameResult, Position, Side};

#[test]
fn test_depth_one_from_start() {
    let mut engine = test_engine();
    let result = engine.run_search(&Position::new(), 1, None, 3);

    assert_eq!(result.depth, 1);
    assert_eq!(result.lines.len(), 3);
    for line in &result.lines {
        let first = line.moves[0];
        assert!(!first.is_capture());
        assert!(!first.reaches_last_rank());
        assert!(Position::new().is_legal(first));
    }
    assert!(result.nodes > 0);
}

#[test]
fn test_lines_sorted_best_first() {
    let mut engine = test_engine();
    let result = engine.run_search(&Position::new(), 3, None, 10);

    assert_eq!(result.lines.len(), 10);
    for pair in result.lines.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(result.score, result.lines[0].score);
}

#[test]
fn test_line_count_is_clamped() {
    let mut engine = test_engine();
    let result = engine.run_search(&Position::new(), 1, None, 0);
    assert_eq!(result.lines.len(), 1);

    let result = engine.run_search(&Position::new(), 1, None, 40);
    assert_eq!(result.lines.len(), 10);
}

#[test]
fn test_principal_variation_is_legal() {
    let mut engine = test_engine();
    let result = engine.run_search(&Position::new(), 4, None, 2);

    for line in &result.lines {
        let mut pos = Position::new();
        for &mv in &line.moves {
            assert!(pos.apply(mv), "illegal move {mv} in line");
        }
        assert!(line.moves.len() <= result.depth as usize + 1);
    }
}

#[test]
fn test_mate_in_one_found() {
    // Pawn a7, queen h2
    let pos = board(&[48], Some(15), Side::Pawns);
    let mut engine = test_engine();
    let result = engine.run_search(&pos, 1, None, 1);

    assert_eq!(result.score, MATE_SCORE - 1);
    assert_eq!(result.mate_in(), Some(1));
    assert!(result.is_mate());
    assert_eq!(result.best_move().map(|m| (m.from(), m.to())), Some((48, 56)));
}

#[test]
fn test_unstoppable_pawn_with_queen_to_move() {
    let pos = board(&[48], Some(15), Side::Queen);
    let mut engine = test_engine();
    let result = engine.run_search(&pos, 3, None, 1);

    // Reported from the pawns' side even though the queen is on move
    assert!(result.is_mate());
    assert!(result.score > 0);
    assert!(result.depth <= 3);
}

#[test]
fn test_faster_mate_scores_higher() {
    let mut engine = test_engine();
    let in_one = engine.run_search(&board(&[48], Some(15), Side::Pawns), 4, None, 1);
    engine.clear_search_memory();
    let in_three = engine.run_search(&board(&[40], Some(15), Side::Pawns), 4, None, 1);

    assert_eq!(in_one.score, MATE_SCORE - 1);
    assert_eq!(in_three.score, MATE_SCORE - 3);
    assert!(in_one.score > in_three.score);
    assert_eq!(in_three.mate_in(), Some(2));
}

#[test]
fn test_mate_exit_depth_is_honoured() {
    let pos = board(&[48], Some(15), Side::Pawns);

    let mut engine = test_engine();
    let result = engine.run_search(&pos, 6, None, 1);
    assert_eq!(result.depth, 6, "default exit depth is above 6");

    let mut config = engine.config().clone();
    config.mate_exit_depth = 2;
    engine.set_config(config);
    let result = engine.run_search(&pos, 6, None, 1);
    assert_eq!(result.depth, 2);
    assert!(result.is_mate());
}

#[test]
fn test_queen_wins_without_pawns() {
    let pos = board(&[], Some(27), Side::Pawns);
    let mut engine = test_engine();

    for depth in [1, 5, 20] {
        let result = engine.run_search(&pos, depth, None, 3);
        assert_eq!(result, SearchResult::default());
        assert_eq!(result.mate_in(), None);
    }
    assert_eq!(pos.result(), GameResult::QueenWins);
}

#[test]
fn test_stalemate_root() {
    let pos = board(&[28], Some(36), Side::Pawns);
    let result = test_engine().run_search(&pos, 4, None, 1);
    assert_eq!(result, SearchResult::default());
}

#[test]
fn test_deterministic_with_cleared_memory() {
    let mut engine = test_engine();
    let first = engine.run_search(&Position::new(), 4, None, 3);
    engine.clear_search_memory();
    let second = engine.run_search(&Position::new(), 4, None, 3);

    assert_eq!(first.best_move(), second.best_move());
    assert_eq!(first.score, second.score);
    assert_eq!(first.lines, second.lines);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_listener_sees_every_depth() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&depths);

    let mut engine = test_engine();
    engine.set_listener(move |result: &SearchResult| sink.lock().unwrap().push(result.depth));
    let result = engine.run_search(&Position::new(), 4, None, 1);

    assert_eq!(*depths.lock().unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(result.depth, 4);

    engine.clear_listener();
    engine.run_search(&Position::new(), 2, None, 1);
    assert_eq!(depths.lock().unwrap().len(), 4);
}

#[test]
fn test_channel_listener_drops_when_full() {
    let (tx, rx) = sync_channel(2);
    let mut engine = test_engine();
    engine.set_listener(ChannelListener(tx));
    engine.run_search(&Position::new(), 5, None, 1);

    let received: Vec<u8> = rx.try_iter().map(|r| r.depth).collect();
    assert_eq!(received, vec![1, 2]);
}

#[test]
fn test_time_budget_still_completes_depth_one() {
    let mut engine = test_engine();
    let result = engine.run_search(&Position::new(), 64, Some(Duration::ZERO), 1);
    assert_eq!(result.depth, 1);
    assert!(result.best_move().is_some());
}

#[test]
fn test_stop_before_search_cancels_it_once() {
    let mut engine = test_engine();
    let handle = engine.stop_handle();
    handle.request_stop();

    let cancelled = engine.run_search(&Position::new(), 40, None, 1);
    assert_eq!(cancelled, SearchResult::default());
    assert!(!handle.is_stop_requested());

    let next = engine.run_search(&Position::new(), 2, None, 1);
    assert_eq!(next.depth, 2);
}

#[test]
fn test_search_leaves_memory_until_cleared() {
    let mut engine = test_engine();
    engine.run_search(&Position::new(), 3, None, 1);
    assert!(engine.tt().size() > 0);
    engine.clear_search_memory();
    assert_eq!(engine.tt().size(), 0);
}
