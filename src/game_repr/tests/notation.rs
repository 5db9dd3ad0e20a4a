use super::*;
use crate::error::{NotationError, PositionError};
use crate::game_repr::notation::{parse_move, parse_square, square_name};

const START_FEN: &str = "3q4/8/8/8/8/8/PPPPPPPP/8 w";

#[test]
fn test_square_names() {
    assert_eq!(square_name(0), "a1");
    assert_eq!(square_name(59), "d8");
    assert_eq!(square_name(63), "h8");
    assert_eq!(parse_square("e4").unwrap(), 28);
    assert_eq!(parse_square("H8").unwrap(), 63);
}

#[test]
fn test_bad_squares_are_rejected() {
    for text in ["", "e", "i1", "a9", "a0", "e44"] {
        assert!(
            matches!(parse_square(text), Err(NotationError::InvalidSquare(_))),
            "{text:?} should not parse"
        );
    }
}

#[test]
fn test_start_position_fen() {
    let pos = Position::from_fen(START_FEN).unwrap();
    assert_eq!(pos, Position::new());
    assert_eq!(pos.hash(), Position::new().hash());
    assert_eq!(Position::new().to_fen(), "3q4/8/8/8/8/8/PPPPPPPP/8 w - - 0 1");
}

#[test]
fn test_fen_side_and_counters() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/7q b - - 0 12").unwrap();
    assert_eq!(pos.side_to_move(), Side::Queen);
    assert!(pos.is_pawn_at(48));
    assert_eq!(pos.queen_square(), Some(7));

    let reparsed = Position::from_fen(&pos.to_fen()).unwrap();
    assert_eq!(reparsed, pos);
}

#[test]
fn test_fen_errors() {
    assert!(matches!(
        Position::from_fen("8/8/8 w"),
        Err(NotationError::InvalidBoard { .. })
    ));
    assert!(matches!(
        Position::from_fen("3k4/8/8/8/8/8/PPPPPPPP/8 w"),
        Err(NotationError::InvalidBoard { .. })
    ));
    assert!(matches!(
        Position::from_fen("3q4/8/8/8/8/8/PPPPPPPP/8 x"),
        Err(NotationError::InvalidSide(_))
    ));
    assert!(matches!(
        Position::from_fen("qq6/8/8/8/8/8/PPPPPPPP/8 w"),
        Err(NotationError::Position(PositionError::TooManyQueens { count: 2 }))
    ));
    assert!(matches!(
        Position::from_fen("3q4/8/8/8/8/P7/PPPPPPPP/8 w"),
        Err(NotationError::Position(PositionError::TooManyPawns { count: 9 }))
    ));
}

#[test]
fn test_parse_move_resolves_flag() {
    let pos = Position::new();
    let mv = parse_move(&pos, "e2e4").unwrap();
    assert!(mv.is_double_push());
    assert_eq!(mv.to_string(), "e2e4");

    assert!(matches!(parse_move(&pos, "e2e5"), Err(NotationError::IllegalMove(_))));
    assert!(matches!(parse_move(&pos, "e2"), Err(NotationError::InvalidMove(_))));
}

#[test]
fn test_set_position_rejects_overlap() {
    let mut pos = Position::new();
    let err = pos.set_position(1u64 << 10, 1u64 << 10, Side::Pawns).unwrap_err();
    assert_eq!(err, PositionError::Overlap { overlap: 1u64 << 10 });
    // Rejected layouts leave the old position in place
    assert_eq!(pos, Position::new());
}
