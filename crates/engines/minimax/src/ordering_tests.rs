use super::*;
use game_rules::PieceKind;

fn capture(from: u8, victim: PieceKind) -> CandidateMove {
    let mut mv = CandidateMove::new(from, from + 8);
    mv.captured = Some(victim);
    mv
}

fn quiet(from: u8) -> CandidateMove {
    CandidateMove::new(from, from + 8)
}

#[test]
fn captures_come_before_quiet_moves() {
    let mut moves = vec![quiet(0), capture(1, PieceKind::Pawn), quiet(2)];
    order_captures_first(&mut moves);
    assert!(moves[0].is_capture());
    assert!(!moves[1].is_capture());
    assert!(!moves[2].is_capture());
}

#[test]
fn bigger_victims_come_first() {
    let mut moves = vec![
        capture(0, PieceKind::Pawn),
        capture(1, PieceKind::Queen),
        capture(2, PieceKind::Knight),
        capture(3, PieceKind::Rook),
    ];
    order_captures_first(&mut moves);
    let victims: Vec<_> = moves.iter().map(|m| m.captured.unwrap()).collect();
    assert_eq!(
        victims,
        vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Pawn
        ]
    );
}

#[test]
fn ordering_is_stable_within_ties() {
    let mut moves = vec![
        quiet(10),
        capture(0, PieceKind::Pawn),
        quiet(11),
        capture(1, PieceKind::Pawn),
        quiet(12),
    ];
    order_captures_first(&mut moves);

    // Equal-value captures keep enumeration order, as do the quiet moves.
    assert_eq!(moves[0].from, 0);
    assert_eq!(moves[1].from, 1);
    assert_eq!(moves[2].from, 10);
    assert_eq!(moves[3].from, 11);
    assert_eq!(moves[4].from, 12);
}

#[test]
fn no_moves_are_dropped() {
    let mut moves = vec![quiet(0), capture(1, PieceKind::Bishop), quiet(2)];
    order_captures_first(&mut moves);
    assert_eq!(moves.len(), 3);
}
