use super::*;
use game_rules::{move_to_uci, BoardSnapshot, CozyRules, RulesError, Side};

const SCHOLARS_MATE: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
const STALEMATE: &str = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";
const MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";

#[test]
fn depth_zero_returns_static_eval() {
    let mut rules = CozyRules::startpos();
    let mut nodes = 0;
    assert_eq!(alpha_beta(&mut rules, 0, i32::MIN, i32::MAX, true, &mut nodes), 0);
    assert_eq!(alpha_beta(&mut rules, 0, i32::MIN, i32::MAX, false, &mut nodes), 0);
    assert_eq!(nodes, 0);
}

#[test]
fn checkmate_sign_follows_the_maximizing_flag() {
    let mut rules = CozyRules::from_fen(SCHOLARS_MATE).unwrap();
    let mut nodes = 0;

    // Mate is catastrophic for the side whose node this is, whichever
    // direction that node optimizes in.
    assert_eq!(
        alpha_beta(&mut rules, 0, i32::MIN, i32::MAX, true, &mut nodes),
        -MATE_SCORE
    );
    assert_eq!(
        alpha_beta(&mut rules, 0, i32::MIN, i32::MAX, false, &mut nodes),
        MATE_SCORE
    );
    // The position is terminal, so depth does not change the answer.
    assert_eq!(
        alpha_beta(&mut rules, 3, i32::MIN, i32::MAX, true, &mut nodes),
        -MATE_SCORE
    );
}

#[test]
fn stalemate_scores_zero_for_both_directions() {
    let mut rules = CozyRules::from_fen(STALEMATE).unwrap();
    let mut nodes = 0;
    assert_eq!(alpha_beta(&mut rules, 2, i32::MIN, i32::MAX, true, &mut nodes), DRAW_SCORE);
    assert_eq!(alpha_beta(&mut rules, 2, i32::MIN, i32::MAX, false, &mut nodes), DRAW_SCORE);
}

#[test]
fn sees_mate_in_one_at_depth_two() {
    let mut rules = CozyRules::from_fen(MATE_IN_ONE).unwrap();
    let mut nodes = 0;
    let score = alpha_beta(&mut rules, 2, i32::MIN, i32::MAX, true, &mut nodes);
    assert_eq!(score, MATE_SCORE);
    assert!(nodes > 0);
}

#[test]
fn search_leaves_the_position_untouched() {
    let mut rules = CozyRules::startpos();
    let before = rules.board();
    let mut nodes = 0;

    alpha_beta(&mut rules, 3, i32::MIN, i32::MAX, true, &mut nodes);

    assert_eq!(rules.applied_count(), 0);
    assert_eq!(rules.board(), before);
    assert_eq!(rules.side_to_move(), Side::White);
}

/// A rules engine that advertises a move and then refuses to play it.
struct LyingRules;

impl Rules for LyingRules {
    fn legal_moves(&self, _from: Option<u8>) -> Vec<CandidateMove> {
        vec![CandidateMove::new(8, 16)]
    }

    fn apply(&mut self, mv: &CandidateMove) -> Result<(), RulesError> {
        Err(RulesError::IllegalMove(move_to_uci(mv)))
    }

    fn undo(&mut self) {}

    fn side_to_move(&self) -> Side {
        Side::White
    }

    fn is_in_check(&self) -> bool {
        false
    }
    fn is_checkmate(&self) -> bool {
        false
    }
    fn is_stalemate(&self) -> bool {
        false
    }
    fn is_fifty_move_draw(&self) -> bool {
        false
    }
    fn is_threefold_repetition(&self) -> bool {
        false
    }
    fn is_insufficient_material(&self) -> bool {
        false
    }

    fn board(&self) -> BoardSnapshot {
        BoardSnapshot::empty()
    }
}

#[test]
#[should_panic(expected = "rejected a move it enumerated")]
fn rejected_enumerated_move_is_fatal() {
    let mut rules = LyingRules;
    let mut nodes = 0;
    alpha_beta(&mut rules, 1, i32::MIN, i32::MAX, true, &mut nodes);
}
