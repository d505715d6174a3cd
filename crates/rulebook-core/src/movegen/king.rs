//! King move generation. There is no castling.

use crate::attacks::tables::KING_DELTAS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::gen_leaper;

/// Generate pseudo-legal king steps.
///
/// Attacked destinations are still produced; the legal filter removes them.
pub(super) fn gen_king(board: &Board, from: Square, us: Color, list: &mut Vec<Square>) {
    gen_leaper(board, from, us, &KING_DELTAS, list);
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::pseudo_legal_moves;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn king_steps_include_attacked_squares() {
        let board: Board = "4k3/8/8/8/8/8/8/r3K3".parse().unwrap();
        let moves = pseudo_legal_moves(&board, Square::E1, Piece::WHITE_KING);
        // d1 and f1 are swept by the a1 rook but still pseudo-legal.
        assert!(moves.contains(&Square::D1));
        assert!(moves.contains(&Square::F1));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn no_castling_destinations() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let moves = pseudo_legal_moves(&board, Square::E1, Piece::WHITE_KING);
        assert!(!moves.contains(&Square::G1));
        assert!(!moves.contains(&Square::C1));
    }
}
