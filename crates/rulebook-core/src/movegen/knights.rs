//! Knight move generation.

use crate::attacks::tables::KNIGHT_DELTAS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::gen_leaper;

/// Generate pseudo-legal knight moves.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut Vec<Square>) {
    gen_leaper(board, from, us, &KNIGHT_DELTAS, list);
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::pseudo_legal_moves;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn edge_knight_is_clipped() {
        let mut board = Board::empty();
        board.put(Square::A1, Piece::BLACK_KNIGHT);
        let mut moves = pseudo_legal_moves(&board, Square::A1, Piece::BLACK_KNIGHT);
        moves.sort();
        assert_eq!(moves, vec![Square::C2, Square::B3]);
    }

    #[test]
    fn friendly_squares_are_skipped_enemy_squares_kept() {
        let board = Board::starting_position();
        let mut moves = pseudo_legal_moves(&board, Square::G1, Piece::WHITE_KNIGHT);
        moves.sort();
        // e2 holds a white pawn.
        assert_eq!(moves, vec![Square::F3, Square::H3]);

        let mut board = Board::empty();
        board.put(Square::D4, Piece::WHITE_KNIGHT);
        board.put(Square::E6, Piece::BLACK_ROOK);
        board.put(Square::C6, Piece::WHITE_PAWN);
        let moves = pseudo_legal_moves(&board, Square::D4, Piece::WHITE_KNIGHT);
        assert!(moves.contains(&Square::E6));
        assert!(!moves.contains(&Square::C6));
        assert_eq!(moves.len(), 7);
    }
}
