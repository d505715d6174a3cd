//! Pseudo-legal move generation.
//!
//! Destinations follow movement and capture geometry only; whether the move
//! exposes the mover's own king is decided later by [`crate::legal`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slides;

/// Return every pseudo-legal destination for `piece` standing on `from`.
///
/// The board is only read. Offsets that leave the board are dropped.
pub fn pseudo_legal_moves(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let mut list = Vec::new();
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, color, &mut list),
        PieceKind::Knight => gen_knight(board, from, color, &mut list),
        PieceKind::Bishop => gen_slides(board, from, color, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Rook => gen_slides(board, from, color, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Queen => {
            gen_slides(board, from, color, &ROOK_DIRECTIONS, &mut list);
            gen_slides(board, from, color, &BISHOP_DIRECTIONS, &mut list);
        }
        PieceKind::King => gen_king(board, from, color, &mut list),
    }

    list
}

/// Push each on-board `deltas` target not held by a friendly piece.
fn gen_leaper(board: &Board, from: Square, us: Color, deltas: &[(i8, i8)], list: &mut Vec<Square>) {
    for &(df, dr) in deltas {
        let Some(dst) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(dst) {
            Some(occupant) if occupant.is(us) => {}
            _ => list.push(dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test]
    fn starting_position_piece_counts() {
        let board = Board::starting_position();
        let total: usize = board
            .pieces()
            .map(|(sq, piece)| pseudo_legal_moves(&board, sq, piece).len())
            .sum();
        // 16 pawn pushes and 4 knight jumps per side.
        assert_eq!(total, 40);
    }

    #[test]
    fn lone_queen_in_the_center() {
        let mut board = Board::empty();
        board.put(Square::D4, Piece::WHITE_QUEEN);
        assert_eq!(pseudo_legal_moves(&board, Square::D4, Piece::WHITE_QUEEN).len(), 27);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = "4k3/1p6/8/3Q1P2/8/1n6/8/4K3".parse().unwrap();
        let queen = pseudo_legal_moves(&board, Square::D5, Piece::WHITE_QUEEN);
        let mut combined = pseudo_legal_moves(&board, Square::D5, Piece::WHITE_ROOK);
        combined.extend(pseudo_legal_moves(&board, Square::D5, Piece::WHITE_BISHOP));
        assert_eq!(sorted(queen), sorted(combined));
    }

    #[test]
    fn corner_king_is_clipped() {
        let mut board = Board::empty();
        board.put(Square::A1, Piece::WHITE_KING);
        assert_eq!(
            sorted(pseudo_legal_moves(&board, Square::A1, Piece::WHITE_KING)),
            vec![Square::B1, Square::A2, Square::B2]
        );
    }
}
