//! Pawn move generation: pushes and diagonal captures.
//!
//! No en passant and no promotion. A pawn that reaches the last rank simply
//! has no forward moves.

use crate::attacks::tables::PAWN_CAPTURE_FILES;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Generate pseudo-legal pawn moves in push, double push, capture order.
pub(super) fn gen_pawn(board: &Board, from: Square, us: Color, list: &mut Vec<Square>) {
    let forward = us.pawn_direction();

    if let Some(single) = from.offset(0, forward)
        && !board.is_occupied(single)
    {
        list.push(single);

        if from.rank() == us.pawn_start_rank()
            && let Some(double) = single.offset(0, forward)
            && !board.is_occupied(double)
        {
            list.push(double);
        }
    }

    for df in PAWN_CAPTURE_FILES {
        let Some(dst) = from.offset(df, forward) else {
            continue;
        };
        if let Some(target) = board.piece_at(dst)
            && !target.is(us)
        {
            list.push(dst);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::pseudo_legal_moves;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn double_push_from_start_rank() {
        let board = Board::starting_position();
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2, Piece::WHITE_PAWN),
            vec![Square::E3, Square::E4]
        );
        assert_eq!(
            pseudo_legal_moves(&board, Square::D7, Piece::BLACK_PAWN),
            vec![Square::D6, Square::D5]
        );
    }

    #[test]
    fn no_double_push_off_start_rank() {
        let board: Board = "8/8/8/8/8/4P3/8/8".parse().unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::E3, Piece::WHITE_PAWN),
            vec![Square::E4]
        );
    }

    #[test]
    fn blocked_pawn() {
        // Blocker directly in front stops both pushes.
        let board: Board = "8/8/8/8/8/4n3/4P3/8".parse().unwrap();
        assert!(pseudo_legal_moves(&board, Square::E2, Piece::WHITE_PAWN).is_empty());

        // Blocker on the double-push square only stops the double push.
        let board: Board = "8/8/8/8/4n3/8/4P3/8".parse().unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2, Piece::WHITE_PAWN),
            vec![Square::E3]
        );
    }

    #[test]
    fn captures_only_enemies_diagonally() {
        // White pawn d4; black knight c5, white knight e5, black pawn d5 in front.
        let board: Board = "8/8/8/2npN3/3P4/8/8/8".parse().unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::D4, Piece::WHITE_PAWN),
            vec![Square::C5]
        );
    }

    #[test]
    fn black_pawn_captures_downward() {
        let board: Board = "8/8/8/8/3p4/2B1R3/8/8".parse().unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::D4, Piece::BLACK_PAWN),
            vec![Square::D3, Square::C3, Square::E3]
        );
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board: Board = "4P3/8/8/8/8/8/8/8".parse().unwrap();
        assert!(pseudo_legal_moves(&board, Square::E8, Piece::WHITE_PAWN).is_empty());
    }
}
