//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Walk each direction until the board edge or the first occupied square.
///
/// An enemy on the blocking square is a capture and ends the ray; a friendly
/// piece ends it without being added.
pub(super) fn gen_slides(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    list: &mut Vec<Square>,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(dst) = current.offset(df, dr) {
            match board.piece_at(dst) {
                None => list.push(dst),
                Some(occupant) => {
                    if !occupant.is(us) {
                        list.push(dst);
                    }
                    break;
                }
            }
            current = dst;
        }
    }
}
