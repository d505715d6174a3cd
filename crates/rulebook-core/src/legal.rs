//! Legal move filtering: pseudo-legal moves that keep the mover's king safe.
//!
//! Each candidate is tried on the board itself through a [`SimulatedMove`],
//! which puts both touched squares back when it is dropped. A legality query
//! therefore never leaves an observable change behind, on any exit path.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::piece::Piece;
use crate::square::Square;

/// A hypothetical move applied to a board, undone on drop.
pub(crate) struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    replaced: Option<Piece>,
}

impl<'a> SimulatedMove<'a> {
    /// Lift the occupant of `from` onto `to`, remembering both prior cells.
    pub(crate) fn apply(board: &'a mut Board, from: Square, to: Square) -> SimulatedMove<'a> {
        let moved = board.piece_at(from);
        let replaced = board.piece_at(to);
        board.set_piece(from, None);
        board.set_piece(to, moved);
        SimulatedMove {
            board,
            from,
            to,
            moved,
            replaced,
        }
    }

    /// The board as it stands with the move applied.
    pub(crate) fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set_piece(self.to, self.replaced);
        self.board.set_piece(self.from, self.moved);
    }
}

/// Return `true` if moving `from` → `to` leaves `side`'s king attacked.
///
/// The board is identical before and after the call.
pub fn would_leave_king_in_check(board: &mut Board, from: Square, to: Square, side: Color) -> bool {
    let simulated = SimulatedMove::apply(board, from, to);
    simulated.board().in_check(side)
}

/// Return the legal destinations of the piece on `from` for `side` to move.
///
/// Empty when `from` is empty, holds an opposing piece, or the piece has no
/// move that keeps its king out of check. Destinations keep generation order.
pub fn legal_moves(board: &mut Board, from: Square, side: Color) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    if !piece.is(side) {
        return Vec::new();
    }

    let mut candidates = pseudo_legal_moves(board, from, piece);
    candidates.retain(|&to| {
        let exposed = would_leave_king_in_check(board, from, to, side);
        if exposed {
            trace!(%from, %to, %side, "candidate leaves own king in check");
        }
        !exposed
    });
    candidates
}

/// Return `true` if `to` is among the legal destinations from `from`.
pub fn is_valid_move(board: &mut Board, from: Square, to: Square, side: Color) -> bool {
    legal_moves(board, from, side).contains(&to)
}

/// Return every legal `(from, to)` pair for `side`, sources in square order.
pub fn all_legal_moves(board: &mut Board, side: Color) -> Vec<(Square, Square)> {
    let sources: Vec<Square> = board.pieces_of(side).map(|(sq, _)| sq).collect();
    let mut moves = Vec::new();
    for from in sources {
        moves.extend(legal_moves(board, from, side).into_iter().map(|to| (from, to)));
    }
    moves
}
