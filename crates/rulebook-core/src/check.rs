//! Check, checkmate, and stalemate detection.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::legal::legal_moves;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Outcome of the position for the side to move, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, at least one legal move.
    Ongoing,
    /// In check, at least one legal move.
    Check,
    /// In check, no legal move.
    Checkmate,
    /// Not in check, no legal move.
    Stalemate,
}

impl GameStatus {
    /// `true` for checkmate and stalemate.
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Board {
    /// Return the square of `color`'s king, scanning from a1.
    ///
    /// `None` when that side has no king on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find_map(|(sq, piece)| (piece == king).then_some(sq))
    }

    /// Return `true` if `color`'s king is attacked.
    ///
    /// A side without a king is never in check. Use [`Board::validate`] to
    /// reject such boards up front.
    pub fn in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, !color),
            None => false,
        }
    }

    /// Return `true` if `color` has at least one legal move.
    ///
    /// Stops at the first piece with a non-empty legal move list.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        Square::all().any(|from| {
            self.piece_at(from).is_some_and(|piece| piece.is(color))
                && !legal_moves(self, from, color).is_empty()
        })
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_moves(color)
    }

    /// Return `true` if `color` is not in check and has no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_moves(color)
    }

    /// Classify the position for `color`.
    pub fn status(&mut self, color: Color) -> GameStatus {
        match (self.in_check(color), self.has_legal_moves(color)) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }
}
