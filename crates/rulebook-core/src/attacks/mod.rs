//! Attack detection: which squares a side's pieces bear on.
//!
//! This is pure reachability. It never asks whether the attacker's own king
//! would be exposed, so check detection can be built on top of it without
//! recursing into the legal move filter.

pub(crate) mod tables;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Signed `(file, rank)` distance from `from` to `to`.
#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file().index() as i8 - from.file().index() as i8,
        to.rank().index() as i8 - from.rank().index() as i8,
    )
}

#[inline]
fn is_orthogonal(df: i8, dr: i8) -> bool {
    df == 0 || dr == 0
}

#[inline]
fn is_diagonal(df: i8, dr: i8) -> bool {
    df.abs() == dr.abs()
}

impl Board {
    /// Return `true` if any piece of `by` attacks `target`.
    ///
    /// Independent of whose turn it is. Scans the whole board, so O(64).
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, piece)| self.can_piece_attack_square(from, target, piece))
    }

    /// Return `true` if `piece` standing on `from` attacks `target`.
    ///
    /// Pawns attack diagonally forward only. Sliders need a clear path. When
    /// `from == target`, kings and sliders count as attacking their own square
    /// while pawns and knights do not.
    pub fn can_piece_attack_square(&self, from: Square, target: Square, piece: Piece) -> bool {
        let (df, dr) = deltas(from, target);
        match piece.kind() {
            PieceKind::Pawn => dr == piece.color().pawn_direction() && df.abs() == 1,
            PieceKind::Knight => {
                let (adf, adr) = (df.abs(), dr.abs());
                (adf == 1 && adr == 2) || (adf == 2 && adr == 1)
            }
            PieceKind::Bishop => is_diagonal(df, dr) && self.is_path_clear(from, target),
            PieceKind::Rook => is_orthogonal(df, dr) && self.is_path_clear(from, target),
            PieceKind::Queen => {
                (is_orthogonal(df, dr) || is_diagonal(df, dr)) && self.is_path_clear(from, target)
            }
            PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
        }
    }

    /// Return `true` if no square strictly between `from` and `to` is occupied.
    ///
    /// The two squares must share a rank, file, or diagonal; otherwise there is
    /// no path and the result is `false`. The endpoints themselves are not
    /// inspected.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (df, dr) = deltas(from, to);
        if !is_orthogonal(df, dr) && !is_diagonal(df, dr) {
            return false;
        }
        let (file_step, rank_step) = (df.signum(), dr.signum());

        let mut current = from;
        while current != to {
            current = match current.offset(file_step, rank_step) {
                Some(next) => next,
                None => return false,
            };
            if current != to && self.is_occupied(current) {
                return false;
            }
        }
        true
    }
}
