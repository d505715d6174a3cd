//! The chess board: one optional piece per square.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Piece order along both back ranks, file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement for all 64 squares.
///
/// Every square has exactly one cell; an empty square is an explicit `None`.
/// The board does not know whose turn it is and enforces no king count.
/// Copies are fully independent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with every square empty.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put(Square::new(Rank::Rank1, file), Piece::new(kind, Color::White));
            board.put(Square::new(Rank::Rank2, file), Piece::WHITE_PAWN);
            board.put(Square::new(Rank::Rank7, file), Piece::BLACK_PAWN);
            board.put(Square::new(Rank::Rank8, file), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if any piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Overwrite the cell at `sq`.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set_piece(sq, Some(piece));
    }

    /// Empty `sq` and return what stood there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Move the occupant of `from` onto `to` and return the piece that was on `to`.
    ///
    /// No legality is checked here: the destination is overwritten whatever it
    /// holds, including a king. Validation belongs to the caller.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear(from);
        std::mem::replace(&mut self.cells[to.index()], moving)
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares and pieces of one side, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(color))
    }

    /// Check that each side has exactly one king.
    ///
    /// The rules code never calls this: a board without a king is simply never
    /// in check. Callers that want the stricter contract opt in here.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = board
                    .piece_at(Square::new(rank, file))
                    .map_or('.', Piece::fen_char);
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
