//! Colored pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece kind together with its color, packed into one byte.
///
/// Bits 0-2 hold the [`PieceKind`], bit 3 the [`Color`]. Two pieces with the
/// same kind and color are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return `true` if this piece belongs to `color`.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        self.0 >> 3 == color as u8
    }

    /// Return the FEN letter, uppercase for White.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().fen_char().to_ascii_uppercase();
        write!(f, "{color_prefix}{kind_char}")
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn kind_and_color_survive_packing() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
                assert!(piece.is(color));
                assert!(!piece.is(!color));
            }
        }
    }

    #[test]
    fn equal_fields_are_interchangeable() {
        assert_eq!(Piece::new(PieceKind::Rook, Color::Black), Piece::BLACK_ROOK);
        assert_ne!(Piece::WHITE_ROOK, Piece::BLACK_ROOK);
    }

    #[test]
    fn from_fen_char_case_sensitivity() {
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_fen_char('n'), Some(Piece::BLACK_KNIGHT));
        assert_eq!(Piece::from_fen_char('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Piece::WHITE_PAWN), "P");
        assert_eq!(format!("{}", Piece::BLACK_KING), "k");
        assert_eq!(format!("{:?}", Piece::WHITE_BISHOP), "WB");
        assert_eq!(format!("{:?}", Piece::BLACK_QUEEN), "BQ");
    }
}
