//! FEN position notation: piece placement and active color.
//!
//! Castling, en passant, and move counter fields are accepted by
//! [`parse_fen`] but carry no meaning for these rules and are dropped.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a board and the side to move.
///
/// Only the first two fields are required.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;
    let board = parse_placement(placement)?;

    let side_to_move = match fields.next() {
        Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
        None => return Err(FenError::MissingActiveColor),
    };

    Ok((board, side_to_move))
}

/// Format a board and side to move as `"<placement> <w|b>"`.
pub fn to_fen(board: &Board, side_to_move: Color) -> String {
    format!("{board} {}", side_to_move.fen_char())
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = Rank::ALL[7 - rank_index];
        let mut file_index: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                let length = file_index as usize + digit as usize;
                if length > 8 {
                    return Err(FenError::BadRankLength { rank_index, length });
                }
                file_index += digit as u8;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let file = File::from_index(file_index).ok_or(FenError::BadRankLength {
                rank_index,
                length: file_index as usize + 1,
            })?;
            board.put(Square::new(rank, file), piece);
            file_index += 1;
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index as usize,
            });
        }
    }

    Ok(board)
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse a bare FEN piece placement such as `"8/8/8/8/3N4/8/8/8"`.
    fn from_str(placement: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = placement.split_whitespace().collect();
        match fields.as_slice() {
            [] => Err(FenError::Empty),
            [single] => parse_placement(single),
            _ => Err(FenError::UnexpectedFields {
                found: fields.len(),
            }),
        }
    }
}

impl fmt::Display for Board {
    /// Write the FEN piece placement field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
