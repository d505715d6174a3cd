//! Chess rules core: board representation, move legality, and check detection.
//!
//! No castling, en passant, or promotion. Moves are plain `(from, to)` square
//! pairs.

mod attacks;
mod board;
mod check;
mod color;
mod error;
mod fen;
mod file;
pub mod legal;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use board::{Board, PrettyBoard};
pub use check::GameStatus;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::{STARTING_FEN, parse_fen, to_fen};
pub use file::File;
pub use legal::{all_legal_moves, is_valid_move, legal_moves, would_leave_king_in_check};
pub use movegen::pseudo_legal_moves;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
