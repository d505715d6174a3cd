//! The [`Engine`]: current position plus side to move.
//!
//! Every query runs the legality pipeline on a scratch copy of the board, so
//! queries borrow the engine immutably. [`Engine::make_move`] is the only
//! writer and it validates before touching anything.

use tracing::{debug, warn};

use rulebook_core::{
    Board, Color, FenError, GameStatus, Square, all_legal_moves, legal_moves, parse_fen, perft,
    to_fen,
};

use crate::error::EngineError;

/// A game in progress: a board and the color whose turn it is.
///
/// Game over is never stored. Callers ask [`Engine::is_checkmate`] or
/// [`Engine::is_stalemate`] after each move; further moves are not refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    side_to_move: Color,
}

impl Engine {
    /// Create an engine at the standard starting position, White to move.
    pub fn new() -> Engine {
        Engine {
            board: Board::starting_position(),
            side_to_move: Color::White,
        }
    }

    /// Create an engine from an arbitrary position.
    ///
    /// The board is taken as-is. Call [`Board::validate`] first if positions
    /// without exactly one king per side should be refused.
    pub fn with_position(board: Board, side_to_move: Color) -> Engine {
        Engine {
            board,
            side_to_move,
        }
    }

    /// Create an engine from the placement and active color fields of a FEN string.
    pub fn from_fen(fen: &str) -> Result<Engine, FenError> {
        let (board, side_to_move) = parse_fen(fen)?;
        Ok(Engine::with_position(board, side_to_move))
    }

    /// Return to the starting position with White to move.
    pub fn reset(&mut self) {
        *self = Engine::new();
        debug!("engine reset to starting position");
    }

    /// Read access to the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An independent copy of the current board.
    #[inline]
    pub fn board_copy(&self) -> Board {
        self.board
    }

    /// The color whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The position as `"<placement> <w|b>"`.
    pub fn fen(&self) -> String {
        to_fen(&self.board, self.side_to_move)
    }

    /// Legal destinations of the piece on `from` for the side to move.
    ///
    /// Empty for an empty square, an opposing piece, or a piece with no legal move.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let mut scratch = self.board;
        legal_moves(&mut scratch, from, self.side_to_move)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        let mut scratch = self.board;
        all_legal_moves(&mut scratch, self.side_to_move)
    }

    /// Play `from` → `to` for the side to move, then pass the turn.
    ///
    /// Whatever stands on `to` is captured. On error nothing changes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), EngineError> {
        if !self.legal_moves(from).contains(&to) {
            warn!(%from, %to, side = %self.side_to_move, "rejected illegal move");
            return Err(EngineError::IllegalMove { from, to });
        }

        let captured = self.board.move_piece(from, to);
        debug!(%from, %to, side = %self.side_to_move, captured = ?captured, "move applied");
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.board.in_check(self.side_to_move)
    }

    /// Whether the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        let mut scratch = self.board;
        scratch.is_checkmate(self.side_to_move)
    }

    /// Whether the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        let mut scratch = self.board;
        scratch.is_stalemate(self.side_to_move)
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let mut scratch = self.board;
        scratch.status(self.side_to_move)
    }

    /// Whether any piece of `by` attacks `square`, regardless of whose turn it is.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.board.is_square_attacked(square, by)
    }

    /// Leaf count of the legal move tree `depth` plies from the current position.
    pub fn perft(&self, depth: usize) -> u64 {
        let mut scratch = self.board;
        perft::perft(&mut scratch, self.side_to_move, depth)
    }

    /// Per-move perft breakdown from the current position.
    pub fn divide(&self, depth: usize) -> Vec<(Square, Square, u64)> {
        let mut scratch = self.board;
        perft::divide(&mut scratch, self.side_to_move, depth)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
