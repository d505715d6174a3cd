//! Engine errors.

use rulebook_core::Square;

/// Errors returned by [`Engine`](crate::Engine) state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested move is not legal for the side to move.
    ///
    /// Covers an empty source square, an opposing piece, an unreachable
    /// destination, and a move that would leave the mover's king attacked.
    #[error("illegal move: {from}{to}")]
    IllegalMove {
        /// Source square of the rejected move.
        from: Square,
        /// Destination square of the rejected move.
        to: Square,
    },
}
