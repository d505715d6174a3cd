//! Movement offsets shared by move generation and attack detection.
//!
//! Every entry is a `(file_delta, rank_delta)` pair.

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-1, -2), (1, -2), (-2, -1), (2, -1),
    (-2, 1),  (2, 1),  (-1, 2),  (1, 2),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// File deltas of the two pawn captures, lower file first.
pub(crate) const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];
