//! Perft (performance test) node counting for rules verification.

use crate::board::Board;
use crate::color::Color;
use crate::legal::all_legal_moves;
use crate::square::Square;

/// Count the leaf nodes of the legal move tree `depth` plies deep.
///
/// Depth 0 returns 1. Children are built by copy-make, so `board` comes back
/// unchanged.
pub fn perft(board: &mut Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        let mut child = *board;
        child.move_piece(from, to);
        nodes += perft(&mut child, !side, depth - 1);
    }
    nodes
}

/// Run perft with a per-move breakdown, in generation order.
pub fn divide(board: &mut Board, side: Color, depth: usize) -> Vec<(Square, Square, u64)> {
    all_legal_moves(board, side)
        .into_iter()
        .map(|(from, to)| {
            let mut child = *board;
            child.move_piece(from, to);
            let count = if depth <= 1 {
                1
            } else {
                perft(&mut child, !side, depth - 1)
            };
            (from, to, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    // None of castling, en passant or promotion can occur within four plies of
    // the start, so the standard reference counts apply.

    #[test]
    fn perft_depth_0() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 4), 197_281);
    }

    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1
    // No en passant is available until the third ply.

    fn position3() -> Board {
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8".parse().unwrap()
    }

    #[test]
    fn perft_pos3_depth_1() {
        assert_eq!(perft(&mut position3(), Color::White, 1), 14);
    }

    #[test]
    fn perft_pos3_depth_2() {
        assert_eq!(perft(&mut position3(), Color::White, 2), 191);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let mut board = Board::starting_position();
        let results = divide(&mut board, Color::White, 1);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|&(_, _, count)| count == 1));
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let total: u64 = divide(&mut board, Color::White, 2)
            .iter()
            .map(|&(_, _, count)| count)
            .sum();
        assert_eq!(total, 400);
        assert_eq!(board, Board::starting_position());
    }
}
