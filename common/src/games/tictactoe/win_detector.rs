use super::board::Board;
use super::types::{Player, Position};

const fn p(row: usize, col: usize) -> Position {
    Position { row, col }
}

pub const WINNING_LINES: [[Position; 3]; 8] = [
    // rows
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    // columns
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    // diagonals
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn check_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}
