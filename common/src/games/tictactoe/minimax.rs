use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Player, Position};
use super::win_detector::check_win;

/// The side the search maximizes for.
pub const COMPUTER: Player = Player::O;

pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const HUMAN_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// A mark placed for the duration of a search branch.
///
/// The cell is cleared again when the guard is dropped, so the board is
/// restored on every exit path out of the branch.
pub(super) struct TrialMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TrialMove<'a> {
    pub(super) fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        board.place(position, player);
        Self { board, position }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Scores `board` by exhaustive search with both sides playing perfectly.
///
/// `maximizing_turn` is true when the computer moves next. The result is
/// [`COMPUTER_WIN_SCORE`], [`HUMAN_WIN_SCORE`] or [`DRAW_SCORE`]; how many
/// moves a win takes does not affect its score.
pub fn evaluate(board: &mut Board, maximizing_turn: bool) -> i32 {
    if check_win(board, COMPUTER) {
        return COMPUTER_WIN_SCORE;
    }
    if check_win(board, COMPUTER.opponent()) {
        return HUMAN_WIN_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if maximizing_turn {
        let mut best_score = i32::MIN;
        for position in board.available_moves() {
            let mut trial = TrialMove::place(board, position, COMPUTER);
            let score = evaluate(&mut trial, false);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for position in board.available_moves() {
            let mut trial = TrialMove::place(board, position, COMPUTER.opponent());
            let score = evaluate(&mut trial, true);
            best_score = best_score.min(score);
        }
        best_score
    }
}

/// Returns the computer's best cell and its score, preferring the first cell
/// in row-major order among equal scores.
pub fn best_move(board: &mut Board) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;

    for position in board.available_moves() {
        let mut trial = TrialMove::place(board, position, COMPUTER);
        let score = evaluate(&mut trial, false);
        drop(trial);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        assert_eq!(evaluate(&mut board, true), DRAW_SCORE);
        assert_eq!(evaluate(&mut board, false), DRAW_SCORE);
    }

    #[test]
    fn test_terminal_boards() {
        let mut board = Board::from_rows([[O, O, O], [X, X, E], [X, E, E]]);
        assert_eq!(evaluate(&mut board, false), COMPUTER_WIN_SCORE);

        let mut board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate(&mut board, true), HUMAN_WIN_SCORE);

        let mut board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(evaluate(&mut board, true), DRAW_SCORE);
    }

    #[test]
    fn test_evaluate_leaves_board_unchanged() {
        let boards = [
            Board::new(),
            Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]),
            Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]),
            Board::from_rows([[X, X, O], [X, X, E], [O, O, E]]),
        ];
        for original in boards {
            let mut board = original;
            let first = evaluate(&mut board, true);
            assert_eq!(board, original);
            let second = evaluate(&mut board, true);
            assert_eq!(board, original);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_forced_loss_is_scored_as_loss() {
        // X holds two open lines through the corner; O can only block one.
        let mut board = Board::from_rows([[X, E, O], [E, O, E], [X, E, X]]);
        assert_eq!(evaluate(&mut board, true), HUMAN_WIN_SCORE);
    }

    #[test]
    fn test_trial_move_restores_cell_on_drop() {
        let mut board = Board::new();
        let position = Position::new(1, 2);
        {
            let trial = TrialMove::place(&mut board, position, Player::O);
            assert_eq!(trial.get(position), O);
        }
        assert_eq!(board.get(position), E);
    }

    #[test]
    fn test_best_move_takes_only_winning_cell() {
        let mut board = Board::from_rows([[X, X, O], [X, X, E], [O, O, E]]);
        let (position, score) = best_move(&mut board).unwrap();
        assert_eq!(position, Position::new(2, 2));
        assert_eq!(score, COMPUTER_WIN_SCORE);
    }

    #[test]
    fn test_best_move_on_full_board() {
        let mut board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(best_move(&mut board), None);
    }
}
