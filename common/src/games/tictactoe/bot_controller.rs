use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::{COMPUTER, best_move};
use super::types::{BOARD_SIZE, GameMode, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

impl BotType {
    pub fn for_mode(mode: GameMode) -> Option<Self> {
        match mode {
            GameMode::EasyAi => Some(BotType::Random),
            GameMode::HardAi => Some(BotType::Minimax),
            GameMode::TwoPlayer => None,
        }
    }
}

/// Picks the computer's next cell without touching `board`.
pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => calculate_minimax_move(board),
    }
}

/// Picks the computer's next cell and puts its mark there.
pub fn play_bot_move(bot_type: BotType, board: &mut Board, rng: &mut SessionRng) -> Option<Position> {
    let position = calculate_move(bot_type, board, rng)?;
    board.place(position, COMPUTER);
    Some(position)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.is_legal(row, col) {
            return Some(Position::new(row, col));
        }
    }
}

pub fn calculate_minimax_move(board: &Board) -> Option<Position> {
    let mut board = *board;
    let (position, score) = best_move(&mut board)?;
    log!("Minimax picked position {} with score {}", position.number(), score);
    Some(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};
    use crate::games::tictactoe::types::{Outcome, Player};

    fn hard_move(board: &Board) -> Position {
        let mut rng = SessionRng::new(0);
        calculate_move(BotType::Minimax, board, &mut rng).unwrap()
    }

    #[test]
    fn test_bot_type_for_mode() {
        assert_eq!(BotType::for_mode(GameMode::EasyAi), Some(BotType::Random));
        assert_eq!(BotType::for_mode(GameMode::HardAi), Some(BotType::Minimax));
        assert_eq!(BotType::for_mode(GameMode::TwoPlayer), None);
    }

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::from_rows([[X, O, X], [E, O, X], [O, X, E]]);
        let mut rng = SessionRng::new(42);
        for _ in 0..100 {
            let position = calculate_move(BotType::Random, &board, &mut rng).unwrap();
            assert!(board.is_legal_position(position));
        }
    }

    #[test]
    fn test_random_move_reproducible_with_seed() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let mut first = SessionRng::new(1234);
        let mut second = SessionRng::new(1234);
        for _ in 0..20 {
            assert_eq!(
                calculate_move(BotType::Random, &board, &mut first),
                calculate_move(BotType::Random, &board, &mut second)
            );
        }
    }

    #[test]
    fn test_random_move_reaches_every_empty_cell() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let mut rng = SessionRng::new(9);
        let mut seen = [false; 10];
        for _ in 0..500 {
            let position = calculate_move(BotType::Random, &board, &mut rng).unwrap();
            seen[position.number()] = true;
        }
        assert!(!seen[1]);
        assert!(seen[2..].iter().all(|&s| s));
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        let mut rng = SessionRng::new(0);
        assert_eq!(calculate_move(BotType::Random, &board, &mut rng), None);
        assert_eq!(calculate_move(BotType::Minimax, &board, &mut rng), None);
    }

    #[test]
    fn test_hard_takes_immediate_win() {
        let board = Board::from_rows([[X, X, O], [X, X, E], [O, O, E]]);
        assert_eq!(hard_move(&board), Position::new(2, 2));
    }

    #[test]
    fn test_hard_blocks_threat() {
        let board = Board::from_rows([[E, E, E], [E, O, E], [X, X, E]]);
        assert_eq!(hard_move(&board), Position::new(2, 2));
    }

    #[test]
    fn test_hard_does_not_mutate_input() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let before = board;
        hard_move(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_bot_move_commits_mark() {
        let mut board = Board::from_rows([[X, X, O], [X, X, E], [O, O, E]]);
        let mut rng = SessionRng::new(0);
        let position = play_bot_move(BotType::Minimax, &mut board, &mut rng).unwrap();
        assert_eq!(position.number(), 9);
        assert_eq!(board.get(position), O);
        assert_eq!(board.outcome(), Outcome::OWon);
    }

    fn assert_hard_never_loses(board: &mut Board) -> usize {
        match board.outcome() {
            Outcome::XWon => panic!("hard bot lost:\n{:?}", board.rows()),
            Outcome::OWon | Outcome::Draw => return 1,
            Outcome::InProgress => {}
        }

        let mut games = 0;
        for x_move in board.available_moves() {
            let mut next = *board;
            next.place(x_move, Player::X);
            if next.outcome().is_over() {
                games += assert_hard_never_loses(&mut next);
                continue;
            }
            let o_move = hard_move(&next);
            next.place(o_move, Player::O);
            games += assert_hard_never_loses(&mut next);
        }
        games
    }

    #[test]
    fn test_hard_never_loses_against_any_x() {
        let games = assert_hard_never_loses(&mut Board::new());
        assert!(games > 0);
    }

    #[test]
    fn test_hard_never_loses_against_random_x() {
        let mut rng = SessionRng::new(2024);
        for _ in 0..200 {
            let mut board = Board::new();
            loop {
                let x_move = calculate_move(BotType::Random, &board, &mut rng).unwrap();
                board.place(x_move, Player::X);
                if board.outcome().is_over() {
                    break;
                }
                play_bot_move(BotType::Minimax, &mut board, &mut rng).unwrap();
                if board.outcome().is_over() {
                    break;
                }
            }
            assert_ne!(board.outcome(), Outcome::XWon);
        }
    }
}
