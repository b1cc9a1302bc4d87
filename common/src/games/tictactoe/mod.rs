mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotType, calculate_minimax_move, calculate_move, play_bot_move};
pub use game_state::TicTacToeGameState;
pub use minimax::{COMPUTER, COMPUTER_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, best_move, evaluate};
pub use session::TicTacToeSession;
pub use types::{BOARD_SIZE, GameMode, Mark, Outcome, Player, Position};
pub use win_detector::{WINNING_LINES, check_win, winning_line};
