use super::tictactoe::{Board, GameMode, Outcome, Player, Position};

/// The player-facing side of a game session.
///
/// Implementations own all input parsing and retry loops: positions returned
/// from [`TicTacToeFrontend::request_human_move`] must be legal on `board`.
/// Errors are reserved for I/O failures and end the session.
pub trait TicTacToeFrontend {
    fn request_game_mode(&mut self) -> Result<GameMode, String>;

    fn announce_game_start(&mut self, mode: GameMode) -> Result<(), String>;

    fn show_board(&mut self, board: &Board) -> Result<(), String>;

    fn request_human_move(&mut self, board: &Board, player: Player) -> Result<Position, String>;

    fn report_computer_move(&mut self, position: Position) -> Result<(), String>;

    fn report_outcome(&mut self, outcome: Outcome, board: &Board) -> Result<(), String>;

    fn request_play_again(&mut self) -> Result<bool, String>;
}
