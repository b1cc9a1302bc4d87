use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotType, play_bot_move};
use super::types::{GameMode, Outcome, Player, Position};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_player: Player,
    pub status: Outcome,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_player: Player::X,
            status: Outcome::InProgress,
            last_move: None,
        }
    }

    /// X is always the human; O is the computer unless both sides are human.
    pub fn is_human_turn(&self) -> bool {
        self.mode == GameMode::TwoPlayer || self.current_player == Player::X
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.status != Outcome::InProgress {
            return Err("Game is already over".to_string());
        }

        if !position.is_in_bounds() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_legal_position(position) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(position, self.current_player);
        self.finish_turn(position);
        Ok(())
    }

    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Position, String> {
        if self.status != Outcome::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.is_human_turn() {
            return Err(format!("Player {} is not controlled by the computer", self.current_player));
        }

        let bot_type = BotType::for_mode(self.mode)
            .ok_or_else(|| format!("{} has no computer player", self.mode.title()))?;
        let position = play_bot_move(bot_type, &mut self.board, rng)
            .ok_or_else(|| "No moves left for the computer".to_string())?;

        self.finish_turn(position);
        Ok(position)
    }

    fn finish_turn(&mut self, position: Position) {
        log!("Player {} marked position {}", self.current_player, position.number());
        self.last_move = Some(position);
        self.status = self.board.outcome();

        if self.status == Outcome::InProgress {
            self.current_player = self.current_player.opponent();
        }
    }
}
