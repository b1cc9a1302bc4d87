use crate::games::{SessionRng, TicTacToeFrontend};
use crate::log;
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, Outcome};

/// Runs games back to back until the players decline to play again.
pub struct TicTacToeSession<F: TicTacToeFrontend> {
    frontend: F,
    rng: SessionRng,
    initial_mode: Option<GameMode>,
}

impl<F: TicTacToeFrontend> TicTacToeSession<F> {
    pub fn new(frontend: F, rng: SessionRng) -> Self {
        Self {
            frontend,
            rng,
            initial_mode: None,
        }
    }

    /// Skips the mode prompt for the first game.
    pub fn with_initial_mode(mut self, mode: Option<GameMode>) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Returns the outcomes of all games played.
    pub fn run(&mut self) -> Result<Vec<Outcome>, String> {
        log!("Session started with seed {}", self.rng.seed());
        let mut outcomes = Vec::new();

        loop {
            let mode = match self.initial_mode.take() {
                Some(mode) => mode,
                None => self.frontend.request_game_mode()?,
            };
            outcomes.push(self.play_game(mode)?);

            if !self.frontend.request_play_again()? {
                break;
            }
        }

        log!("Session finished after {} game(s)", outcomes.len());
        Ok(outcomes)
    }

    pub fn play_game(&mut self, mode: GameMode) -> Result<Outcome, String> {
        log!("Starting game in {}", mode.title());
        let mut state = TicTacToeGameState::new(mode);
        self.frontend.announce_game_start(mode)?;

        while state.status == Outcome::InProgress {
            self.frontend.show_board(&state.board)?;

            if state.is_human_turn() {
                let position = self
                    .frontend
                    .request_human_move(&state.board, state.current_player)?;
                state.place_mark(position)?;
            } else {
                let position = state.play_bot_turn(&mut self.rng)?;
                self.frontend.report_computer_move(position)?;
            }
        }

        log!("Game over: {:?}", state.status);
        self.frontend.report_outcome(state.status, &state.board)?;
        Ok(state.status)
    }
}
