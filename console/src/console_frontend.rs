use std::io::{BufRead, Write};

use common::games::TicTacToeFrontend;
use common::games::tictactoe::{Board, GameMode, Outcome, Player, Position};
use common::log;

use crate::render;

/// Plays through a terminal: prompts on `output`, reads answers line by line
/// from `input`.
pub struct ConsoleFrontend<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write to terminal: {}", e))
    }

    fn show_title(&mut self) -> Result<(), String> {
        if self.clear_screen {
            self.write(render::CLEAR_SCREEN)?;
        }
        self.write(&render::title())
    }

    /// Next non-blank line, trimmed.
    fn read_answer(&mut self) -> Result<String, String> {
        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                return Err("Input closed".to_string());
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }
}

fn parse_mode(answer: &str) -> Option<GameMode> {
    match answer.parse::<i64>().ok()? {
        1 => Some(GameMode::EasyAi),
        2 => Some(GameMode::HardAi),
        3 => Some(GameMode::TwoPlayer),
        _ => None,
    }
}

impl<R: BufRead, W: Write> TicTacToeFrontend for ConsoleFrontend<R, W> {
    fn request_game_mode(&mut self) -> Result<GameMode, String> {
        self.show_title()?;
        self.write(&render::mode_menu())?;
        self.write("  Enter your choice (1-3): ")?;

        loop {
            let answer = self.read_answer()?;
            if let Some(mode) = parse_mode(&answer) {
                log!("Mode selected: {}", mode.title());
                return Ok(mode);
            }
            self.write("  [X] Invalid choice! Enter 1, 2, or 3: ")?;
        }
    }

    fn announce_game_start(&mut self, mode: GameMode) -> Result<(), String> {
        self.show_title()?;
        self.write(&format!("  Game Mode: {}\n  Player X starts!\n", mode.title()))
    }

    fn show_board(&mut self, board: &Board) -> Result<(), String> {
        self.write(&render::board_with_guide(board))
    }

    fn request_human_move(&mut self, board: &Board, player: Player) -> Result<Position, String> {
        loop {
            self.write(&format!("  Player {}, enter position (1-9): ", player))?;
            let answer = self.read_answer()?;

            let Ok(number) = answer.parse::<i64>() else {
                self.write("  [X] Invalid input! Please enter a number.\n")?;
                continue;
            };

            let Some(position) = usize::try_from(number).ok().and_then(Position::from_number) else {
                self.write("  [X] Invalid position! Choose 1-9.\n")?;
                continue;
            };

            if board.is_legal_position(position) {
                return Ok(position);
            }
            self.write("  [X] Position already taken! Choose another.\n")?;
        }
    }

    fn report_computer_move(&mut self, position: Position) -> Result<(), String> {
        self.write(&format!("  Computer plays at position {}\n", position.number()))
    }

    fn report_outcome(&mut self, outcome: Outcome, board: &Board) -> Result<(), String> {
        self.show_title()?;
        self.write(&render::board_with_guide(board))?;
        self.write(&render::outcome_banner(outcome))
    }

    fn request_play_again(&mut self) -> Result<bool, String> {
        self.write("  Play again? (y/n): ")?;
        let answer = self.read_answer()?;
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }
}
