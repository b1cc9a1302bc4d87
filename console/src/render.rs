use std::fmt::Write;

use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Outcome};

const GRID_BORDER: &str = "     +---+---+---+\n";
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub fn welcome_banner() -> String {
    [
        "\n\n",
        "  ======================================\n",
        "  |                                    |\n",
        "  |     WELCOME TO TIC-TAC-TOE!        |\n",
        "  |                                    |\n",
        "  ======================================\n\n",
    ]
    .concat()
}

pub fn goodbye_banner() -> String {
    [
        "\n  ======================================\n",
        "  |   Thanks for playing! Goodbye!     |\n",
        "  ======================================\n\n",
    ]
    .concat()
}

pub fn title() -> String {
    [
        "\n",
        "========================================\n",
        "|                                      |\n",
        "|        TIC-TAC-TOE GAME              |\n",
        "|                                      |\n",
        "========================================\n\n",
    ]
    .concat()
}

pub fn mode_menu() -> String {
    [
        "  +-----------------------------------+\n",
        "  |      SELECT GAME MODE:            |\n",
        "  +-----------------------------------+\n",
        "  |  1. vs Computer (Easy)            |\n",
        "  |  2. vs Computer (Hard)            |\n",
        "  |  3. Two Player Mode               |\n",
        "  +-----------------------------------+\n\n",
    ]
    .concat()
}

fn grid(cell: impl Fn(usize, usize) -> String) -> String {
    let mut out = String::from(GRID_BORDER);
    for row in 0..BOARD_SIZE {
        out.push_str("     |");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {} |", cell(row, col));
        }
        out.push('\n');
        out.push_str(GRID_BORDER);
    }
    out
}

pub fn board(board: &Board) -> String {
    let rows = board.rows();
    grid(|row, col| match rows[row][col] {
        Mark::Empty => " ".to_string(),
        Mark::X => "X".to_string(),
        Mark::O => "O".to_string(),
    })
}

pub fn position_guide() -> String {
    grid(|row, col| (row * BOARD_SIZE + col + 1).to_string())
}

pub fn board_with_guide(current: &Board) -> String {
    format!("\n{}\n  Position Guide:\n{}\n", board(current), position_guide())
}

pub fn outcome_banner(outcome: Outcome) -> String {
    let message = match outcome {
        Outcome::XWon => "  |   *** Player X WINS! ***     |\n",
        Outcome::OWon => "  |   *** Player O WINS! ***     |\n",
        Outcome::Draw => "  |   *** It's a DRAW! ***       |\n",
        Outcome::InProgress => "  |   Game still in progress     |\n",
    };
    format!(
        "  ================================\n{}  ================================\n\n",
        message
    )
}
