use super::types::{BOARD_SIZE, Mark, Outcome, Player, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        self.cells[row][col] == Mark::Empty
    }

    pub fn is_legal_position(&self, position: Position) -> bool {
        self.is_legal(position.row, position.col)
    }

    /// Puts `player`'s mark on an empty cell. Callers must check legality first.
    pub fn place(&mut self, position: Position, player: Player) {
        debug_assert!(
            self.is_legal_position(position),
            "illegal placement at {:?}",
            position
        );
        self.cells[position.row][position.col] = player.mark();
    }

    pub(super) fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn outcome(&self) -> Outcome {
        if check_win(self, Player::X) {
            Outcome::XWon
        } else if check_win(self, Player::O) {
            Outcome::OWon
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}
