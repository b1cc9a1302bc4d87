mod frontend;
mod session_rng;

pub mod tictactoe;

pub use frontend::TicTacToeFrontend;
pub use session_rng::SessionRng;
