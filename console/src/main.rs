mod config;
mod console_frontend;
mod render;

use std::io;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, TicTacToeSession};
use common::{log, logger};
use config::{CONFIG_FILE, Config, get_config_manager};
use console_frontend::ConsoleFrontend;

const DEFAULT_LOG_PREFIX: &str = "TicTacToe";

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// Path of the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Start the first game in this mode instead of asking
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for the easy computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    no_clear: bool,

    /// Log game events to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Easy,
    Hard,
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Easy => GameMode::EasyAi,
            ModeArg::Hard => GameMode::HardAi,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(mode) = args.mode {
        config.default_mode = Some(mode.into());
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_clear {
        config.clear_screen = false;
    }
    if args.verbose {
        config.logging.enabled = true;
    }
    if args.use_log_prefix && config.logging.prefix.is_none() {
        config.logging.prefix = Some(DEFAULT_LOG_PREFIX.to_string());
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config_manager = get_config_manager(&args.config);
    let config = apply_args(config_manager.get_config()?, &args);
    logger::init_logger(config.logging.prefix.clone(), config.logging.enabled);
    log!("Using config file {}", args.config);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut frontend = ConsoleFrontend::new(io::stdin().lock(), io::stdout().lock(), config.clear_screen);
    frontend.write(&render::welcome_banner())?;

    let mut session = TicTacToeSession::new(frontend, rng).with_initial_mode(config.default_mode);
    let result = session.run();

    let mut frontend = session.into_frontend();
    frontend.write(&render::goodbye_banner())?;

    let outcomes = result?;
    log!("Played {} game(s)", outcomes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tictactoe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = parse(&[]);
        assert_eq!(args.config, CONFIG_FILE);
        assert_eq!(apply_args(Config::default(), &args), Config::default());
    }

    #[test]
    fn test_args_override_config() {
        let args = parse(&["--mode", "two-player", "--seed", "5", "--no-clear", "--verbose", "--use-log-prefix"]);
        let config = apply_args(Config::default(), &args);
        assert_eq!(config.default_mode, Some(GameMode::TwoPlayer));
        assert_eq!(config.seed, Some(5));
        assert!(!config.clear_screen);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.prefix.as_deref(), Some(DEFAULT_LOG_PREFIX));
    }

    #[test]
    fn test_configured_prefix_wins_over_default_prefix() {
        let mut config = Config::default();
        config.logging.prefix = Some("ttt".to_string());
        config.seed = Some(1);
        let config = apply_args(config, &parse(&["--use-log-prefix"]));
        assert_eq!(config.logging.prefix.as_deref(), Some("ttt"));
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe", "--mode", "impossible"]).is_err());
    }
}
