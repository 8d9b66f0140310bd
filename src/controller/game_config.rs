//! Game setup options.

use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::utils::fen_parser::ParseMode;
use crate::utils::random_position::{random_start_placement, seeded_start_placement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Placement drawn by every new game.
    pub start_position: String,
    pub parse_mode: ParseMode,
    /// Print timestamped diagnostics to stderr.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_position: STARTING_POSITION_PLACEMENT.to_owned(),
            parse_mode: ParseMode::Strict,
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Default settings with a shuffled back-rank start position.
    pub fn with_random_start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            start_position: random_start_placement(rng),
            ..Self::default()
        }
    }

    /// Build a config from command-line flags (program name excluded):
    /// `--verbose`/`-v`, `--permissive`, `--random`, `--seed <n>`,
    /// `--position <placement>`.
    pub fn from_args<I>(args: I) -> Result<Self, ChessErrors>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--verbose" | "-v" => config.verbose = true,
                "--permissive" => config.parse_mode = ParseMode::Permissive,
                "--random" => {
                    config = Self {
                        verbose: config.verbose,
                        parse_mode: config.parse_mode,
                        ..Self::with_random_start(&mut rand::rng())
                    };
                }
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ChessErrors::InvalidArgument("--seed needs a value".to_owned()))?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ChessErrors::InvalidArgument(format!("bad seed: {value}")))?;
                    config.start_position = seeded_start_placement(seed);
                }
                "--position" => {
                    config.start_position = args.next().ok_or_else(|| {
                        ChessErrors::InvalidArgument("--position needs a placement".to_owned())
                    })?;
                }
                other => return Err(ChessErrors::InvalidArgument(other.to_owned())),
            }
        }

        Ok(config)
    }
}
