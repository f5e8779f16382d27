//! Runtime configuration
//!
//! Defaults reproduce the standard single-player game. Environment variables
//! (optionally from a `.env` file) override them:
//! - `CABANA_GRID_WIDTH` / `CABANA_GRID_HEIGHT` - board size (default 42 x 24, at most 256 per side)
//! - `CABANA_TOTAL_TILES` - tiles dealt into the game (default 76)
//! - `CABANA_RACK_SIZE` - tiles in the starting rack (default 21)
//! - `CABANA_SPIN_POLICY` - `discard` or `reshuffle` (default discard)
//! - `CABANA_SEED` - fixed RNG seed for a reproducible game
//! - `CABANA_WORDLIST` - word list path (default `<data dir>/words.txt`)

use crate::game::tiles::{DEFAULT_RACK_SIZE, DEFAULT_TOTAL_TILES};
use crate::game::SpinPolicy;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_GRID_WIDTH: u16 = 42;
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

const MIN_GRID_SIDE: u16 = 2;
const MAX_GRID_SIDE: u16 = 256;

/// Settings for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub total_tiles: usize,
    pub rack_size: usize,
    pub spin_policy: SpinPolicy,
    pub seed: Option<u64>,
    pub wordlist_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            total_tiles: DEFAULT_TOTAL_TILES,
            rack_size: DEFAULT_RACK_SIZE,
            spin_policy: SpinPolicy::default(),
            seed: None,
            wordlist_path: None,
        }
    }
}

impl GameConfig {
    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CABANA_GRID_WIDTH") {
            config.grid_width = width;
        }
        if let Some(height) = read_env::<u16>("CABANA_GRID_HEIGHT") {
            config.grid_height = height;
        }
        if let Some(total) = read_env::<usize>("CABANA_TOTAL_TILES") {
            config.total_tiles = total;
        }
        if let Some(rack) = read_env::<usize>("CABANA_RACK_SIZE") {
            config.rack_size = rack;
        }
        if let Some(policy) = read_env::<SpinPolicy>("CABANA_SPIN_POLICY") {
            config.spin_policy = policy;
        }
        config.seed = read_env::<u64>("CABANA_SEED");
        config.wordlist_path = env::var_os("CABANA_WORDLIST").map(PathBuf::from);

        config.normalized()
    }

    /// Clamp values so that a game can always be dealt.
    pub fn normalized(mut self) -> Self {
        self.grid_width = self.grid_width.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE);
        self.grid_height = self.grid_height.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE);
        self.total_tiles = self.total_tiles.max(1);
        self.rack_size = self.rack_size.clamp(1, self.total_tiles);
        self
    }

    /// Word list to load: the configured path, else `words.txt` in the data dir.
    pub fn wordlist(&self) -> Option<PathBuf> {
        self.wordlist_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join("words.txt")))
    }
}

/// Directory for log files.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| env::temp_dir().join("cabana").join("logs"))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cabana")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    parse_setting(key, &raw)
}

/// Parse one setting; a value that does not parse is logged and ignored.
fn parse_setting<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = raw, "ignoring unparseable setting");
            None
        }
    }
}
