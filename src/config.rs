//! # Configuration
//!
//! Override order: defaults → config file → env vars → CLI flags.
//!
//! The file lives at `~/.twenty48/config.toml`. When it is missing a
//! commented-out default is written so the options are discoverable.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::MIN_SWIPE_DISTANCE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameSection {
    pub seed: Option<u64>,
    pub allow_continue: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputSection {
    pub swipe_threshold: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogSection {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "twenty48.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const SEED_ENV_VAR: &str = "TWENTY48_SEED";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means seed from entropy.
    pub seed: Option<u64>,
    pub allow_continue: bool,
    pub swipe_threshold: f32,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub no_continue: bool,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.twenty48/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".twenty48").join("config.toml"))
}

/// Load the config from `path`, or from the default location when `path` is `None`.
///
/// A missing default file is generated and defaults are returned. An explicit
/// path that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(GameConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(GameConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<GameConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# twenty48 configuration
# Every setting is optional.
# Override order: defaults -> this file -> env vars -> CLI flags.

# [game]
# seed = 2048              # Fixed RNG seed; or set TWENTY48_SEED
# allow_continue = true    # Keep sliding after reaching 2048

# [input]
# swipe_threshold = 30.0   # Minimum mouse drag, in approximate pixels

# [log]
# file = "twenty48.log"
# level = "info"           # off, error, warn, info, debug, trace
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → config file → env vars → CLI, reading the process environment.
pub fn resolve(config: &GameConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

pub fn resolve_with_env<F>(config: &GameConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Seed: CLI → env → config → entropy
    let seed = cli
        .seed
        .or_else(|| {
            env(SEED_ENV_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("Ignoring {}={:?}, not a u64", SEED_ENV_VAR, raw);
                    None
                }
            })
        })
        .or(config.game.seed);

    // Continue after win: --no-continue → config → allowed
    let allow_continue = !cli.no_continue && config.game.allow_continue.unwrap_or(true);

    let swipe_threshold = match config.input.swipe_threshold {
        Some(t) if t > 0.0 => t,
        Some(t) => {
            warn!("Ignoring non-positive swipe_threshold {}", t);
            MIN_SWIPE_DISTANCE
        }
        None => MIN_SWIPE_DISTANCE,
    };

    // Log level: CLI → config → default
    let log_level = cli
        .log_level
        .as_deref()
        .or(config.log.level.as_deref())
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .log
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        seed,
        allow_continue,
        swipe_threshold,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
            None
        }
    }
}
