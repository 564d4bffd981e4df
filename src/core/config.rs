//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.voicechat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::recording::DEFAULT_TICK_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VoiceChatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub recording: RecordingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// "light" or "dark".
    pub theme: Option<String>,
    /// Header status text shown on startup.
    pub status_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RecordingConfig {
    pub tick_ms: Option<u64>,
    pub waveform_bars: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WAVEFORM_BARS: u16 = 40;
pub const DEFAULT_THEME: &str = "light";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub dark_mode: bool,
    pub status_message: Option<String>,
    pub tick_ms: u64,
    pub waveform_bars: u16,
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

/// Returns the path to `~/.voicechat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".voicechat").join("config.toml"))
}

/// Load config from `~/.voicechat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VoiceChatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VoiceChatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VoiceChatConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VoiceChatConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VoiceChatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# VoiceChat Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                  # "light" or "dark"; VOICECHAT_THEME env var overrides
# status_message = "Welcome to VoiceChat!"

# [recording]
# tick_ms = 100                    # recording ticker period; 10 ticks = 1 second
# waveform_bars = 40               # bars in the live waveform
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` is from the `--theme` flag (None = not specified).
pub fn resolve(config: &VoiceChatConfig, cli_theme: Option<&str>) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VOICECHAT_THEME").ok())
        .or_else(|| config.general.theme.clone())
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    ResolvedConfig {
        dark_mode: theme.eq_ignore_ascii_case("dark"),
        status_message: config.general.status_message.clone(),
        tick_ms: config.recording.tick_ms.unwrap_or(DEFAULT_TICK_MS),
        waveform_bars: config
            .recording
            .waveform_bars
            .unwrap_or(DEFAULT_WAVEFORM_BARS),
    }
}
