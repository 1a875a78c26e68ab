//! Configuration loading for chess-hotseat.

use chess_core::PieceKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `auto_promote` names a piece a pawn cannot become.
    #[error("auto_promote cannot be {0}")]
    InvalidPromotion(PieceKind),
}

/// Settings read from `hotseat.toml`. Every key is optional.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HotseatConfig {
    /// Reject moves by the player who is not on turn.
    pub enforce_turns: bool,
    /// Promote to this piece without asking.
    pub auto_promote: Option<PieceKind>,
    /// Draw pieces with chess glyphs instead of letters.
    pub unicode: bool,
    /// Print row and column numbers around the board.
    pub show_coordinates: bool,
    /// Default log level, overridden by `--log-level`.
    pub log_level: String,
}

impl Default for HotseatConfig {
    fn default() -> Self {
        HotseatConfig {
            enforce_turns: true,
            auto_promote: None,
            unicode: false,
            show_coordinates: true,
            log_level: "warn".to_string(),
        }
    }
}

impl HotseatConfig {
    /// Default config file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "hotseat.toml";

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses and validates the contents of a config file.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: HotseatConfig = toml::from_str(content)?;
        match config.auto_promote {
            Some(kind) if !kind.is_promotion_choice() => Err(ConfigError::InvalidPromotion(kind)),
            _ => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: HotseatConfig = toml::from_str("").unwrap();
        assert_eq!(config, HotseatConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let config: HotseatConfig = toml::from_str(
            r#"
            enforce_turns = false
            auto_promote = "queen"
            unicode = true
            show_coordinates = false
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert!(!config.enforce_turns);
        assert_eq!(config.auto_promote, Some(PieceKind::Queen));
        assert!(config.unicode);
        assert!(!config.show_coordinates);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_piece_kind() {
        let result: Result<HotseatConfig, _> = toml::from_str(r#"auto_promote = "dragon""#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_king_and_pawn_promotion() {
        for name in ["king", "pawn"] {
            let result = HotseatConfig::parse(&format!("auto_promote = \"{}\"", name));
            assert!(matches!(result, Err(ConfigError::InvalidPromotion(_))));
        }
        let config = HotseatConfig::parse(r#"auto_promote = "rook""#).unwrap();
        assert_eq!(config.auto_promote, Some(PieceKind::Rook));
    }

    #[test]
    fn load_validates_file_contents() {
        let path = std::env::temp_dir().join(format!("hotseat-{}.toml", std::process::id()));
        std::fs::write(&path, "auto_promote = \"king\"\n").unwrap();
        let result = HotseatConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::InvalidPromotion(PieceKind::King))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = HotseatConfig::load(Path::new("does/not/exist/hotseat.toml")).unwrap();
        assert_eq!(config, HotseatConfig::default());
    }
}
