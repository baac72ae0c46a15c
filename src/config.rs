use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{
    ghost::DEFAULT_MIN_WORD_LEN,
    hand_game::{DEFAULT_HAND_SIZE, DEFAULT_VOWEL_FRACTION},
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub hand_size: usize,
    pub vowel_fraction: f64,
    pub ghost_min_word_len: usize,
    pub default_game: GameKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Which game the binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Ghost,
    Hand,
}

impl std::str::FromStr for GameKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ghost" => Ok(GameKind::Ghost),
            "hand" => Ok(GameKind::Hand),
            other => bail!("unknown game '{}', expected 'ghost' or 'hand'", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}', expected 'text' or 'json'", other),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, so defaults and parsing
    /// can be exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig {
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or_else(|| "./words.txt".to_string()),
            hand_size: lookup("HAND_SIZE")
                .unwrap_or_else(|| DEFAULT_HAND_SIZE.to_string())
                .parse()
                .context("HAND_SIZE must be a number")?,
            vowel_fraction: lookup("VOWEL_FRACTION")
                .map(|raw| raw.parse::<f64>())
                .transpose()
                .context("VOWEL_FRACTION must be a decimal number")?
                .unwrap_or(DEFAULT_VOWEL_FRACTION),
            ghost_min_word_len: lookup("GHOST_MIN_WORD_LEN")
                .unwrap_or_else(|| DEFAULT_MIN_WORD_LEN.to_string())
                .parse()
                .context("GHOST_MIN_WORD_LEN must be a number")?,
            default_game: lookup("DEFAULT_GAME")
                .unwrap_or_else(|| "hand".to_string())
                .parse()
                .context("DEFAULT_GAME must be 'ghost' or 'hand'")?,
        };

        if !(0.0..=1.0).contains(&game.vowel_fraction) {
            bail!("VOWEL_FRACTION must be between 0 and 1, got {}", game.vowel_fraction);
        }
        if game.ghost_min_word_len < DEFAULT_MIN_WORD_LEN {
            bail!(
                "GHOST_MIN_WORD_LEN must be at least {}, got {}",
                DEFAULT_MIN_WORD_LEN,
                game.ghost_min_word_len
            );
        }
        if game.hand_size == 0 {
            bail!("HAND_SIZE must be at least 1");
        }

        let output = OutputConfig {
            format: lookup("OUTPUT_FORMAT")
                .unwrap_or_else(|| "text".to_string())
                .parse()
                .context("OUTPUT_FORMAT must be 'text' or 'json'")?,
        };

        Ok(Config { game, output })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.game.dictionary_path, "./words.txt");
        assert_eq!(config.game.hand_size, 7);
        assert!((config.game.vowel_fraction - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(config.game.ghost_min_word_len, 4);
        assert_eq!(config.game.default_game, GameKind::Hand);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DICTIONARY_PATH", "/tmp/words.txt"),
            ("HAND_SIZE", "9"),
            ("VOWEL_FRACTION", "0.5"),
            ("DEFAULT_GAME", "Ghost"),
            ("OUTPUT_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.game.dictionary_path, "/tmp/words.txt");
        assert_eq!(config.game.hand_size, 9);
        assert_eq!(config.game.vowel_fraction, 0.5);
        assert_eq!(config.game.default_game, GameKind::Ghost);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(config_from(&[("HAND_SIZE", "seven")]).is_err());
        assert!(config_from(&[("HAND_SIZE", "0")]).is_err());
        assert!(config_from(&[("VOWEL_FRACTION", "1.5")]).is_err());
        assert!(config_from(&[("DEFAULT_GAME", "chess")]).is_err());
        assert!(config_from(&[("OUTPUT_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_ghost_word_length_floor() {
        assert!(config_from(&[("GHOST_MIN_WORD_LEN", "3")]).is_err());
        assert!(config_from(&[("GHOST_MIN_WORD_LEN", "0")]).is_err());

        let config = config_from(&[("GHOST_MIN_WORD_LEN", "5")]).unwrap();
        assert_eq!(config.game.ghost_min_word_len, 5);
    }
}
