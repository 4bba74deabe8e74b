// src/domain/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DEFAULT_ROUND_SIZE, MAX_ROUND_SIZE};

/// Ошибки конфигурации игры.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Конфигурация игры.
/// Всё, что можно поменять без пересборки: размер сетки, звуки, тряска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько карточек в раунде (по умолчанию 16 = сетка 4x4).
    pub round_size: usize,

    /// Короткий звук "правильно" перед озвучкой слова.
    pub correct_cue: String,

    /// Звук "мимо".
    pub wrong_cue: String,

    /// Длительность анимации тряски после ошибки, мс.
    pub shake_ms: u64,

    /// Базовый seed. None – системный RNG, раунды не воспроизводимы.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_size: DEFAULT_ROUND_SIZE,
            correct_cue: "audio/ding.mp3".to_string(),
            wrong_cue: "audio/thud.mp3".to_string(),
            shake_ms: 500,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_size == 0 || self.round_size > MAX_ROUND_SIZE {
            return Err(ConfigError::Invalid(format!(
                "round_size = {} (допустимо 1..={MAX_ROUND_SIZE})",
                self.round_size
            )));
        }
        if self.shake_ms == 0 {
            return Err(ConfigError::Invalid("shake_ms = 0".into()));
        }
        Ok(())
    }

    /// Разобрать конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
