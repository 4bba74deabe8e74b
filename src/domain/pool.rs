// src/domain/pool.rs
//! Загрузка пула слов из внешнего JSON.
//!
//! Поддерживаются три формы файла:
//!   - массив записей: `[{...}, {...}]`
//!   - обёртка: `{ "words": [{...}, ...] }`
//!   - одна голая запись: `{ "word": ..., "image": ..., "audio": ... }`
//!
//! Всё приводится к `Vec<Entry>` здесь, до планировщика раундов.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entry::Entry;

/// Ошибки загрузки пула.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Не удалось прочитать файл пула {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON пула: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Пул слов пуст")]
    Empty,

    #[error("Запись #{index} не содержит слова")]
    BlankWord { index: usize },
}

/// Все допустимые формы входного JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum PoolShape {
    List(Vec<Entry>),
    Wrapped { words: Vec<Entry> },
    Single(Entry),
}

impl PoolShape {
    fn into_entries(self) -> Vec<Entry> {
        match self {
            PoolShape::List(entries) => entries,
            PoolShape::Wrapped { words } => words,
            PoolShape::Single(entry) => vec![entry],
        }
    }
}

/// Разобрать JSON-текст в пул записей.
pub fn parse_pool(json: &str) -> Result<Vec<Entry>, PoolError> {
    let shape: PoolShape = serde_json::from_str(json)?;
    let entries = shape.into_entries();

    if entries.is_empty() {
        return Err(PoolError::Empty);
    }

    if let Some(index) = entries.iter().position(|e| e.word.trim().is_empty()) {
        return Err(PoolError::BlankWord { index });
    }

    let without_image = entries.iter().filter(|e| !e.has_image()).count();
    if without_image > 0 {
        warn!(without_image, "в пуле есть записи без картинки");
    }

    debug!(entries = entries.len(), "пул слов загружен");
    Ok(entries)
}

/// Прочитать файл и разобрать пул.
pub fn load_pool(path: impl AsRef<Path>) -> Result<Vec<Entry>, PoolError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_pool(&text)
}
