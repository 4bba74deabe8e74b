//! Доменная модель игры: записи со словами, пул, конфиг.

pub mod config;
pub mod entry;
pub mod pool;

/// Индекс карточки в сетке (0..round_size-1).
pub type SlotIndex = u8;

/// Стандартная сетка 4x4.
pub const DEFAULT_ROUND_SIZE: usize = 16;

/// Верхняя граница размера раунда (SlotIndex = u8 с запасом).
pub const MAX_ROUND_SIZE: usize = 64;

pub use config::*;
pub use entry::*;
pub use pool::*;
