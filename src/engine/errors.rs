use crate::domain::SlotIndex;

use thiserror::Error;

/// Ошибки движка раунда.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Пул слов пуст – игру начать нельзя")]
    EmptyPool,

    #[error("В пуле {available} различных слов, а для раунда нужно {required}")]
    InsufficientPool { available: usize, required: usize },

    #[error("Недопустимый размер раунда: {0}")]
    InvalidRoundSize(usize),

    #[error("Карточки {slot} нет на поле из {round_size} карточек")]
    InvalidSlot { slot: SlotIndex, round_size: usize },

    #[error("Некорректный план раунда: {0}")]
    InvalidPlan(&'static str),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
