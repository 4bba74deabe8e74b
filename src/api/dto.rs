use serde::{Deserialize, Serialize};

use crate::domain::SlotIndex;
use crate::engine::Outcome;
use crate::playback::{Playback, PlaybackToken};

/// Что нарисовано на обороте карточки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardBackDto {
    /// Карточка ещё закрыта.
    Hidden,
    /// Открыта: слово этой карточки.
    Word(String),
    /// Последняя карточка законченного раунда – звезда вместо слова.
    CompletionStar,
}

/// DTO одной карточки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardViewDto {
    pub slot: SlotIndex,
    /// None – у записи нет картинки, фронт рисует заглушку.
    pub image: Option<String>,
    pub alt: String,
    pub revealed: bool,
    pub back: CardBackDto,
}

/// DTO всего поля.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardViewDto {
    pub round_index: u64,
    pub round_size: usize,
    pub progress: usize,
    pub complete: bool,
    /// Слово, которое нужно найти сейчас. None – раунд закончен.
    pub current_word: Option<String>,
    pub cards: Vec<CardViewDto>,
}

/// Счётчик «выучено слов».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressDto {
    pub progress: usize,
    pub round_size: usize,
    pub complete: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Клик обработан движком.
    Resolved {
        outcome: Outcome,
        playback: Playback,
        token: Option<PlaybackToken>,
    },

    /// Клик выброшен: ввод закрыт на время озвучки.
    Dropped { slot: SlotIndex },

    /// Проигрывание закончено; `released` = false для устаревшей квитанции.
    PlaybackFinished { released: bool },

    /// Начат новый раунд.
    RoundStarted { round_index: u64 },
}
