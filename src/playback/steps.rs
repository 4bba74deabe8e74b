// src/playback/steps.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::config::GameConfig;
use crate::domain::SlotIndex;
use crate::engine::turn::Outcome;

/// Звуки-сигналы и длительность тряски.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackCues {
    pub correct: String,
    pub wrong: String,
    pub shake: Duration,
}

impl PlaybackCues {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            correct: cfg.correct_cue.clone(),
            wrong: cfg.wrong_cue.clone(),
            shake: Duration::from_millis(cfg.shake_ms),
        }
    }
}

impl Default for PlaybackCues {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Один шаг проигрывания. Шаги выполняются строго по порядку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Короткий сигнал ("дзынь" / "бум").
    Cue { uri: String },
    /// Озвучка открытого слова.
    Pronounce { slot: SlotIndex, uri: String },
    /// Тряска карточки, снимается сама по таймеру.
    Shake { slot: SlotIndex, duration: Duration },
    /// Звезда на последней карточке.
    MarkCompletion { slot: SlotIndex },
}

/// Что проиграть в ответ на один клик.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playback {
    pub steps: Vec<PlaybackStep>,
    /// Сколько первых шагов играется при закрытом вводе.
    /// После них ввод открывается, остальные шаги идут параллельно с кликами.
    pub blocking_steps: usize,
}

impl Playback {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn blocks_input(&self) -> bool {
        self.blocking_steps > 0
    }

    /// Шаги, до конца которых ввод закрыт.
    pub fn blocking_prefix(&self) -> &[PlaybackStep] {
        &self.steps[..self.blocking_steps.min(self.steps.len())]
    }

    /// Шаги, которые не держат ввод (тряска после "бум").
    pub fn trailing_steps(&self) -> &[PlaybackStep] {
        &self.steps[self.blocking_steps.min(self.steps.len())..]
    }
}

/// Построить проигрывание для результата клика.
///
/// Accepted: сигнал, затем озвучка слова; ввод закрыт до конца.
/// Rejected: сигнал и тряска; ввод закрыт только на время сигнала.
/// Ignored: ничего.
pub fn plan_playback(outcome: &Outcome, cues: &PlaybackCues) -> Playback {
    match outcome {
        Outcome::Accepted(reveal) => {
            let mut steps = vec![
                PlaybackStep::Cue {
                    uri: cues.correct.clone(),
                },
                PlaybackStep::Pronounce {
                    slot: reveal.slot,
                    uri: reveal.audio.clone(),
                },
            ];
            if let Some(slot) = reveal.completion_slot {
                steps.push(PlaybackStep::MarkCompletion { slot });
            }
            Playback {
                blocking_steps: steps.len(),
                steps,
            }
        }
        Outcome::Rejected { slot } => Playback {
            steps: vec![
                PlaybackStep::Cue {
                    uri: cues.wrong.clone(),
                },
                PlaybackStep::Shake {
                    slot: *slot,
                    duration: cues.shake,
                },
            ],
            blocking_steps: 1,
        },
        Outcome::Ignored { .. } => Playback::default(),
    }
}
