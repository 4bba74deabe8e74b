// src/session.rs
//! Игровая сессия: пул + конфиг + RNG + текущий раунд.
//!
//! Сессия – единственный владелец пары `RoundPlan + TurnState` (внутри `TurnEngine`).
//! «Сыграть ещё раз» заменяет раунд целиком вместе с замком ввода,
//! так что незавершённое проигрывание старого раунда не может ничего испортить в новом.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::config::GameConfig;
use crate::domain::entry::Entry;
use crate::domain::SlotIndex;
use crate::engine::{plan_round, EngineError, Outcome, RandomSource, TurnEngine};
use crate::playback::{plan_playback, InputGate, Playback, PlaybackCues, PlaybackToken};

/// Что произошло с кликом, пришедшим в сессию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Submission {
    /// Ввод закрыт: доигрывает сигнал или озвучка предыдущего клика. Клик выброшен.
    Dropped { slot: SlotIndex },

    /// Клик обработан движком.
    Resolved {
        outcome: Outcome,
        playback: Playback,
        /// Есть, если проигрывание блокирует ввод; вернуть через `finish_playback`
        /// после `playback.blocking_prefix()`.
        token: Option<PlaybackToken>,
    },
}

pub struct GameSession<R: RandomSource> {
    config: GameConfig,
    cues: PlaybackCues,
    pool: Vec<Entry>,
    rng: R,
    engine: TurnEngine,
    gate: InputGate,
    round_index: u64,
}

impl<R: RandomSource> GameSession<R> {
    /// Запустить сессию и спланировать первый раунд.
    ///
    /// Пустой или слишком маленький пул – фатальная ошибка, повторов нет.
    pub fn start(config: GameConfig, pool: Vec<Entry>, mut rng: R) -> Result<Self, EngineError> {
        let round_index = 0;
        rng.begin_round(round_index);
        let plan = plan_round(&pool, config.round_size, &mut rng)?;

        info!(
            round_size = config.round_size,
            pool = pool.len(),
            "сессия запущена"
        );

        Ok(Self {
            cues: PlaybackCues::from_config(&config),
            config,
            pool,
            rng,
            engine: TurnEngine::new(plan),
            gate: InputGate::new(round_index),
            round_index,
        })
    }

    /// «Сыграть ещё раз»: новый план, новое состояние, новая эпоха замка.
    pub fn play_again(&mut self) -> Result<(), EngineError> {
        let next = self.round_index + 1;
        self.rng.begin_round(next);
        let plan = plan_round(&self.pool, self.config.round_size, &mut self.rng)?;

        self.engine = TurnEngine::new(plan);
        self.gate.reset(next);
        self.round_index = next;

        info!(round_index = next, "новый раунд");
        Ok(())
    }

    /// Клик по карточке со стороны UI.
    pub fn submit(&mut self, slot: SlotIndex) -> Result<Submission, EngineError> {
        let round_size = self.engine.plan().round_size();
        if slot as usize >= round_size {
            return Err(EngineError::InvalidSlot { slot, round_size });
        }

        if !self.gate.is_open() {
            debug!(slot, "ввод закрыт, клик выброшен");
            return Ok(Submission::Dropped { slot });
        }

        let outcome = self.engine.select(slot)?;
        let playback = plan_playback(&outcome, &self.cues);
        let token = if playback.blocks_input() {
            self.gate.close()
        } else {
            None
        };

        Ok(Submission::Resolved {
            outcome,
            playback,
            token,
        })
    }

    /// Блокирующие шаги доиграли. false – квитанция устарела (был новый раунд).
    pub fn finish_playback(&mut self, token: PlaybackToken) -> bool {
        self.gate.release(token)
    }

    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cues(&self) -> &PlaybackCues {
        &self.cues
    }

    pub fn round_index(&self) -> u64 {
        self.round_index
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_input_open(&self) -> bool {
        self.gate.is_open()
    }
}
