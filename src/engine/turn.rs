// src/engine/turn.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::domain::entry::Entry;
use crate::domain::SlotIndex;
use crate::engine::errors::EngineError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::planner::RoundPlan;

/// Изменяемое состояние раунда.
///
/// Инвариант: `revealed.len() == progress`, `progress <= round_size`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnState {
    progress: usize,
    revealed: BTreeSet<SlotIndex>,
    round_size: usize,
}

impl TurnState {
    pub fn new(round_size: usize) -> Self {
        Self {
            progress: 0,
            revealed: BTreeSet::new(),
            round_size,
        }
    }

    /// Сколько карточек уже найдено.
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn round_size(&self) -> usize {
        self.round_size
    }

    pub fn revealed(&self) -> &BTreeSet<SlotIndex> {
        &self.revealed
    }

    pub fn is_revealed(&self, slot: SlotIndex) -> bool {
        self.revealed.contains(&slot)
    }

    pub fn is_complete(&self) -> bool {
        self.progress == self.round_size
    }

    fn commit_reveal(&mut self, slot: SlotIndex) {
        self.revealed.insert(slot);
        self.progress += 1;
    }
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress { progress: usize },
    Complete,
}

/// Что показать и проиграть после правильного выбора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reveal {
    pub slot: SlotIndex,
    /// Слово на обороте открытой карточки – слово самой карточки.
    pub word: String,
    /// Озвучка этого слова.
    pub audio: String,
    /// Прогресс после открытия.
    pub progress: usize,
    pub round_complete: bool,
    /// Следующая карточка, которую нужно найти (None – раунд закончен).
    pub next_expected: Option<SlotIndex>,
    /// Карточка, на которой рисуется звезда (только когда раунд закончен).
    pub completion_slot: Option<SlotIndex>,
}

/// Результат одного клика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Reveal),
    Rejected { slot: SlotIndex },
    Ignored { slot: SlotIndex },
}

impl Outcome {
    pub fn slot(&self) -> SlotIndex {
        match self {
            Outcome::Accepted(reveal) => reveal.slot,
            Outcome::Rejected { slot } | Outcome::Ignored { slot } => *slot,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Движок одного раунда: фиксированный план + изменяемое состояние.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    plan: RoundPlan,
    state: TurnState,
    history: RoundHistory,
}

impl TurnEngine {
    pub fn new(plan: RoundPlan) -> Self {
        let state = TurnState::new(plan.round_size());
        let mut history = RoundHistory::new();
        if let Some(first_target) = plan.target_at(0) {
            history.push(RoundEventKind::RoundStarted {
                round_size: plan.round_size(),
                first_target,
            });
        }
        Self {
            plan,
            state,
            history,
        }
    }

    pub fn plan(&self) -> &RoundPlan {
        &self.plan
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn progress(&self) -> usize {
        self.state.progress
    }

    pub fn is_revealed(&self, slot: SlotIndex) -> bool {
        self.state.is_revealed(slot)
    }

    pub fn status(&self) -> RoundStatus {
        if self.state.is_complete() {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress {
                progress: self.state.progress,
            }
        }
    }

    /// Карточка, которую нужно найти сейчас.
    pub fn expected_slot(&self) -> Option<SlotIndex> {
        if self.state.is_complete() {
            return None;
        }
        self.plan.target_at(self.state.progress)
    }

    /// Запись, которую игрок ищет сейчас (слово над полем).
    pub fn current_target(&self) -> Option<&Entry> {
        self.expected_slot().and_then(|slot| self.plan.entry(slot))
    }

    /// Обработать выбор карточки.
    ///
    /// Либо полностью фиксирует открытие (`Accepted`), либо не меняет состояние.
    /// `Ignored` не оставляет следа даже в истории.
    /// Слот за пределами поля – нарушение контракта фронта, а не игровая ситуация.
    pub fn select(&mut self, slot: SlotIndex) -> Result<Outcome, EngineError> {
        let round_size = self.plan.round_size();
        if slot as usize >= round_size {
            return Err(EngineError::InvalidSlot { slot, round_size });
        }

        let expected = match self.expected_slot() {
            Some(expected) if !self.state.is_revealed(slot) => expected,
            _ => {
                trace!(slot, "клик проигнорирован");
                return Ok(Outcome::Ignored { slot });
            }
        };

        if slot != expected {
            debug!(slot, expected, progress = self.state.progress, "не та карточка");
            self.history
                .push(RoundEventKind::SlotRejected { slot, expected });
            return Ok(Outcome::Rejected { slot });
        }

        // Всё, что может упасть, – до мутации состояния.
        let entry = self
            .plan
            .entry(slot)
            .ok_or(EngineError::Internal("в плане нет записи для карточки"))?
            .clone();

        self.state.commit_reveal(slot);
        let progress = self.state.progress;
        let round_complete = self.state.is_complete();

        self.history
            .push(RoundEventKind::SlotAccepted { slot, progress });

        let (next_expected, completion_slot) = if round_complete {
            let last = self.plan.last_target();
            if let Some(last_slot) = last {
                self.history
                    .push(RoundEventKind::RoundCompleted { last_slot });
            }
            info!(round_size, "раунд завершён");
            (None, last)
        } else {
            (self.plan.target_at(progress), None)
        };

        debug!(slot, progress, word = %entry.word, "карточка открыта");

        Ok(Outcome::Accepted(Reveal {
            slot,
            word: entry.word,
            audio: entry.audio,
            progress,
            round_complete,
            next_expected,
            completion_slot,
        }))
    }
}
