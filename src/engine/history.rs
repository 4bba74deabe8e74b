use serde::{Deserialize, Serialize};

use crate::domain::SlotIndex;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted {
        round_size: usize,
        first_target: SlotIndex,
    },

    /// Карточка найдена в правильном порядке и открыта.
    SlotAccepted { slot: SlotIndex, progress: usize },

    /// Выбрана не та карточка.
    SlotRejected {
        slot: SlotIndex,
        expected: SlotIndex,
    },

    /// Все карточки открыты.
    RoundCompleted { last_slot: SlotIndex },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
