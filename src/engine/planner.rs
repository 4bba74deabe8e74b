// src/engine/planner.rs
//! Планировщик раунда: какие слова лягут на поле и в каком порядке
//! их нужно найти.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entry::Entry;
use crate::domain::{SlotIndex, MAX_ROUND_SIZE};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// План раунда. Неизменяем, живёт ровно один раунд.
///
/// - `assignment[slot]` – запись, лежащая в карточке `slot`;
/// - `target_sequence[k]` – какую карточку нужно найти k-й по счёту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundPlan {
    assignment: Vec<Entry>,
    target_sequence: Vec<SlotIndex>,
}

impl RoundPlan {
    /// Собрать план вручную (тесты, реплей).
    /// `target_sequence` обязан быть перестановкой `0..assignment.len()`.
    pub fn new(
        assignment: Vec<Entry>,
        target_sequence: Vec<SlotIndex>,
    ) -> Result<Self, EngineError> {
        let n = assignment.len();
        if n == 0 || n > MAX_ROUND_SIZE {
            return Err(EngineError::InvalidRoundSize(n));
        }
        if target_sequence.len() != n {
            return Err(EngineError::InvalidPlan(
                "длина target_sequence не совпадает с количеством карточек",
            ));
        }

        let mut seen = vec![false; n];
        for &slot in &target_sequence {
            let idx = slot as usize;
            if idx >= n {
                return Err(EngineError::InvalidPlan("target_sequence выходит за поле"));
            }
            if seen[idx] {
                return Err(EngineError::InvalidPlan("target_sequence содержит повтор"));
            }
            seen[idx] = true;
        }

        Ok(Self {
            assignment,
            target_sequence,
        })
    }

    pub fn round_size(&self) -> usize {
        self.assignment.len()
    }

    pub fn assignment(&self) -> &[Entry] {
        &self.assignment
    }

    pub fn target_sequence(&self) -> &[SlotIndex] {
        &self.target_sequence
    }

    /// Запись в карточке `slot`.
    pub fn entry(&self, slot: SlotIndex) -> Option<&Entry> {
        self.assignment.get(slot as usize)
    }

    /// Какую карточку нужно найти на шаге `step` (0-based).
    pub fn target_at(&self, step: usize) -> Option<SlotIndex> {
        self.target_sequence.get(step).copied()
    }

    /// Последняя карточка последовательности – на ней рисуется звезда.
    pub fn last_target(&self) -> Option<SlotIndex> {
        self.target_sequence.last().copied()
    }
}

/// Спланировать раунд из пула.
///
/// Пул сначала схлопывается по `word` (первое вхождение побеждает),
/// затем:
///   1) перемешиваем различные записи и берём первые `round_size` – раскладка по карточкам;
///   2) независимо перемешиваем `0..round_size` – порядок поиска.
///
/// Пул меньше `round_size` – ошибка, укороченных раундов нет.
pub fn plan_round<R: RandomSource>(
    pool: &[Entry],
    round_size: usize,
    rng: &mut R,
) -> Result<RoundPlan, EngineError> {
    if round_size == 0 || round_size > MAX_ROUND_SIZE {
        return Err(EngineError::InvalidRoundSize(round_size));
    }
    if pool.is_empty() {
        return Err(EngineError::EmptyPool);
    }

    let mut distinct = distinct_by_word(pool);
    let dropped_duplicates = pool.len() - distinct.len();

    if distinct.len() < round_size {
        return Err(EngineError::InsufficientPool {
            available: distinct.len(),
            required: round_size,
        });
    }

    rng.shuffle(&mut distinct);
    distinct.truncate(round_size);

    let mut target_sequence: Vec<SlotIndex> =
        (0..round_size).map(|i| i as SlotIndex).collect();
    rng.shuffle(&mut target_sequence);

    debug!(
        round_size,
        pool = pool.len(),
        dropped_duplicates,
        first_target = target_sequence[0],
        "раунд спланирован"
    );

    Ok(RoundPlan {
        assignment: distinct,
        target_sequence,
    })
}

fn distinct_by_word(pool: &[Entry]) -> Vec<Entry> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(pool.len());
    let mut distinct = Vec::with_capacity(pool.len());
    for entry in pool {
        if seen.insert(entry.word.as_str()) {
            distinct.push(entry.clone());
        }
    }
    distinct
}
