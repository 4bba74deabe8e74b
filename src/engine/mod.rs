//! Игровой движок: планирование раунда и разбор кликов.
//!
//! Высокоуровневый объект: `TurnEngine`
//! Основные операции:
//!   - `plan_round` – выбрать слова и порядок поиска на раунд
//!   - `TurnEngine::select` – обработать выбор карточки

pub mod errors;
pub mod history;
pub mod planner;
pub mod turn;

pub use errors::EngineError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use planner::{plan_round, RoundPlan};
pub use turn::{Outcome, Reveal, RoundStatus, TurnEngine, TurnState};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайное число из `0..upper`, `upper > 0`.
    fn index_below(&mut self, upper: usize) -> usize;

    /// Вызывается сессией перед планированием каждого раунда.
    /// Детерминированные реализации могут тут пересидироваться.
    fn begin_round(&mut self, _round_index: u64) {}

    /// Fisher–Yates от последнего индекса к первому.
    /// Реализации из infra заменяют его на `SliceRandom::shuffle` из `rand`;
    /// эта версия нужна источникам без `rand` (скриптованные RNG в тестах).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_below(i + 1);
            slice.swap(i, j);
        }
    }
}
