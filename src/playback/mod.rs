//! Проигрывание звуков и анимаций по результатам кликов.
//!
//! Движок синхронный и про звук ничего не знает. Здесь:
//! - `plan_playback` – превратить `Outcome` в упорядоченные шаги;
//! - `run_playback` – выполнить шаги строго по очереди, открыв ввод после блокирующих;
//! - `InputGate` – не пускать новые клики, пока сигнал или озвучка не доиграли.

pub mod gate;
pub mod runner;
pub mod steps;

pub use gate::{InputGate, PlaybackToken};
pub use runner::{run_playback, AudioError, PlaybackReport, PlaybackSink};
pub use steps::{plan_playback, Playback, PlaybackCues, PlaybackStep};
