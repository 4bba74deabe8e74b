use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::domain::SlotIndex;

use super::{Playback, PlaybackStep};

/// Ошибки воспроизведения медиа.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Файл {0} не найден")]
    NotFound(String),

    #[error("Не удалось проиграть {uri}: {reason}")]
    Failed { uri: String, reason: String },
}

/// Куда отправлять шаги: браузерное аудио, консоль, тестовый рекордер.
///
/// `play` обязан вернуться только когда звук доиграл (или упал).
pub trait PlaybackSink {
    fn play(&mut self, uri: &str) -> Result<(), AudioError>;

    fn shake(&mut self, slot: SlotIndex, duration: Duration);

    fn mark_completion(&mut self, slot: SlotIndex);
}

/// Итог прогона шагов.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Выполнить шаги по порядку.
///
/// `release` вызывается ровно один раз: сразу после блокирующих шагов
/// (для `Playback` без блокировки до первого шага). Туда UI кладёт
/// возврат квитанции замка, так что тряска идёт уже при открытом вводе.
///
/// Ошибка звука считается «мгновенно доигравшим» звуком: логируем и идём дальше,
/// иначе битый файл навсегда заблокировал бы ввод.
pub fn run_playback<S, F>(playback: &Playback, sink: &mut S, release: F) -> PlaybackReport
where
    S: PlaybackSink,
    F: FnOnce(),
{
    let mut report = PlaybackReport::default();

    run_steps(playback.blocking_prefix(), sink, &mut report);
    release();
    run_steps(playback.trailing_steps(), sink, &mut report);

    report
}

fn run_steps<S: PlaybackSink>(steps: &[PlaybackStep], sink: &mut S, report: &mut PlaybackReport) {
    for step in steps {
        match step {
            PlaybackStep::Cue { uri } | PlaybackStep::Pronounce { uri, .. } => {
                if uri.trim().is_empty() {
                    report.skipped += 1;
                    continue;
                }
                match sink.play(uri) {
                    Ok(()) => report.completed += 1,
                    Err(err) => {
                        warn!(%uri, error = %err, "звук не проигрался, продолжаем");
                        report.failed += 1;
                    }
                }
            }
            PlaybackStep::Shake { slot, duration } => {
                sink.shake(*slot, *duration);
                report.completed += 1;
            }
            PlaybackStep::MarkCompletion { slot } => {
                sink.mark_completion(*slot);
                report.completed += 1;
            }
        }
    }
}
