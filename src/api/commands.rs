use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::SlotIndex;
use crate::engine::RandomSource;
use crate::playback::PlaybackToken;
use crate::session::{GameSession, Submission};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня от фронта.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Игрок нажал на карточку.
    SelectSlot { slot: SlotIndex },

    /// Фронт доиграл звук/анимацию по квитанции.
    FinishPlayback { token: PlaybackToken },

    /// Кнопка «Сыграть ещё раз».
    PlayAgain,
}

/// Выполнить команду над сессией.
pub fn execute<R: RandomSource>(
    session: &mut GameSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::SelectSlot { slot } => {
            let submission = session.submit(slot).map_err(|err| {
                warn!(slot, error = %err, "фронт прислал некорректный клик");
                ApiError::from(err)
            })?;
            Ok(match submission {
                Submission::Dropped { slot } => CommandResponse::Dropped { slot },
                Submission::Resolved {
                    outcome,
                    playback,
                    token,
                } => CommandResponse::Resolved {
                    outcome,
                    playback,
                    token,
                },
            })
        }
        Command::FinishPlayback { token } => Ok(CommandResponse::PlaybackFinished {
            released: session.finish_playback(token),
        }),
        Command::PlayAgain => {
            session.play_again()?;
            Ok(CommandResponse::RoundStarted {
                round_index: session.round_index(),
            })
        }
    }
}
