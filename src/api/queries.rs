use serde::{Deserialize, Serialize};

use crate::domain::SlotIndex;
use crate::engine::{RandomSource, RoundHistory, TurnEngine};
use crate::session::GameSession;

use super::dto::{BoardViewDto, CardBackDto, CardViewDto, ProgressDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Всё поле для отрисовки.
    Board,

    /// Только счётчик прогресса.
    Progress,

    /// История текущего раунда.
    History,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Board(BoardViewDto),
    Progress(ProgressDto),
    History(RoundHistory),
}

pub fn run_query<R: RandomSource>(session: &GameSession<R>, query: &Query) -> QueryResponse {
    let engine = session.engine();
    match query {
        Query::Board => QueryResponse::Board(build_board_view(engine, session.round_index())),
        Query::Progress => QueryResponse::Progress(ProgressDto {
            progress: engine.progress(),
            round_size: engine.plan().round_size(),
            complete: engine.state().is_complete(),
        }),
        Query::History => QueryResponse::History(engine.history().clone()),
    }
}

/// Сформировать DTO поля из движка раунда.
///
/// Оборот закрытой карточки пустой; открытой – её собственное слово;
/// после конца раунда последняя найденная карточка показывает звезду.
pub fn build_board_view(engine: &TurnEngine, round_index: u64) -> BoardViewDto {
    let plan = engine.plan();
    let state = engine.state();
    let complete = state.is_complete();
    let star_slot = if complete { plan.last_target() } else { None };

    let cards = plan
        .assignment()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let slot = idx as SlotIndex;
            let revealed = state.is_revealed(slot);
            let back = if !revealed {
                CardBackDto::Hidden
            } else if star_slot == Some(slot) {
                CardBackDto::CompletionStar
            } else {
                CardBackDto::Word(entry.word.clone())
            };

            CardViewDto {
                slot,
                image: entry.has_image().then(|| entry.image.clone()),
                alt: entry.word.clone(),
                revealed,
                back,
            }
        })
        .collect();

    BoardViewDto {
        round_index,
        round_size: plan.round_size(),
        progress: state.progress(),
        complete,
        current_word: engine.current_target().map(|e| e.word.clone()),
        cards,
    }
}
