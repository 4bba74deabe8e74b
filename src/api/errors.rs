use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, карточки с таким номером нет).
    BadRequest(String),

    /// Игру нельзя начать / продолжить: пул пуст или мал.
    CannotStart(String),

    /// Ошибка движка.
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidSlot { .. } => ApiError::BadRequest(err.to_string()),
            EngineError::EmptyPool
            | EngineError::InsufficientPool { .. }
            | EngineError::InvalidRoundSize(_) => ApiError::CannotStart(err.to_string()),
            EngineError::InvalidPlan(_) | EngineError::Internal(_) => {
                ApiError::EngineError(err.to_string())
            }
        }
    }
}
