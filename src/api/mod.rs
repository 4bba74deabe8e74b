//! Внешний API игры.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет состояние (клик, конец проигрывания, новый раунд);
//! - запросы (queries.rs) - только чтение;
//! - DTO (dto.rs) - структуры для отрисовки поля;
//! - ошибки (errors.rs) - то, что видит фронт.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
