//! Движок обучающей игры «найди карточку».
//!
//! Поле из 16 закрытых карточек, у каждой – картинка, слово и озвучка.
//! Игрок должен открыть карточки в заданном порядке: правильная открывается
//! и озвучивается, неправильная трясётся. Раунд заканчивается, когда открыты все.
//!
//! Рендеринг и воспроизведение звука – снаружи; сюда они ходят через
//! `api` (команды/запросы/DTO) и `playback` (упорядоченные шаги проигрывания).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod playback;
pub mod session;

pub use session::{GameSession, Submission};
