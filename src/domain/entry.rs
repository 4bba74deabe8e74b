use core::fmt;

use serde::{Deserialize, Serialize};

/// Одна запись контента: слово, картинка и озвучка.
///
/// Картинка и аудио могут отсутствовать в исходном JSON,
/// тогда остаются пустыми, и фронт рисует заглушку / пропускает звук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Entry {
    pub word: String,
    /// URI картинки (лицевая сторона карточки).
    #[serde(default)]
    pub image: String,
    /// URI аудио с произношением слова.
    #[serde(default)]
    pub audio: String,
}

impl Entry {
    pub fn new(
        word: impl Into<String>,
        image: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            image: image.into(),
            audio: audio.into(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    pub fn has_audio(&self) -> bool {
        !self.audio.trim().is_empty()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
