// src/playback/gate.rs
//! Замок на ввод, пока доигрывает озвучка открытой карточки.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Квитанция на одно блокирующее проигрывание.
///
/// Привязана к эпохе (номеру раунда): после «Сыграть ещё раз»
/// квитанции старого раунда уже ничего не открывают.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackToken {
    pub epoch: u64,
    pub seq: u64,
}

#[derive(Clone, Debug)]
pub struct InputGate {
    epoch: u64,
    next_seq: u64,
    busy: Option<PlaybackToken>,
}

impl InputGate {
    pub fn new(epoch: u64) -> Self {
        Self {
            epoch,
            next_seq: 0,
            busy: None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_open(&self) -> bool {
        self.busy.is_none()
    }

    /// Закрыть ввод на время проигрывания.
    /// None – ввод уже закрыт другим проигрыванием.
    pub fn close(&mut self) -> Option<PlaybackToken> {
        if self.busy.is_some() {
            return None;
        }
        let token = PlaybackToken {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.busy = Some(token);
        Some(token)
    }

    /// Проигрывание закончилось. Чужая или устаревшая квитанция – false, замок не трогаем.
    pub fn release(&mut self, token: PlaybackToken) -> bool {
        if self.busy == Some(token) {
            self.busy = None;
            true
        } else {
            debug!(
                token_epoch = token.epoch,
                gate_epoch = self.epoch,
                "устаревшая квитанция проигрывания"
            );
            false
        }
    }

    /// Новый раунд: всё незавершённое из старого просто забывается.
    pub fn reset(&mut self, epoch: u64) {
        *self = Self::new(epoch);
    }
}
