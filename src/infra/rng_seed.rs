//! RngSeed - доменный seed для RNG игры.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || base || round_index)
//!
//! Так «Сыграть ещё раз» в сессии с фиксированным seed воспроизводимо.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для конфига и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда сессии.
    pub fn derive(&self, round_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"MEMORY_GRID_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(round_index.to_le_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize()[..32]);

        Self { bytes: out }
    }
}
