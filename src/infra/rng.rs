use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;
use crate::infra::rng_seed::RngSeed;

/// Системный RNG: каждый раунд непредсказуем.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn index_below(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
///
/// Перед каждым раундом пересидируется из базового seed и номера раунда,
/// так что раунд N одинаков при одинаковом seed независимо от того,
/// сколько кликов было в предыдущих раундах.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    base: RngSeed,
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::from_rng_seed(RngSeed::from_bytes(seed))
    }

    pub fn from_u64(seed: u64) -> Self {
        Self::from_rng_seed(RngSeed::from_u64(seed))
    }

    pub fn from_rng_seed(base: RngSeed) -> Self {
        Self {
            inner: StdRng::from_seed(base.bytes),
            base,
        }
    }

    pub fn base_seed(&self) -> &RngSeed {
        &self.base
    }
}

impl RandomSource for DeterministicRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn begin_round(&mut self, round_index: u64) {
        self.inner = StdRng::from_seed(self.base.derive(round_index).bytes);
    }
}
