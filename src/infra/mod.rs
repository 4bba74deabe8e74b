//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для планировщика;
//! - seed и его пересидирование по раундам.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
