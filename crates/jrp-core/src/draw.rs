//! Uniform random index selection.
//!
//! Draws are independent and may repeat (sampling with replacement). The
//! production source reseeds from the operating system at the start of every
//! generation batch, so no two batches share a seed.

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use rand_core::{OsRng, RngCore as _};

pub trait RandomDraw {
  /// Called once before each generation batch.
  fn begin_batch(&mut self) {}

  /// `count` uniformly distributed indices in `[0, len)`. Returns an empty
  /// vector when `len` is zero.
  fn indices(&mut self, len: usize, count: usize) -> Vec<usize>;
}

/// [`StdRng`] seeded from [`OsRng`].
pub struct OsSeededDraw {
  rng: StdRng,
}

impl OsSeededDraw {
  pub fn new() -> Self { Self { rng: os_seeded() } }
}

impl Default for OsSeededDraw {
  fn default() -> Self { Self::new() }
}

impl RandomDraw for OsSeededDraw {
  fn begin_batch(&mut self) { self.rng = os_seeded(); }

  fn indices(&mut self, len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
      return Vec::new();
    }
    (0..count).map(|_| self.rng.gen_range(0..len)).collect()
  }
}

fn os_seeded() -> StdRng {
  let mut seed = <StdRng as rand::SeedableRng>::Seed::default();
  OsRng.fill_bytes(&mut seed);
  StdRng::from_seed(seed)
}
