//! Seeded, serializable random source shared by the deck and agent seats.
//!
//! The generator state is captured as seed + stream + word position so a
//! restored snapshot continues the exact same random sequence.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RngState", into = "RngState")]
pub struct SeededRng {
    inner: ChaCha20Rng,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RngState {
    seed: [u8; 32],
    stream: u64,
    word_pos: u128,
}

impl SeededRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Derives an independent generator, e.g. one per agent seat.
    pub fn fork(&mut self) -> Self {
        Self::from_seed_u64(self.inner.next_u64())
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

impl From<RngState> for SeededRng {
    fn from(state: RngState) -> Self {
        let mut inner = ChaCha20Rng::from_seed(state.seed);
        inner.set_stream(state.stream);
        inner.set_word_pos(state.word_pos);
        Self { inner }
    }
}

impl From<SeededRng> for RngState {
    fn from(rng: SeededRng) -> Self {
        RngState {
            seed: rng.inner.get_seed(),
            stream: rng.inner.get_stream(),
            word_pos: rng.inner.get_word_pos(),
        }
    }
}
