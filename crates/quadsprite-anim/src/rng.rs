//! Deterministic RNG wrapper using PCG32.
//!
//! Random start frames are drawn from a generator the host passes in, so a
//! given seed always reproduces the same playback.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive a per-sprite seed from a base seed and the sprite's name using BLAKE3.
    pub fn derive_sprite_seed(base_seed: u32, sprite_name: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + sprite_name.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(sprite_name.as_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Uniform frame index in the inclusive range `[start, end]`.
    #[inline]
    pub fn gen_frame(&mut self, start: u32, end: u32) -> u32 {
        self.inner.gen_range(start..=end)
    }
}

impl RngCore for DeterministicRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
