use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0x5eed_c010_0a11_7e57;

/// Source of integers in an inclusive range.
///
/// Implementations used for palettes must be deterministic: the same seed and
/// the same sequence of calls yield the same values.
pub trait IntGenerator {
    fn next_in(&mut self, min: u32, max: u32) -> u32;
}

/// Reproducible generator backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct Seeded {
    rng: StdRng,
}

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Seeded {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl IntGenerator for Seeded {
    fn next_in(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max, "range must not be inverted");
        self.rng.gen_range(min..=max)
    }
}

impl<G: IntGenerator + ?Sized> IntGenerator for &mut G {
    fn next_in(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_in(min, max)
    }
}
