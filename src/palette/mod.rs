//! Distinct series colours.
//!
//! Hues are spread by repeatedly stepping an accumulator and rejecting any hue
//! whose residue modulo the number of requested colours is already taken.
//! Saturation, lightness and alpha are drawn from a seeded generator so that
//! the same request always yields the same palette.

mod error;
pub mod random;
#[cfg(test)]
mod test;

use std::collections::{BTreeSet, HashSet};

pub use error::{Channel, Error, Result};
pub use random::{DEFAULT_SEED, IntGenerator, Seeded};

/// Largest palette [`Generator::generate`] will build.
pub const MAX_COLOURS: usize = 65_536;

/// Residues are compared in millionths of a degree. Two hues whose residues
/// fall within one unit of each other count as the same hue.
const RESIDUE_SCALE: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Degrees added to the hue accumulator per step.
    pub h_step: f64,
    pub min_s: u32,
    pub max_s: u32,
    pub min_l: u32,
    pub max_l: u32,
    pub min_a: u32,
    pub max_a: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            h_step: 222.5,
            min_s: 75,
            max_s: 95,
            min_l: 50,
            max_l: 55,
            min_a: 70,
            max_a: 100,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.h_step.is_finite() || self.h_step <= 0.0 {
            return Err(Error::Step(self.h_step));
        }
        for (channel, min, max) in [
            (Channel::Saturation, self.min_s, self.max_s),
            (Channel::Lightness, self.min_l, self.max_l),
            (Channel::Alpha, self.min_a, self.max_a),
        ] {
            if min > max {
                return Err(Error::InvertedBounds { channel, min, max });
            }
            if max > 100 {
                return Err(Error::OutOfRange {
                    channel,
                    value: max,
                });
            }
        }
        Ok(())
    }
}

/// One generated colour. Hue is in degrees and is not wrapped into `[0, 360)`,
/// the other channels are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsla {
    pub hue: f64,
    pub saturation: u32,
    pub lightness: u32,
    pub alpha: u32,
}

impl Hsla {
    #[must_use]
    pub fn as_tuple(&self) -> (f64, u32, u32, u32) {
        (self.hue, self.saturation, self.lightness, self.alpha)
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {}%)",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Palette(Vec<Hsla>);

impl Palette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hsla> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Hsla] {
        &self.0
    }

    /// CSS `hsla(...)` strings, in palette order.
    #[must_use]
    pub fn css(&self) -> Vec<String> {
        self.0.iter().map(Hsla::to_string).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Hsla> {
        self.0
    }
}

impl FromIterator<Hsla> for Palette {
    fn from_iter<T: IntoIterator<Item = Hsla>>(iter: T) -> Self {
        Palette(iter.into_iter().collect())
    }
}

impl IntoIterator for Palette {
    type Item = Hsla;
    type IntoIter = std::vec::IntoIter<Hsla>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Hsla;
    type IntoIter = std::slice::Iter<'a, Hsla>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Palette generator owning its configuration and integer source.
#[derive(Debug, Clone)]
pub struct Generator<G = Seeded> {
    config: Config,
    rng: G,
    probe_limit: Option<usize>,
}

impl Generator<Seeded> {
    pub fn seeded(config: Config, seed: u64) -> Result<Self> {
        Self::new(config, Seeded::new(seed))
    }
}

impl<G: IntGenerator> Generator<G> {
    /// Fails if `config` does not pass [`Config::validate`].
    pub fn new(config: Config, rng: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            probe_limit: None,
        })
    }

    /// Maximum number of rejected hues before giving up.
    ///
    /// Defaults to `64 * (count + 1)` for a request of `count` colours.
    /// A `limit` of zero still succeeds when no hue is ever rejected.
    #[must_use]
    pub fn with_probe_limit(mut self, limit: usize) -> Self {
        self.probe_limit = Some(limit);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates `count` colours whose hues are distinct modulo `count`.
    ///
    /// Fails with [`Error::TooMany`] above [`MAX_COLOURS`] before allocating.
    pub fn generate(&mut self, count: usize) -> Result<Palette> {
        if count == 0 {
            return Ok(Palette::default());
        }
        if count > MAX_COLOURS {
            return Err(Error::TooMany(count, MAX_COLOURS));
        }
        let limit = self
            .probe_limit
            .unwrap_or_else(|| count.saturating_add(1).saturating_mul(64));
        let hues = hues(count, self.config.h_step, limit)?;

        let Config {
            min_s,
            max_s,
            min_l,
            max_l,
            min_a,
            max_a,
            ..
        } = self.config;
        let rng = &mut self.rng;
        Ok(hues
            .into_iter()
            .map(|hue| Hsla {
                hue,
                saturation: rng.next_in(min_s, max_s),
                lightness: rng.next_in(min_l, max_l),
                alpha: rng.next_in(min_a, max_a),
            })
            .collect())
    }
}

/// `count` colours with the default configuration and seed.
pub fn palette(count: usize) -> Result<Palette> {
    Generator::new(Config::default(), Seeded::default())?.generate(count)
}

/// Residue of `hue` modulo `count`, in units of `1 / RESIDUE_SCALE` degrees.
fn residue(hue: f64, count: usize) -> i64 {
    let modulus = count as i64 * RESIDUE_SCALE as i64;
    (((hue % count as f64) * RESIDUE_SCALE).round() as i64).rem_euclid(modulus)
}

/// Whether `slot` lies within one unit of a taken residue, wrapping at `count`.
fn collides(taken: &BTreeSet<i64>, slot: i64, count: usize) -> bool {
    let modulus = count as i64 * RESIDUE_SCALE as i64;
    [-1, 0, 1]
        .into_iter()
        .any(|delta| taken.contains(&(slot + delta).rem_euclid(modulus)))
}

fn hues(count: usize, step: f64, limit: usize) -> Result<Vec<f64>> {
    let offset = step / count as f64;
    let mut taken = BTreeSet::new();
    let mut hues = Vec::with_capacity(count.min(MAX_COLOURS));
    // Hue is always `steps * step + shifts * offset`, never a running sum.
    let mut steps = 0u64;
    let mut shifts = 0u64;
    let mut probes = 0usize;

    while hues.len() < count {
        steps += 1;
        let mut visited = HashSet::new();
        loop {
            let hue = steps as f64 * step + shifts as f64 * offset;
            let slot = residue(hue, count);
            if !collides(&taken, slot, count) {
                taken.insert(slot);
                hues.push(hue);
                break;
            }
            probes += 1;
            if probes > limit {
                tracing::debug!(count, step, probes, "gave up allocating hues");
                return Err(Error::Exhausted(count, step));
            }
            if visited.insert(slot) {
                steps += 1;
            } else {
                // Residue repeated within this search: shift onto the next offset class.
                tracing::trace!(count, hue, "hue stepping cycled");
                visited.clear();
                shifts += 1;
            }
        }
    }

    tracing::debug!(count, probes, "allocated hues");
    Ok(hues)
}
