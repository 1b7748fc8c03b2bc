//! Root-linking policies.
//!
//! When two distinct roots are merged, one survives as the root of the
//! combined set and the other is attached beneath it. A [`LinkPolicy`]
//! makes that choice.
//!
//! Random linking keeps the implementation free of rank or size
//! bookkeeping. Combined with path compression it is fast in practice, but it
//! does not carry the worst-case logarithmic depth bound of union-by-rank.
//! Callers that need that bound should supply a rank- or size-aware forest.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Which of the two roots passed to a union survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Survivor {
    /// The root of the first argument survives.
    First,
    /// The root of the second argument survives.
    Second,
}

/// Chooses the surviving root for each union of two distinct sets.
pub trait LinkPolicy {
    /// Pick the survivor for the next link.
    fn pick(&mut self) -> Survivor;
}

/// Unbiased coin flip per link, driven by any [`RngCore`].
///
/// # Examples
///
/// ```
/// use voxlink_forest::{CoinFlip, LinkPolicy};
///
/// let mut a = CoinFlip::seeded(7);
/// let mut b = CoinFlip::seeded(7);
/// for _ in 0..32 {
///     assert_eq!(a.pick(), b.pick());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CoinFlip<R = ChaCha8Rng> {
    rng: R,
}

impl CoinFlip<ChaCha8Rng> {
    /// Seed used by [`CoinFlip::default`].
    pub const DEFAULT_SEED: u64 = 1;

    /// A ChaCha8-backed coin with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> CoinFlip<R> {
    /// Wrap an existing random source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for CoinFlip<ChaCha8Rng> {
    fn default() -> Self {
        Self::seeded(Self::DEFAULT_SEED)
    }
}

impl<R: RngCore> LinkPolicy for CoinFlip<R> {
    fn pick(&mut self) -> Survivor {
        if self.rng.random::<bool>() {
            Survivor::Second
        } else {
            Survivor::First
        }
    }
}

/// The first argument's root always survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysFirst;

impl LinkPolicy for AlwaysFirst {
    fn pick(&mut self) -> Survivor {
        Survivor::First
    }
}

/// The second argument's root always survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysSecond;

impl LinkPolicy for AlwaysSecond {
    fn pick(&mut self) -> Survivor {
        Survivor::Second
    }
}
