//! Read-only collaborators injected into the combat engine.
//!
//! The [`Env`] aggregate bundles the random source and the encounter seed so
//! the engine never reaches for ambient nondeterminism.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required by the combat engine.
pub struct Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    rng: &'a R,
    seed: u64,
}

pub type CombatEnv<'a> = Env<'a, dyn RngOracle + 'a>;

impl<'a, R> Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    pub fn new(rng: &'a R, seed: u64) -> Self {
        Self { rng, seed }
    }

    /// Returns the random oracle.
    pub fn rng(&self) -> &'a R {
        self.rng
    }

    /// Returns the encounter seed all rolls are derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rolls a value in `[min, max]` for one actor at one point of the action sequence.
    pub fn roll(&self, nonce: u64, actor: u32, context: u32, min: u32, max: u32) -> u32 {
        self.rng
            .range(compute_seed(self.seed, nonce, actor, context), min, max)
    }

    /// Picks an index into a pool of `len` entries.
    pub fn pick(&self, nonce: u64, actor: u32, context: u32, len: usize) -> usize {
        self.rng
            .pick_index(compute_seed(self.seed, nonce, actor, context), len)
    }
}

impl<'a> CombatEnv<'a> {
    /// Builds an environment over the default PCG oracle.
    pub fn seeded(seed: u64) -> Self {
        static PCG: PcgRng = PcgRng;
        Self::new(&PCG, seed)
    }
}

impl<R> Clone for Env<'_, R>
where
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Env<'_, R> where R: RngOracle + ?Sized {}

impl<R> core::fmt::Debug for Env<'_, R>
where
    R: RngOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").field("seed", &self.seed).finish_non_exhaustive()
    }
}
