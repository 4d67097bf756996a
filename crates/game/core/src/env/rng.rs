//! RNG oracle for deterministic random number generation.
//!
//! Combat has exactly two random effects: the high-variance "lucky" shot and
//! each enemy's choice of ability. Both draw from an [`RngOracle`] keyed by a
//! seed derived from the encounter seed and the action nonce, so a replay with
//! the same seed and the same action sequence reproduces every roll.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// Pick an index in `0..len` uniformly. Returns 0 for empty or single-element pools.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.range(seed, 0, (len - 1) as u32) as usize
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless by construction: every roll is a pure function of its seed,
/// which keeps the oracle shareable behind `&dyn RngOracle`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a deterministic per-roll seed from encounter components.
///
/// # Arguments
///
/// * `encounter_seed` - Seed injected when the encounter's environment is built
/// * `nonce` - Resolved-action sequence number
/// * `actor` - Roster slot of the acting combatant (0 = player, 1.. = enemies)
/// * `context` - Distinguishes independent rolls within one action
pub fn compute_seed(encounter_seed: u64, nonce: u64, actor: u32, context: u32) -> u64 {
    let mut hash = encounter_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
