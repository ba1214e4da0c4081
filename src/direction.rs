//! Gap direction selection with injectable randomness.
//!
//! The staircase never looks at the direction sequence; it only compares
//! the viewer's answer against the presented direction. Keeping the source
//! behind a trait lets tests drive a session with a scripted sequence while
//! production uses a seedable uniform source.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::types::GapDirection;

/// Source of gap directions for successive trials.
pub trait DirectionSource {
    /// Produce the direction for the next trial.
    ///
    /// Must be independent of any adaptive state; the controller calls
    /// this exactly once per trial.
    fn next_direction(&mut self) -> GapDirection;
}

/// Uniform random directions from a caller-supplied RNG.
///
/// The default RNG is `Xoshiro256PlusPlus`, seeded from the config's
/// `direction_seed` when present, otherwise from OS entropy.
#[derive(Debug, Clone)]
pub struct UniformDirections<R: Rng = Xoshiro256PlusPlus> {
    rng: R,
}

impl UniformDirections<Xoshiro256PlusPlus> {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a deterministic source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for UniformDirections<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniformDirections<R> {
    /// Wrap an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DirectionSource for UniformDirections<R> {
    fn next_direction(&mut self) -> GapDirection {
        GapDirection::ALL[self.rng.gen_range(0..GapDirection::ALL.len())]
    }
}

/// Fixed sequence of directions for deterministic tests.
///
/// Cycles back to the start once the sequence is exhausted, so a short
/// script can drive an arbitrarily long session.
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    script: VecDeque<GapDirection>,
}

impl ScriptedDirections {
    /// Create a source that replays `directions` in order, cycling.
    ///
    /// # Panics
    ///
    /// Panics if `directions` is empty.
    pub fn new(directions: &[GapDirection]) -> Self {
        assert!(!directions.is_empty(), "script must not be empty");
        Self {
            script: directions.iter().copied().collect(),
        }
    }

    /// A source that always presents the same direction.
    pub fn constant(direction: GapDirection) -> Self {
        Self::new(&[direction])
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> GapDirection {
        // Rotate rather than drain so the script cycles.
        let next = self.script.pop_front().expect("script is non-empty");
        self.script.push_back(next);
        next
    }
}
