//! RNG module - spawn randomness
//!
//! The controller draws two things per spawn: the piece kind (uniform over the
//! seven kinds) and whether the piece is fast. Both go through
//! [`RandomSource`] so tests and demos can script them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Source of spawn randomness
pub trait RandomSource {
    /// Pick the next piece kind
    fn pick_kind(&mut self) -> PieceKind;

    /// Return true with probability `chance` (0.0..=1.0)
    fn roll_fast(&mut self, chance: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_kind(&mut self) -> PieceKind {
        (**self).pick_kind()
    }

    fn roll_fast(&mut self, chance: f64) -> bool {
        (**self).roll_fast(chance)
    }
}

/// `StdRng`-backed source, uniform over all kinds
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Reproducible source: the same seed yields the same game
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::seeded(1)
    }
}

impl RandomSource for StdRandom {
    fn pick_kind(&mut self) -> PieceKind {
        *PieceKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PieceKind::I)
    }

    fn roll_fast(&mut self, chance: f64) -> bool {
        self.rng.gen_bool(chance.clamp(0.0, 1.0))
    }
}

/// Replays fixed sequences, cycling when exhausted.
///
/// An empty kind list yields `I`; an empty fast list never rolls fast.
/// The `chance` argument is ignored.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    kinds: Vec<PieceKind>,
    fast: Vec<bool>,
    kind_idx: usize,
    fast_idx: usize,
}

impl ScriptedRandom {
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            ..Self::default()
        }
    }

    /// Always the same kind, never fast
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    pub fn with_fast(mut self, fast: impl Into<Vec<bool>>) -> Self {
        self.fast = fast.into();
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.kind_idx % self.kinds.len()];
        self.kind_idx = self.kind_idx.wrapping_add(1);
        kind
    }

    fn roll_fast(&mut self, _chance: f64) -> bool {
        if self.fast.is_empty() {
            return false;
        }
        let fast = self.fast[self.fast_idx % self.fast.len()];
        self.fast_idx = self.fast_idx.wrapping_add(1);
        fast
    }
}
