//! Random initial state used as a test fixture for permutation circuits.

use num_bigint::{BigUint, RandBigInt};
use rand_core::RngCore;

/// The two rows `X` and `Y` of an Anemoi state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// First row.
    pub x: Vec<BigUint>,
    /// Second row.
    pub y: Vec<BigUint>,
}

impl State {
    /// Samples `n_inputs` elements per row uniformly from `[0, q - 1]`.
    ///
    /// The randomness source is injected so tests can use a seeded generator;
    /// the values are fixtures, not secrets.
    ///
    /// # Panics
    /// Panics if `q` is zero and `n_inputs` is not.
    pub fn sample<R: RngCore + ?Sized>(n_inputs: usize, q: &BigUint, rng: &mut R) -> Self {
        let mut x = Vec::with_capacity(n_inputs);
        let mut y = Vec::with_capacity(n_inputs);
        for _ in 0..n_inputs {
            x.push(rng.gen_biguint_below(q));
            y.push(rng.gen_biguint_below(q));
        }

        Self { x, y }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.x.len()
    }
}
