//! Search for a generator of the multiplicative group of a prime field.
//!
//! Two [`GeneratorSearch`] implementations are provided. [`BruteForceSearch`]
//! computes the order of each candidate directly and is only usable for toy
//! fields. [`FactorizationSearch`] factors `q - 1` once and tests each
//! candidate against the maximal proper subgroups, which is what real moduli
//! require. Both return the smallest generator and enforce an iteration
//! budget.

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith::mod_pow;
use crate::{GeneratorSearch, ParamsError, Result};

mod factor;
pub use factor::{factor, TRIAL_DIVISION_BOUND};

/// Default iteration budget of [`BruteForceSearch`].
pub const DEFAULT_BRUTE_FORCE_ITERATIONS: u64 = 1 << 24;

/// Default number of candidates tried by [`FactorizationSearch`].
pub const DEFAULT_MAX_CANDIDATES: u64 = 1 << 16;

/// Default Pollard-rho budget of [`FactorizationSearch`].
pub const DEFAULT_RHO_ITERATIONS: u64 = 1 << 24;

/// Returns `true` if `g` generates the multiplicative group modulo the prime
/// `q`, given the distinct prime factors of `q - 1`.
pub fn is_generator(g: &BigUint, q: &BigUint, order_factors: &[BigUint]) -> bool {
    let one = BigUint::one();
    if *g <= one || g >= q {
        return false;
    }
    let order = q - &one;
    if mod_pow(g, &order, q) != one {
        return false;
    }

    order_factors
        .iter()
        .all(|p| mod_pow(g, &(&order / p), q) != one)
}

// BRUTE FORCE
// ================================================================================================

/// Naive search: the order of every candidate is found by repeated
/// multiplication, and the first candidate whose powers `g^1 .. g^(q-2)`
/// all differ from one is returned.
///
/// Each multiplication counts against `max_iterations`.
#[derive(Debug, Clone, Copy)]
pub struct BruteForceSearch {
    max_iterations: u64,
}

impl BruteForceSearch {
    /// Returns a search that gives up after `max_iterations` multiplications.
    pub fn new(max_iterations: u64) -> Self {
        Self { max_iterations }
    }
}

impl Default for BruteForceSearch {
    fn default() -> Self {
        Self::new(DEFAULT_BRUTE_FORCE_ITERATIONS)
    }
}

impl GeneratorSearch for BruteForceSearch {
    fn find_generator(&self, q: &BigUint) -> Result<BigUint> {
        let one = BigUint::one();
        if *q <= one {
            return Err(ParamsError::NoGeneratorFound);
        }
        let order = q - &one;

        let mut iterations = 0u64;
        let mut candidate = BigUint::from(2u32);
        while candidate < *q {
            let mut power = one.clone();
            let mut exponent = one.clone();
            let mut full_order = true;
            while exponent < order {
                if iterations == self.max_iterations {
                    return Err(ParamsError::SearchExhausted { iterations });
                }
                iterations += 1;
                power = (power * &candidate) % q;
                if power == one {
                    trace!("candidate {} has order {}", candidate, exponent);
                    full_order = false;
                    break;
                }
                exponent += 1u32;
            }
            if full_order {
                debug!(
                    "brute force found generator {} after {} iterations",
                    candidate, iterations
                );
                return Ok(candidate);
            }
            candidate += 1u32;
        }

        Err(ParamsError::NoGeneratorFound)
    }
}

// FACTORIZATION
// ================================================================================================

/// Search driven by the factorization of `q - 1`: `g` is a generator iff
/// `g^((q-1)/p) != 1` for every prime `p` dividing `q - 1`.
///
/// Known factors of `q - 1` can be supplied to skip the expensive part of the
/// factorization; they are treated as hints and any remaining cofactor is
/// still factored.
#[derive(Debug, Clone)]
pub struct FactorizationSearch {
    known_factors: Vec<BigUint>,
    max_candidates: u64,
    rho_iterations: u64,
}

impl FactorizationSearch {
    /// Returns a search with default budgets and no known factors.
    pub fn new() -> Self {
        Self {
            known_factors: Vec::new(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            rho_iterations: DEFAULT_RHO_ITERATIONS,
        }
    }

    /// Uses `factors` as hints when factoring `q - 1`.
    pub fn with_known_factors(mut self, factors: Vec<BigUint>) -> Self {
        self.known_factors = factors;
        self
    }

    /// Sets the number of candidates tried before giving up.
    pub fn with_max_candidates(mut self, max_candidates: u64) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Sets the Pollard-rho step budget for factoring `q - 1`.
    pub fn with_rho_iterations(mut self, rho_iterations: u64) -> Self {
        self.rho_iterations = rho_iterations;
        self
    }

    /// Returns the distinct prime factors of `q - 1`.
    pub fn order_factors(&self, q: &BigUint) -> Result<Vec<BigUint>> {
        if q.is_zero() {
            return Ok(Vec::new());
        }
        factor(&(q - 1u32), &self.known_factors, self.rho_iterations)
    }
}

impl Default for FactorizationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorSearch for FactorizationSearch {
    fn find_generator(&self, q: &BigUint) -> Result<BigUint> {
        if *q <= BigUint::from(2u32) {
            return Err(ParamsError::NoGeneratorFound);
        }

        let factors = self.order_factors(q)?;
        debug!("q - 1 has {} distinct prime factors", factors.len());

        let mut tried = 0u64;
        let mut candidate = BigUint::from(2u32);
        while candidate < *q {
            if tried == self.max_candidates {
                return Err(ParamsError::SearchExhausted { iterations: tried });
            }
            tried += 1;
            if is_generator(&candidate, q, &factors) {
                debug!("found generator {} after {} candidates", candidate, tried);
                return Ok(candidate);
            }
            candidate += 1u32;
        }

        Err(ParamsError::NoGeneratorFound)
    }
}
