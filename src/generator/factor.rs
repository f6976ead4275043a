//! Factorization of the multiplicative group order `q - 1`.

use std::collections::BTreeSet;

use log::trace;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::primality::{MillerRabin, SMALL_PRIMES};
use crate::{ParamsError, PrimalityTest, Result};

/// Trial division covers every prime factor up to this bound before
/// Pollard's rho takes over.
pub const TRIAL_DIVISION_BOUND: u32 = 1 << 16;

/// Iteration counter shared by every Pollard-rho attempt of one factorization.
struct Budget {
    limit: u64,
    used: u64,
}

impl Budget {
    fn spend(&mut self) -> Result<()> {
        if self.used >= self.limit {
            return Err(ParamsError::SearchExhausted {
                iterations: self.used,
            });
        }
        self.used += 1;
        Ok(())
    }
}

/// Returns the distinct prime factors of `n` in ascending order.
///
/// `hints` are divided out first; they need not be prime nor complete, any
/// composite or leftover part is split further. Factors above
/// [`TRIAL_DIVISION_BOUND`] are found with Brent's variant of Pollard's rho,
/// which fails with [`ParamsError::SearchExhausted`] once `rho_iterations`
/// polynomial steps have been spent.
pub fn factor(n: &BigUint, hints: &[BigUint], rho_iterations: u64) -> Result<Vec<BigUint>> {
    let mut factors = BTreeSet::new();
    if *n <= BigUint::one() {
        return Ok(Vec::new());
    }

    let mut remaining = n.clone();
    let mut pending = Vec::new();

    for hint in hints {
        if *hint <= BigUint::one() || !(&remaining % hint).is_zero() {
            continue;
        }
        while (&remaining % hint).is_zero() {
            remaining /= hint;
        }
        pending.push(hint.clone());
    }

    for p in trial_divisors() {
        if remaining.is_one() {
            break;
        }
        let p_big = BigUint::from(p);
        if &p_big * &p_big > remaining {
            // whatever is left has no factor below its square root
            factors.insert(remaining.clone());
            remaining = BigUint::one();
            break;
        }
        if (&remaining % p).is_zero() {
            while (&remaining % p).is_zero() {
                remaining /= p;
            }
            factors.insert(p_big);
        }
    }
    if !remaining.is_one() {
        pending.push(remaining);
    }

    let tester = MillerRabin::default();
    let mut budget = Budget {
        limit: rho_iterations,
        used: 0,
    };
    while let Some(m) = pending.pop() {
        if m.is_one() || factors.contains(&m) {
            continue;
        }
        if tester.is_prime(&m) {
            factors.insert(m);
            continue;
        }
        let d = pollard_brent(&m, &mut budget)?;
        trace!("split {} as {} * {}", m, d, &m / &d);
        pending.push(&m / &d);
        pending.push(d);
    }

    Ok(factors.into_iter().collect())
}

/// 2, 3, then every `6k ± 1` up to [`TRIAL_DIVISION_BOUND`].
fn trial_divisors() -> impl Iterator<Item = u32> {
    SMALL_PRIMES[..2].iter().copied().chain(
        (1..=TRIAL_DIVISION_BOUND / 6).flat_map(|k| [6 * k - 1, 6 * k + 1]),
    )
}

/// Returns a non-trivial divisor of the odd composite `n`.
fn pollard_brent(n: &BigUint, budget: &mut Budget) -> Result<BigUint> {
    if n.is_even() {
        return Ok(BigUint::from(2u32));
    }

    const BATCH: u64 = 128;
    let one = BigUint::one();

    let mut c = BigUint::one();
    loop {
        let step = |v: &BigUint| (v * v + &c) % n;

        let mut y = BigUint::from(2u32);
        let mut x;
        let mut ys = y.clone();
        let mut g = one.clone();
        let mut product = one.clone();
        let mut r = 1u64;

        loop {
            x = y.clone();
            for _ in 0..r {
                budget.spend()?;
                y = step(&y);
            }
            let mut k = 0u64;
            while k < r && g.is_one() {
                ys = y.clone();
                for _ in 0..BATCH.min(r - k) {
                    budget.spend()?;
                    y = step(&y);
                    product = (product * abs_diff(&x, &y)) % n;
                }
                g = product.gcd(n);
                k += BATCH;
            }
            r *= 2;
            if !g.is_one() {
                break;
            }
        }

        if g == *n {
            // the batched product collapsed; replay the last batch one step at a time
            loop {
                budget.spend()?;
                ys = step(&ys);
                g = abs_diff(&x, &ys).gcd(n);
                if !g.is_one() {
                    break;
                }
            }
        }

        if g != *n {
            return Ok(g);
        }
        c += 1u32;
    }
}

fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a > b {
        a - b
    } else {
        b - a
    }
}
