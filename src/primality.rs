//! Primality tests for candidate field moduli.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::arith::mod_pow;
use crate::PrimalityTest;

/// The primes below 256, used both for trial division and as
/// Miller-Rabin bases.
pub(crate) const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Default number of Miller-Rabin bases.
pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 32;

/// Returns `true` if `n` is prime, using [`MillerRabin::default`].
pub fn is_prime(n: &BigUint) -> bool {
    MillerRabin::default().is_prime(n)
}

// TRIAL DIVISION
// ================================================================================================

/// Exact primality test by trial division over the `6k ± 1` wheel.
///
/// Runs in `O(sqrt(n))` and is only practical for moduli of a few dozen bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn is_prime(&self, n: &BigUint) -> bool {
        if *n <= BigUint::one() {
            return false;
        }
        if *n <= BigUint::from(3u32) {
            return true;
        }
        if n.is_even() || (n % 3u32).is_zero() {
            return false;
        }

        let mut i = BigUint::from(5u32);
        while &i * &i <= *n {
            if (n % &i).is_zero() || (n % (&i + 2u32)).is_zero() {
                return false;
            }
            i += 6u32;
        }

        true
    }
}

// MILLER-RABIN
// ================================================================================================

/// Miller-Rabin test using the first `rounds` primes as fixed witnesses.
///
/// Verdicts are deterministic. With at least 13 rounds the answer is exact for
/// every `n < 3.3 * 10^24`; above that a composite survives with probability
/// at most `4^-rounds`.
#[derive(Debug, Clone, Copy)]
pub struct MillerRabin {
    rounds: usize,
}

impl MillerRabin {
    /// Returns a tester with the given number of witnesses, capped at the
    /// number of primes below 256.
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds: rounds.clamp(1, SMALL_PRIMES.len()),
        }
    }

    /// Number of witnesses checked per call.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        Self::new(DEFAULT_MILLER_RABIN_ROUNDS)
    }
}

impl PrimalityTest for MillerRabin {
    fn is_prime(&self, n: &BigUint) -> bool {
        if *n <= BigUint::one() {
            return false;
        }

        for &p in SMALL_PRIMES.iter() {
            if (n % p).is_zero() {
                return *n == BigUint::from(p);
            }
        }
        // No factor up to 251 and below 257^2: nothing left to find.
        if n.to_u64().map_or(false, |v| v < 257 * 257) {
            return true;
        }

        let one = BigUint::one();
        let n_minus_one = n - &one;
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;

        'witness: for &a in SMALL_PRIMES.iter().take(self.rounds) {
            let mut x = mod_pow(&BigUint::from(a), &d, n);
            if x == one || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = (&x * &x) % n;
                if x == n_minus_one {
                    continue 'witness;
                }
            }
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES: [u64; 10] = [
        2,
        3,
        5,
        101,
        257,
        65537,
        1_000_000_007,
        2_147_483_647,
        0xffff_ffff_0000_0001,
        18_446_744_073_709_551_557,
    ];

    const COMPOSITES: [u64; 9] = [
        4,
        9,
        100,
        561,
        65535,
        1_000_000_008,
        // strong pseudoprimes to several small bases
        3_215_031_751,
        341_550_071_728_321,
        0xffff_ffff_0000_0003,
    ];

    #[test]
    fn test_small_cases() {
        for tester in [&TrialDivision as &dyn PrimalityTest, &MillerRabin::default()] {
            assert!(!tester.is_prime(&BigUint::zero()));
            assert!(!tester.is_prime(&BigUint::one()));
            assert!(tester.is_prime(&BigUint::from(2u32)));
            assert!(tester.is_prime(&BigUint::from(3u32)));
        }
    }

    #[test]
    fn test_trial_division() {
        for p in PRIMES.iter().take(8) {
            assert!(TrialDivision.is_prime(&BigUint::from(*p)), "{}", p);
        }
        for c in COMPOSITES.iter().take(7) {
            assert!(!TrialDivision.is_prime(&BigUint::from(*c)), "{}", c);
        }
    }

    #[test]
    fn test_miller_rabin() {
        let tester = MillerRabin::default();
        for p in PRIMES {
            assert!(tester.is_prime(&BigUint::from(p)), "{}", p);
        }
        for c in COMPOSITES {
            assert!(!tester.is_prime(&BigUint::from(c)), "{}", c);
        }
    }

    #[test]
    fn test_agreement_below_bound() {
        let tester = MillerRabin::new(13);
        for n in 0u32..5000 {
            let n = BigUint::from(n);
            assert_eq!(tester.is_prime(&n), TrialDivision.is_prime(&n), "{}", n);
        }
    }

    #[test]
    fn test_rounds_clamped() {
        assert_eq!(MillerRabin::new(0).rounds(), 1);
        assert_eq!(MillerRabin::new(1000).rounds(), SMALL_PRIMES.len());
        assert_eq!(MillerRabin::default().rounds(), DEFAULT_MILLER_RABIN_ROUNDS);
    }

    #[test]
    fn test_large_moduli() {
        let bn254_r = BigUint::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .unwrap();
        assert!(is_prime(&bn254_r));
        assert!(!is_prime(&(&bn254_r + 2u32)));
        assert!(!is_prime(&(&bn254_r * &bn254_r)));
    }
}
