//! Round constants of the Anemoi permutation.
//!
//! Both matrices are derived from the first decimals of `pi`, split into two
//! 100-digit halves. For round `r` and column `i`, with `a = pi_0^r` and
//! `b = pi_1^i`:
//!
//! ```text
//! C[r][i] = g * a^2 + (a + b)^inv_alpha
//! D[r][i] = g * b^2 + (a + b)^inv_alpha + inv_g
//! ```
//!
//! all modulo `q`.

use num_bigint::BigUint;
use num_traits::One;

use crate::arith::mod_pow;

/// First half of the decimal expansion of `pi` used for round constants.
pub const PI_0: &str = "1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Second half of the decimal expansion of `pi` used for round constants.
pub const PI_1: &str = "8214808651328230664709384460955058223172535940812848111745028410270193852110555964462294895493038196";

/// Returns `(pi_0 mod q, pi_1 mod q)`.
pub fn pi_constants(q: &BigUint) -> (BigUint, BigUint) {
    (decimal_mod(PI_0, q), decimal_mod(PI_1, q))
}

fn decimal_mod(digits: &str, q: &BigUint) -> BigUint {
    digits
        .bytes()
        .fold(BigUint::default(), |acc, digit| {
            (acc * 10u32 + u32::from(digit - b'0')) % q
        })
}

/// The `C` and `D` round constant matrices, indexed by round then column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConstants {
    c: Vec<Vec<BigUint>>,
    d: Vec<Vec<BigUint>>,
}

impl RoundConstants {
    /// Computes the constants for `num_rounds` rounds over `n_inputs` columns.
    ///
    /// `inv_alpha` is the exponent applied to `pi_0^r + pi_1^i`, `g` and `inv_g`
    /// the group generator and its inverse modulo `q`.
    pub fn generate(
        inv_alpha: &BigUint,
        g: &BigUint,
        inv_g: &BigUint,
        q: &BigUint,
        num_rounds: usize,
        n_inputs: usize,
    ) -> Self {
        let (pi_0, pi_1) = pi_constants(q);

        // pi_1^i only depends on the column
        let mut pi_1_powers = Vec::with_capacity(n_inputs);
        let mut pi_1_i = BigUint::one() % q;
        for _ in 0..n_inputs {
            pi_1_powers.push(pi_1_i.clone());
            pi_1_i = (pi_1_i * &pi_1) % q;
        }

        let mut c = Vec::with_capacity(num_rounds);
        let mut d = Vec::with_capacity(num_rounds);
        let mut pi_0_r = BigUint::one() % q;
        for _ in 0..num_rounds {
            let g_pi_0_sq = (g * &pi_0_r * &pi_0_r) % q;

            let mut c_row = Vec::with_capacity(n_inputs);
            let mut d_row = Vec::with_capacity(n_inputs);
            for pi_1_i in pi_1_powers.iter() {
                let cross = (&pi_0_r + pi_1_i) % q;
                let pow_alpha = mod_pow(&cross, inv_alpha, q);

                c_row.push((&g_pi_0_sq + &pow_alpha) % q);
                d_row.push((g * pi_1_i * pi_1_i + &pow_alpha + inv_g) % q);
            }
            c.push(c_row);
            d.push(d_row);

            pi_0_r = (pi_0_r * &pi_0) % q;
        }

        Self { c, d }
    }

    /// The `C` matrix.
    pub fn c(&self) -> &[Vec<BigUint>] {
        &self.c
    }

    /// The `D` matrix.
    pub fn d(&self) -> &[Vec<BigUint>] {
        &self.d
    }

    /// Number of rounds covered.
    pub fn num_rounds(&self) -> usize {
        self.c.len()
    }

    /// Number of columns per round.
    pub fn num_columns(&self) -> usize {
        self.c.first().map_or(0, Vec::len)
    }

    /// Consumes the constants and returns `(C, D)`.
    pub fn into_matrices(self) -> (Vec<Vec<BigUint>>, Vec<Vec<BigUint>>) {
        (self.c, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::mod_inverse;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn dec(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
    }

    #[test]
    fn test_pi_constants() {
        let q = big(0xffff_ffff_0000_0001);
        let (pi_0, pi_1) = pi_constants(&q);
        assert_eq!(pi_0, dec(PI_0) % &q);
        assert_eq!(pi_1, dec(PI_1) % &q);
        assert_eq!(pi_0, big(9337861830824449323));
        assert_eq!(pi_1, big(13349066130162709819));
    }

    #[test]
    fn test_small_field() {
        // q = 101, alpha = 3, g = 2, two columns
        let q = big(101);
        let inv_alpha = mod_inverse(&big(3), &q).unwrap();
        let constants = RoundConstants::generate(&inv_alpha, &big(2), &big(51), &q, 14, 2);

        let expected_c: [[u64; 2]; 14] = [
            [72, 80], [20, 33], [54, 60], [6, 82], [87, 67], [78, 50], [22, 81],
            [18, 38], [24, 29], [9, 79], [43, 63], [10, 2], [88, 39], [39, 67],
        ];
        let expected_d: [[u64; 2]; 14] = [
            [22, 74], [31, 88], [33, 83], [20, 39], [28, 52], [1, 17], [72, 74],
            [8, 72], [67, 15], [54, 67], [29, 93], [70, 5], [86, 81], [48, 19],
        ];
        for r in 0..14 {
            for i in 0..2 {
                assert_eq!(constants.c()[r][i], big(expected_c[r][i]));
                assert_eq!(constants.d()[r][i], big(expected_d[r][i]));
            }
        }
    }

    #[test]
    fn test_goldilocks() {
        let q = big(0xffff_ffff_0000_0001);
        let inv_alpha = mod_inverse(&big(11), &q).unwrap();
        let constants = RoundConstants::generate(
            &inv_alpha,
            &big(7),
            &big(2635249152773512046),
            &q,
            19,
            1,
        );

        assert_eq!(constants.num_rounds(), 19);
        assert_eq!(constants.num_columns(), 1);
        assert_eq!(constants.c()[0][0], big(262151));
        assert_eq!(constants.d()[0][0], big(2635249152773774197));
        assert_eq!(constants.c()[1][0], big(9504799404657014223));
        assert_eq!(constants.d()[1][0], big(12771478071185232348));
        assert_eq!(constants.c()[18][0], big(13991251431259507195));
        assert_eq!(constants.d()[18][0], big(1555507008318625885));
    }

    #[test]
    fn test_shape_and_determinism() {
        let q = big(0xffff_ffff_0000_0001);
        for (rounds, columns) in [(0, 1), (21, 1), (14, 2), (12, 3), (12, 4), (10, 6), (10, 8)] {
            let first = RoundConstants::generate(&big(5), &big(7), &big(3), &q, rounds, columns);
            let second = RoundConstants::generate(&big(5), &big(7), &big(3), &q, rounds, columns);
            assert_eq!(first, second);

            assert_eq!(first.c().len(), rounds);
            assert_eq!(first.d().len(), rounds);
            for r in 0..rounds {
                assert_eq!(first.c()[r].len(), columns);
                assert_eq!(first.d()[r].len(), columns);
                assert!(first.c()[r].iter().chain(first.d()[r].iter()).all(|v| *v < q));
            }
        }
    }

    #[test]
    fn test_rounds_differ() {
        let q = big(0xffff_ffff_0000_0001);
        let constants = RoundConstants::generate(&big(5), &big(7), &big(3), &q, 10, 4);
        let mut seen = std::collections::BTreeSet::new();
        for row in constants.c() {
            for value in row {
                assert!(seen.insert(value.clone()));
            }
        }
    }
}
