//! Modular arithmetic over arbitrary-precision integers.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{ParamsError, Result};

/// Returns `base^exponent mod modulus`.
///
/// A modulus of one maps everything to zero.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }
    base.modpow(exponent, modulus)
}

/// Returns `(gcd, x, y)` such that `a * x + b * y = gcd`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }
    let (quotient, remainder) = b.div_mod_floor(a);
    let (gcd, x, y) = extended_gcd(&remainder, a);

    (gcd, y - quotient * &x, x)
}

/// Returns the inverse of `a` modulo `m`, reduced into `[0, m)`.
///
/// Fails with [`ParamsError::NoInverseExists`] when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let no_inverse = || ParamsError::NoInverseExists {
        value: a.clone(),
        modulus: m.clone(),
    };
    if m.is_zero() {
        return Err(no_inverse());
    }

    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from_biguint(Sign::Plus, a.clone()), &modulus);
    if !gcd.is_one() {
        return Err(no_inverse());
    }

    x.mod_floor(&modulus).to_biguint().ok_or_else(no_inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(&big(4), &big(13), &big(497)), big(445));
        assert_eq!(mod_pow(&big(7), &big(0), &big(13)), big(1));
        assert_eq!(mod_pow(&big(7), &big(5), &big(1)), big(0));

        // Fermat over Goldilocks
        let q = big(0xffff_ffff_0000_0001);
        assert_eq!(mod_pow(&big(7), &(&q - 1u32), &q), big(1));
    }

    #[test]
    #[should_panic]
    fn test_mod_pow_zero_modulus() {
        mod_pow(&big(3), &big(2), &big(0));
    }

    #[test]
    fn test_extended_gcd() {
        let cases = [(240i64, 46i64), (46, 240), (0, 9), (17, 5), (35, 64)];
        for (a, b) in cases {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let (gcd, x, y) = extended_gcd(&a, &b);
            assert_eq!(gcd, a.gcd(&b));
            assert_eq!(&a * x + &b * y, gcd);
        }
    }

    #[test]
    fn test_mod_inverse() {
        for m in [7u64, 13, 101, 0xffff_ffff_0000_0001] {
            let m = big(m);
            for a in 1u64..50 {
                let a = big(a);
                if a.gcd(&m).is_one() {
                    let inv = mod_inverse(&a, &m).unwrap();
                    assert!(inv < m);
                    assert_eq!((&a * &inv) % &m, big(1));
                }
            }
        }

        // operand larger than the modulus
        assert_eq!(mod_inverse(&big(15), &big(7)).unwrap(), big(1));
        assert_eq!(mod_inverse(&big(3), &big(1)).unwrap(), big(0));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert_eq!(
            mod_inverse(&big(4), &big(8)),
            Err(ParamsError::NoInverseExists {
                value: big(4),
                modulus: big(8),
            })
        );
        assert!(mod_inverse(&big(0), &big(11)).is_err());
        assert!(mod_inverse(&big(3), &big(0)).is_err());
    }
}
