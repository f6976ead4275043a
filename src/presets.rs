//! Well-known prime fields with the factorization of their group order.

use num_bigint::BigUint;

use crate::params::parse_biguint;
use crate::Result;

/// A prime field modulus together with the distinct prime factors of `q - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPreset {
    /// Short name, as accepted on the command line.
    pub name: &'static str,
    /// Field modulus.
    pub modulus: &'static str,
    /// Distinct prime factors of `modulus - 1`, ascending.
    pub q_minus_one_factors: &'static [&'static str],
}

impl FieldPreset {
    /// Returns the modulus as an integer.
    pub fn modulus(&self) -> Result<BigUint> {
        parse_biguint(self.modulus)
    }

    /// Returns the prime factors of `q - 1` as integers.
    pub fn q_minus_one_factors(&self) -> Result<Vec<BigUint>> {
        self.q_minus_one_factors
            .iter()
            .map(|f| parse_biguint(f))
            .collect()
    }

    /// Looks up a preset by name.
    pub fn by_name(name: &str) -> Option<&'static FieldPreset> {
        ALL.iter().copied().find(|preset| preset.name == name)
    }
}

/// Scalar field of BN-254.
pub const BN254_SCALAR: FieldPreset = FieldPreset {
    name: "bn254",
    modulus: "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
    q_minus_one_factors: &[
        "2",
        "3",
        "13",
        "29",
        "983",
        "11003",
        "237073",
        "405928799",
        "1670836401704629",
        "13818364434197438864469338081",
    ],
};

/// Base field of BN-254.
pub const BN254_BASE: FieldPreset = FieldPreset {
    name: "bn254-base",
    modulus: "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
    q_minus_one_factors: &[
        "2",
        "3",
        "13",
        "29",
        "67",
        "229",
        "311",
        "983",
        "11003",
        "405928799",
        "11465965001",
        "13427688667394608761327070753331941386769",
    ],
};

/// The 64-bit Goldilocks field `2^64 - 2^32 + 1`.
pub const GOLDILOCKS: FieldPreset = FieldPreset {
    name: "goldilocks",
    modulus: "0xffffffff00000001",
    q_minus_one_factors: &["2", "3", "5", "17", "257", "65537"],
};

/// Every preset, default first.
pub const ALL: [&FieldPreset; 3] = [&BN254_SCALAR, &BN254_BASE, &GOLDILOCKS];
