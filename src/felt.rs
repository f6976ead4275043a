//! Conversion of a parameter set into arkworks field elements, so generated
//! constants can be plugged into an Anemoi instantiation over a concrete
//! field type.

use ark_ff::{BigInteger, FpParameters, PrimeField};
use num_bigint::BigUint;

use crate::params::ParameterSet;
use crate::state::State;
use crate::{ParamsError, Result};

/// Returns the modulus of the prime field `F`.
pub fn field_modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&<F::Params as FpParameters>::MODULUS.to_bytes_le())
}

/// Returns `value mod p` as an element of `F`.
pub fn to_felt<F: PrimeField>(value: &BigUint) -> F {
    F::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Returns the canonical integer representative of `felt`.
pub fn from_felt<F: PrimeField>(felt: &F) -> BigUint {
    BigUint::from_bytes_le(&felt.into_repr().to_bytes_le())
}

/// A parameter set expressed over the field type `F`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParameters<F: PrimeField> {
    /// S-box exponent.
    pub alpha: u32,
    /// Inverse of the S-box exponent, reduced into the field.
    pub inv_alpha: F,
    /// Generator of the multiplicative group.
    pub g: F,
    /// Inverse of the generator.
    pub inv_g: F,
    /// `C` round constants, one row per round.
    pub c: Vec<Vec<F>>,
    /// `D` round constants, one row per round.
    pub d: Vec<Vec<F>>,
}

fn to_felt_matrix<F: PrimeField>(rows: &[Vec<BigUint>]) -> Vec<Vec<F>> {
    rows.iter()
        .map(|row| row.iter().map(to_felt::<F>).collect())
        .collect()
}

fn check_modulus<F: PrimeField>(q: &BigUint) -> Result<()> {
    let got = field_modulus::<F>();
    if *q != got {
        return Err(ParamsError::FieldMismatch {
            expected: q.clone(),
            got,
        });
    }
    Ok(())
}

impl ParameterSet {
    /// Converts the parameter set into elements of `F`, which must have the
    /// same modulus.
    pub fn to_field_elements<F: PrimeField>(&self) -> Result<FieldParameters<F>> {
        check_modulus::<F>(self.q())?;

        Ok(FieldParameters {
            alpha: self.alpha(),
            inv_alpha: to_felt(self.inv_alpha()),
            g: to_felt(self.g()),
            inv_g: to_felt(self.inv_g()),
            c: to_felt_matrix(self.constants().c()),
            d: to_felt_matrix(self.constants().d()),
        })
    }
}

impl State {
    /// Converts both rows into elements of `F`, whose modulus must be `q`.
    pub fn to_field_elements<F: PrimeField>(&self, q: &BigUint) -> Result<(Vec<F>, Vec<F>)> {
        check_modulus::<F>(q)?;

        Ok((
            self.x.iter().map(to_felt::<F>).collect(),
            self.y.iter().map(to_felt::<F>).collect(),
        ))
    }
}
