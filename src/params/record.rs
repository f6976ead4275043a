//! The JSON document consumed by Anemoi circuits and test harnesses.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::ser::{decimal, decimal_matrix, decimal_seq};
use super::{check_group, ParameterSet, ParamsConfig};
use crate::state::State;
use crate::{ParamsError, Result};

/// Parameter set plus initial state, in the layout of `input.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Generator of the multiplicative group.
    #[serde(with = "decimal")]
    pub g: BigUint,
    /// Inverse of `g` modulo `q`.
    #[serde(with = "decimal")]
    pub inv_g: BigUint,
    /// Field modulus.
    #[serde(with = "decimal")]
    pub q: BigUint,
    /// Primality flag of `q`.
    #[serde(rename = "isPrime")]
    pub is_prime: bool,
    /// First state row.
    #[serde(rename = "X", with = "decimal_seq")]
    pub x: Vec<BigUint>,
    /// Second state row.
    #[serde(rename = "Y", with = "decimal_seq")]
    pub y: Vec<BigUint>,
    /// `C` round constants, one row per round.
    #[serde(rename = "roundConstantC", with = "decimal_matrix")]
    pub round_constant_c: Vec<Vec<BigUint>>,
    /// `D` round constants, one row per round.
    #[serde(rename = "roundConstantD", with = "decimal_matrix")]
    pub round_constant_d: Vec<Vec<BigUint>>,
}

impl InputRecord {
    /// Packages a parameter set and a state.
    pub fn new(params: &ParameterSet, state: &State) -> Self {
        Self {
            g: params.g().clone(),
            inv_g: params.inv_g().clone(),
            q: params.q().clone(),
            is_prime: params.is_prime(),
            x: state.x.clone(),
            y: state.y.clone(),
            round_constant_c: params.constants().c().to_vec(),
            round_constant_d: params.constants().d().to_vec(),
        }
    }

    /// Returns the record as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The state rows of this record.
    pub fn state(&self) -> State {
        State {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }

    /// Checks the record against the configuration it claims to follow.
    ///
    /// The generator may be any generator, not necessarily the smallest one,
    /// but the round constants must match a recomputation from the recorded
    /// `g` and `inv_g`.
    pub fn verify(&self, config: &ParamsConfig) -> Result<()> {
        let inconsistent = |field| Err(ParamsError::InconsistentRecord { field });
        let q = &self.q;

        if *q != config.modulus {
            return inconsistent("q");
        }
        if !self.is_prime {
            return inconsistent("isPrime");
        }
        check_group(q, &self.g, &self.inv_g, &config.generator_search())?;

        for (field, row) in [("X", &self.x), ("Y", &self.y)] {
            if row.len() != config.n_inputs || row.iter().any(|v| v >= q) {
                return inconsistent(field);
            }
        }

        let expected = ParameterSet::derive(config, self.g.clone(), self.inv_g.clone())?;
        if self.round_constant_c != expected.constants().c() {
            return inconsistent("roundConstantC");
        }
        if self.round_constant_d != expected.constants().d() {
            return inconsistent("roundConstantD");
        }

        Ok(())
    }
}
