//! This crate derives the public parameters of the Anemoi permutation over
//! an arbitrary prime field: a generator of the multiplicative group and its
//! inverse, the inverse S-box exponent, the number of rounds, and the `C` and
//! `D` round constant matrices. A random initial state can be sampled
//! alongside for test vectors.
//!
//! The primality test and the generator search are defined by the
//! [`PrimalityTest`] and [`GeneratorSearch`] traits, so the naive algorithms
//! used for toy fields can be swapped for the factorization-based ones that
//! cryptographic moduli require.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod error;
pub use error::{ParamsError, Result};

mod traits;
pub use traits::*;

/// Modular exponentiation, extended Euclid and modular inversion.
pub mod arith;

/// Arkworks field element conversions.
pub mod felt;

/// Generator search over the multiplicative group of a prime field.
pub mod generator;

/// Parameter set assembly and the external JSON record.
pub mod params;

/// Well-known prime fields.
pub mod presets;

/// Primality tests.
pub mod primality;

/// Round constant generation.
pub mod round_constants;

/// Round count table.
pub mod rounds;

/// Random initial state.
pub mod state;

/// Anemoi parameters over the BN-254 scalar and base fields.
#[cfg(feature = "bn_254")]
pub mod bn_254;

pub use felt::FieldParameters;
pub use generator::{BruteForceSearch, FactorizationSearch};
pub use params::{
    assemble, assemble_with, generate_input_record, parse_biguint, InputRecord,
    InverseExponentModulus, ParameterSet, ParamsConfig,
};
pub use presets::FieldPreset;
pub use primality::{MillerRabin, TrialDivision};
pub use round_constants::RoundConstants;
pub use state::State;
