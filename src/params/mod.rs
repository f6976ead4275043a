//! Assembly of a complete Anemoi parameter set.
//!
//! [`assemble`] runs the whole pipeline for one [`ParamsConfig`]:
//!
//! 1. the modulus must pass the primality test, otherwise nothing else runs;
//! 2. a generator `g` of the multiplicative group is searched for;
//! 3. `g` is inverted modulo `q`;
//! 4. the round count is read from the security table;
//! 5. `alpha` is checked against `q - 1` and inverted;
//! 6. the `C` and `D` round constants are generated.
//!
//! The result is an immutable [`ParameterSet`]. Every call is a pure function
//! of its configuration; only [`State`] sampling draws randomness, and it is
//! kept out of the parameter set.

use log::{debug, info};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::RngCore;

use crate::arith::mod_inverse;
use crate::generator::{is_generator, FactorizationSearch};
use crate::presets::FieldPreset;
use crate::primality::{is_prime, MillerRabin};
use crate::round_constants::RoundConstants;
use crate::rounds::num_rounds;
use crate::state::State;
use crate::{GeneratorSearch, ParamsError, PrimalityTest, Result};

mod record;
mod ser;

pub use record::InputRecord;

/// Modulus used to invert the S-box exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InverseExponentModulus {
    /// `alpha^-1 mod q`. This is what existing circuits consume.
    #[default]
    FieldModulus,
    /// `alpha^-1 mod (q - 1)`, the exponent that inverts `x -> x^alpha`.
    GroupOrder,
}

// CONFIGURATION
// ================================================================================================

/// Inputs of the parameter generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsConfig {
    /// Prime field modulus `q`.
    pub modulus: BigUint,
    /// S-box exponent.
    pub alpha: u32,
    /// Number of state columns.
    pub n_inputs: usize,
    /// Modulus used to invert `alpha`.
    pub inverse_exponent: InverseExponentModulus,
    /// Known prime factors of `q - 1`, used to speed up generator search.
    pub q_minus_one_factors: Vec<BigUint>,
    /// Generator candidates tried before giving up.
    pub max_candidates: u64,
    /// Pollard-rho steps allowed when factoring `q - 1`.
    pub rho_iterations: u64,
}

impl ParamsConfig {
    /// Returns a configuration with default search budgets.
    pub fn new(modulus: BigUint, alpha: u32, n_inputs: usize) -> Self {
        Self {
            modulus,
            alpha,
            n_inputs,
            inverse_exponent: InverseExponentModulus::default(),
            q_minus_one_factors: Vec::new(),
            max_candidates: crate::generator::DEFAULT_MAX_CANDIDATES,
            rho_iterations: crate::generator::DEFAULT_RHO_ITERATIONS,
        }
    }

    /// Returns a configuration over a preset field, including the known
    /// factorization of its group order.
    pub fn from_preset(preset: &FieldPreset, alpha: u32, n_inputs: usize) -> Result<Self> {
        Ok(Self::new(preset.modulus()?, alpha, n_inputs)
            .with_q_minus_one_factors(preset.q_minus_one_factors()?))
    }

    /// Selects the modulus used to invert `alpha`.
    pub fn with_inverse_exponent(mut self, inverse_exponent: InverseExponentModulus) -> Self {
        self.inverse_exponent = inverse_exponent;
        self
    }

    /// Provides known prime factors of `q - 1`.
    pub fn with_q_minus_one_factors(mut self, factors: Vec<BigUint>) -> Self {
        self.q_minus_one_factors = factors;
        self
    }

    /// Sets the generator search budgets.
    pub fn with_search_budget(mut self, max_candidates: u64, rho_iterations: u64) -> Self {
        self.max_candidates = max_candidates;
        self.rho_iterations = rho_iterations;
        self
    }

    /// Returns the generator search this configuration describes.
    pub fn generator_search(&self) -> FactorizationSearch {
        FactorizationSearch::new()
            .with_known_factors(self.q_minus_one_factors.clone())
            .with_max_candidates(self.max_candidates)
            .with_rho_iterations(self.rho_iterations)
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer. Underscores are
/// ignored.
pub fn parse_biguint(input: &str) -> Result<BigUint> {
    let cleaned: String = input.trim().chars().filter(|c| *c != '_').collect();
    let (digits, radix) = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (cleaned.as_str(), 10),
    };

    BigUint::parse_bytes(digits.as_bytes(), radix)
        .filter(|_| !digits.is_empty())
        .ok_or_else(|| ParamsError::MalformedInteger {
            input: input.to_string(),
        })
}

// PARAMETER SET
// ================================================================================================

/// A complete, internally consistent set of Anemoi public parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    q: BigUint,
    alpha: u32,
    inv_alpha: BigUint,
    inverse_exponent: InverseExponentModulus,
    n_inputs: usize,
    num_rounds: usize,
    g: BigUint,
    inv_g: BigUint,
    constants: RoundConstants,
}

impl ParameterSet {
    /// Derives everything that follows from a known generator and its inverse:
    /// round count, inverse exponent and round constants.
    pub(crate) fn derive(config: &ParamsConfig, g: BigUint, inv_g: BigUint) -> Result<Self> {
        let q = &config.modulus;
        let (alpha, n_inputs) = (config.alpha, config.n_inputs);

        let num_rounds = num_rounds(n_inputs, alpha)?;
        debug!("using {} rounds", num_rounds);

        let alpha_big = BigUint::from(alpha);
        let order = q - 1u32;
        if !alpha_big.gcd(&order).is_one() {
            return Err(ParamsError::UnsupportedConfiguration {
                n_inputs,
                alpha,
                reason: "S-box exponent must be coprime with q - 1",
            });
        }
        let inv_alpha = match config.inverse_exponent {
            InverseExponentModulus::FieldModulus => mod_inverse(&alpha_big, q)?,
            InverseExponentModulus::GroupOrder => mod_inverse(&alpha_big, &order)?,
        };
        debug!("inverse of alpha = {} is {}", alpha, inv_alpha);

        let constants = RoundConstants::generate(&inv_alpha, &g, &inv_g, q, num_rounds, n_inputs);

        Ok(Self {
            q: q.clone(),
            alpha,
            inv_alpha,
            inverse_exponent: config.inverse_exponent,
            n_inputs,
            num_rounds,
            g,
            inv_g,
            constants,
        })
    }

    /// Field modulus `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Always `true`: a parameter set only exists for a prime modulus.
    pub fn is_prime(&self) -> bool {
        true
    }

    /// S-box exponent.
    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    /// Inverse of the S-box exponent.
    pub fn inv_alpha(&self) -> &BigUint {
        &self.inv_alpha
    }

    /// Modulus `inv_alpha` was computed against.
    pub fn inverse_exponent(&self) -> InverseExponentModulus {
        self.inverse_exponent
    }

    /// Number of state columns.
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Number of rounds.
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// Generator of the multiplicative group.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Inverse of the generator modulo `q`.
    pub fn inv_g(&self) -> &BigUint {
        &self.inv_g
    }

    /// Round constants.
    pub fn constants(&self) -> &RoundConstants {
        &self.constants
    }

    /// Samples a random initial state over this field.
    pub fn sample_state<R: RngCore + ?Sized>(&self, rng: &mut R) -> State {
        State::sample(self.n_inputs, &self.q, rng)
    }

    /// Re-verifies every invariant of the set against a fresh computation.
    ///
    /// `q_minus_one_factors` are factorization hints for the group order, as
    /// in [`ParamsConfig::with_q_minus_one_factors`].
    pub fn check(&self, q_minus_one_factors: &[BigUint]) -> Result<()> {
        let inconsistent = |field| Err(ParamsError::InconsistentRecord { field });
        let q = &self.q;

        let search = FactorizationSearch::new().with_known_factors(q_minus_one_factors.to_vec());
        check_group(q, &self.g, &self.inv_g, &search)?;

        if self.num_rounds != num_rounds(self.n_inputs, self.alpha)? {
            return inconsistent("numRounds");
        }

        let inverse_modulus = match self.inverse_exponent {
            InverseExponentModulus::FieldModulus => q.clone(),
            InverseExponentModulus::GroupOrder => q - 1u32,
        };
        if !((&self.inv_alpha * self.alpha) % inverse_modulus).is_one() {
            return inconsistent("inv_alpha");
        }

        let expected = RoundConstants::generate(
            &self.inv_alpha,
            &self.g,
            &self.inv_g,
            q,
            self.num_rounds,
            self.n_inputs,
        );
        if expected.c() != self.constants.c() {
            return inconsistent("roundConstantC");
        }
        if expected.d() != self.constants.d() {
            return inconsistent("roundConstantD");
        }

        Ok(())
    }
}

/// Checks that `q` is prime, that `g` generates its multiplicative group and
/// that `inv_g` is the inverse of `g`.
pub(crate) fn check_group(
    q: &BigUint,
    g: &BigUint,
    inv_g: &BigUint,
    search: &FactorizationSearch,
) -> Result<()> {
    let inconsistent = |field| Err(ParamsError::InconsistentRecord { field });

    if !is_prime(q) {
        return inconsistent("isPrime");
    }
    let factors = search.order_factors(q)?;
    if !is_generator(g, q, &factors) {
        return inconsistent("g");
    }
    if inv_g >= q || (g * inv_g) % q != BigUint::one() {
        return inconsistent("inv_g");
    }

    Ok(())
}

// ASSEMBLY
// ================================================================================================

/// Builds the parameter set for `config` with [`MillerRabin`] and the
/// configured [`FactorizationSearch`].
pub fn assemble(config: &ParamsConfig) -> Result<ParameterSet> {
    assemble_with(config, &MillerRabin::default(), &config.generator_search())
}

/// Builds the parameter set for `config` with the given primality test and
/// generator search.
pub fn assemble_with<P, G>(config: &ParamsConfig, primality: &P, search: &G) -> Result<ParameterSet>
where
    P: PrimalityTest + ?Sized,
    G: GeneratorSearch + ?Sized,
{
    let q = &config.modulus;
    info!(
        "generating Anemoi parameters (alpha = {}, columns = {})",
        config.alpha, config.n_inputs
    );

    if !primality.is_prime(q) {
        return Err(ParamsError::InvalidModulus { modulus: q.clone() });
    }
    debug!("modulus {} is prime", q);

    let g = search.find_generator(q)?;
    // a custom search must still hand back an element of order q - 1
    let order_factors = config.generator_search().order_factors(q)?;
    if !is_generator(&g, q, &order_factors) {
        return Err(ParamsError::NoGeneratorFound);
    }
    debug!("generator g = {}", g);

    let inv_g = mod_inverse(&g, q)?;
    debug!("inverse generator = {}", inv_g);

    let params = ParameterSet::derive(config, g, inv_g)?;
    info!(
        "generated {} x {} round constants",
        params.num_rounds, params.n_inputs
    );

    Ok(params)
}

/// Builds the parameter set and a random state, packaged as the external
/// record.
pub fn generate_input_record<R: RngCore + ?Sized>(
    config: &ParamsConfig,
    rng: &mut R,
) -> Result<InputRecord> {
    let params = assemble(config)?;
    let state = params.sample_state(rng);

    Ok(InputRecord::new(&params, &state))
}
