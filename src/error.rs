//! Error type shared by every stage of parameter generation.

use core::fmt;

use num_bigint::BigUint;

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, ParamsError>;

/// Failures surfaced while deriving or checking an Anemoi parameter set.
///
/// None of these are transient: each one reflects an invalid or unsupported
/// configuration, so callers are expected to report rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The field modulus failed the primality test.
    InvalidModulus {
        /// Rejected modulus.
        modulus: BigUint,
    },
    /// Every candidate below the modulus was tried without finding a generator.
    NoGeneratorFound,
    /// The operand has no inverse because `gcd(value, modulus) != 1`.
    NoInverseExists {
        /// Value that was to be inverted.
        value: BigUint,
        /// Modulus of the inversion.
        modulus: BigUint,
    },
    /// No round count is defined for this column count and S-box exponent,
    /// or the exponent does not give a bijective S-box over the field.
    UnsupportedConfiguration {
        /// Requested number of columns.
        n_inputs: usize,
        /// Requested S-box exponent.
        alpha: u32,
        /// Which constraint was violated.
        reason: &'static str,
    },
    /// A bounded search spent its iteration budget without an answer.
    SearchExhausted {
        /// Number of iterations performed before giving up.
        iterations: u64,
    },
    /// An arkworks field with a different modulus was requested.
    FieldMismatch {
        /// Modulus of the parameter set.
        expected: BigUint,
        /// Modulus of the target field.
        got: BigUint,
    },
    /// Text could not be parsed as a non-negative integer.
    MalformedInteger {
        /// Offending input.
        input: String,
    },
    /// A parameter set or deserialized record does not satisfy its invariants.
    InconsistentRecord {
        /// Name of the first field found to be inconsistent.
        field: &'static str,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::InvalidModulus { modulus } => {
                write!(f, "field modulus {} is not prime", modulus)
            }
            ParamsError::NoGeneratorFound => {
                write!(f, "no generator of the multiplicative group was found")
            }
            ParamsError::NoInverseExists { value, modulus } => {
                write!(f, "{} has no inverse modulo {}", value, modulus)
            }
            ParamsError::UnsupportedConfiguration {
                n_inputs,
                alpha,
                reason,
            } => write!(
                f,
                "unsupported configuration (columns = {}, alpha = {}): {}",
                n_inputs, alpha, reason
            ),
            ParamsError::SearchExhausted { iterations } => {
                write!(f, "search budget exhausted after {} iterations", iterations)
            }
            ParamsError::FieldMismatch { expected, got } => write!(
                f,
                "field modulus mismatch: expected {}, got {}",
                expected, got
            ),
            ParamsError::MalformedInteger { input } => {
                write!(f, "malformed integer literal {:?}", input)
            }
            ParamsError::InconsistentRecord { field } => {
                write!(f, "field `{}` is inconsistent", field)
            }
        }
    }
}

impl std::error::Error for ParamsError {}
