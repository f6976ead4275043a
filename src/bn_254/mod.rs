pub use ark_bn254::Fq as BaseFelt;
pub use ark_bn254::Fr as Felt;

pub use crate::presets::{BN254_BASE as BASE_FIELD, BN254_SCALAR as SCALAR_FIELD};

// DEFAULT INSTANTIATION
// ================================================================================================

/// S-box exponent used by the BN-254 scalar field circuits.
pub const ALPHA: u32 = 5;

/// Column count supported by the current circuits.
pub const NUM_COLUMNS: usize = 1;

/// Returns the configuration for the BN-254 scalar field with [`ALPHA`] and
/// [`NUM_COLUMNS`].
pub fn default_config() -> crate::Result<crate::ParamsConfig> {
    crate::ParamsConfig::from_preset(&SCALAR_FIELD, ALPHA, NUM_COLUMNS)
}
