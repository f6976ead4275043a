//! Number of rounds required for 128-bit security.

use crate::{ParamsError, Result};

/// S-box exponents with a round count entry, in table column order.
pub const SUPPORTED_ALPHAS: [u32; 4] = [3, 5, 7, 11];

/// Column counts with a round count entry.
pub const SUPPORTED_COLUMNS: [usize; 6] = [1, 2, 3, 4, 6, 8];

/// Rounds per column count (rows) and S-box exponent (columns).
/// The last row applies to eight columns.
const ROUNDS: [[usize; 4]; 5] = [
    [21, 21, 20, 19],
    [14, 14, 13, 13],
    [12, 12, 12, 11],
    [12, 12, 11, 11],
    [10, 10, 10, 10],
];

/// Six columns need 10 rounds whatever the exponent.
const ROUNDS_SIX_COLUMNS: usize = 10;

/// Returns the number of rounds for `n_inputs` columns and S-box exponent
/// `alpha`, or [`ParamsError::UnsupportedConfiguration`] if the pair has no
/// entry.
pub fn num_rounds(n_inputs: usize, alpha: u32) -> Result<usize> {
    let unsupported = |reason| ParamsError::UnsupportedConfiguration {
        n_inputs,
        alpha,
        reason,
    };

    let column = SUPPORTED_ALPHAS
        .iter()
        .position(|&a| a == alpha)
        .ok_or_else(|| unsupported("S-box exponent must be one of 3, 5, 7, 11"))?;

    match n_inputs {
        1..=4 => Ok(ROUNDS[n_inputs - 1][column]),
        6 => Ok(ROUNDS_SIX_COLUMNS),
        8 => Ok(ROUNDS[4][column]),
        _ => Err(unsupported("column count must be one of 1, 2, 3, 4, 6, 8")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let expected: [(usize, [usize; 4]); 6] = [
            (1, [21, 21, 20, 19]),
            (2, [14, 14, 13, 13]),
            (3, [12, 12, 12, 11]),
            (4, [12, 12, 11, 11]),
            (6, [10, 10, 10, 10]),
            (8, [10, 10, 10, 10]),
        ];
        for (n_inputs, row) in expected {
            for (alpha, rounds) in SUPPORTED_ALPHAS.iter().zip(row) {
                assert_eq!(num_rounds(n_inputs, *alpha), Ok(rounds));
            }
        }
    }

    #[test]
    fn test_unsupported() {
        for n_inputs in [0, 5, 7, 9, 16] {
            assert!(matches!(
                num_rounds(n_inputs, 3),
                Err(ParamsError::UnsupportedConfiguration { n_inputs: n, alpha: 3, .. }) if n == n_inputs
            ));
        }
        for alpha in [0, 1, 2, 4, 9, 13, 17] {
            assert!(matches!(
                num_rounds(1, alpha),
                Err(ParamsError::UnsupportedConfiguration { .. })
            ));
        }
    }
}
