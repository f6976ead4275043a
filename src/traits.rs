use num_bigint::BigUint;

use crate::Result;

/// Trait for implementing a primality verdict on a candidate field modulus.
pub trait PrimalityTest {
    /// Returns `true` if `n` is prime. Never fails; inputs `<= 1` are not prime.
    fn is_prime(&self, n: &BigUint) -> bool;
}

/// Trait for implementing a search for a generator of the multiplicative
/// group of a prime field.
pub trait GeneratorSearch {
    /// Returns an element of order exactly `q - 1` modulo the prime `q`.
    fn find_generator(&self, q: &BigUint) -> Result<BigUint>;
}
