use crate::generator::Generator;
use rand::Rng;
use shortly_core::shortcode::{ALPHABET, CODE_LENGTH};
use shortly_core::ShortCode;

/// A short code generator drawing uniformly from the base-36 alphabet.
///
/// Uses the thread-local (unseeded, non-cryptographic) random source.
/// Codes are not guaranteed unique; the registry checks candidates
/// against its current contents before accepting one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
