use crate::generator::Generator;
use shortly_core::shortcode::{ALPHABET, CODE_LENGTH};
use shortly_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A collision-free short code generator using a monotonic counter.
///
/// Each counter value is encoded in the base-36 alphabet and zero-padded
/// to the fixed code length, so codes come out as "000000", "000001", ...
/// Uniqueness holds within a single instance; nothing is persisted.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    fn encode(mut value: u64) -> String {
        let base = ALPHABET.len() as u64;
        let mut digits = [b'0'; CODE_LENGTH];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(value % base) as usize];
            value /= base;
        }
        // Values past 36^6 wrap around; the registry's occupancy check
        // still rejects any code that is currently in use.
        String::from_utf8_lossy(&digits).into_owned()
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SequentialGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(Self::encode(count))
    }
}
