pub mod random;
pub mod seq;

use shortly_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with the
/// registry: none of them promises a code is unused. The registry
/// performs the generate-and-check loop against its own contents.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Generates a type that can be converted into a short code.
    fn generate(&self) -> Self::Output;
}
