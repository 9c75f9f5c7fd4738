//! Field enum encode/decode support.

/// A bit pattern that does not correspond to any encoded enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant<T> {
    bits: T,
}

impl<T> UnknownVariant<T> {
    #[must_use]
    pub const fn new(bits: T) -> Self {
        Self { bits }
    }
}

impl<T: Copy> UnknownVariant<T> {
    /// The offending bit pattern.
    #[must_use]
    pub fn bits(&self) -> T {
        self.bits
    }
}
