//! Field Enum: AB_MODE

/// Layer alpha blending mode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlphaModeE {
    /// No blending; the safety path carries the layer through
    Disabled = 0,
    /// Global alpha value overrides any per-pixel alpha
    GlobalOverride = 1,
    /// Per-pixel alpha embedded in the source format
    Embedded = 2,
    /// Porter-Duff compositing using the PD_* fields
    PorterDuff = 3,
}

impl AlphaModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::GlobalOverride),
            2 => Ok(Self::Embedded),
            3 => Ok(Self::PorterDuff),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
