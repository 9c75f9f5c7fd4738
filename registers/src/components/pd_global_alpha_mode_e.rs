//! Field Enum: PD_GLOBAL_ALPHA_MODE

/// Porter-Duff global alpha source selection.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PdGlobalAlphaModeE {
    /// Use the global alpha value
    Global = 0,
    /// Use the per-pixel (local) alpha value
    Local = 1,
    /// Use the per-pixel alpha scaled by the global alpha
    Scaled = 2,
}

impl PdGlobalAlphaModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Global),
            1 => Ok(Self::Local),
            2 => Ok(Self::Scaled),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
