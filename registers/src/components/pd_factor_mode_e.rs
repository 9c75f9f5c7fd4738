//! Field Enum: PD_FACTOR_MODE

/// Porter-Duff blend factor selection.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PdFactorModeE {
    /// Factor 1
    One = 0,
    /// Factor 0
    Zero = 1,
    /// Straight alpha
    StraightAlpha = 2,
    /// Inversed alpha
    InversedAlpha = 3,
}

impl PdFactorModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::One),
            1 => Ok(Self::Zero),
            2 => Ok(Self::StraightAlpha),
            3 => Ok(Self::InversedAlpha),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
