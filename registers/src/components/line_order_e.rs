//! Field Enum: LINE_PATTERN

/// Output pixel line order, the RGB channel permutation driven on the
/// parallel interface.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineOrderE {
    /// R, G, B
    Rgb = 0,
    /// R, B, G
    Rbg = 1,
    /// G, B, R
    Gbr = 2,
    /// G, R, B
    Grb = 3,
    /// B, R, G
    Brg = 4,
    /// B, G, R
    Bgr = 5,
}

impl LineOrderE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Rbg),
            2 => Ok(Self::Gbr),
            3 => Ok(Self::Grb),
            4 => Ok(Self::Brg),
            5 => Ok(Self::Bgr),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
