//! Field Enum: WR_CTRL.BPP

/// Store (write-back) pixel format.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreFormatE {
    /// 32-bpp ARGB8888
    Argb8888 = 0,
    /// 24-bpp packed RGB888
    Rgb888 = 1,
}

impl StoreFormatE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Argb8888),
            1 => Ok(Self::Rgb888),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
