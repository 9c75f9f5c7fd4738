//! Register: CSC_COEF0

/// CSC_COEF0
///
/// Per-layer color space conversion, word 0: luma and chroma input
/// offsets, the C0 luma coefficient, the YCbCr range select, and the
/// conversion enable. Coefficients are unsigned fixed point with two
/// integer bits and eight fractional bits. Commits immediately, not
/// shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CscCoef0Reg(u32);

impl core::default::Default for CscCoef0Reg {
    fn default() -> Self {
        Self(0x0400_0000)
    }
}

impl crate::reg::Register for CscCoef0Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CscCoef0Reg {
    pub const Y_OFFSET_OFFSET: usize = 0;
    pub const Y_OFFSET_WIDTH: usize = 9;
    pub const Y_OFFSET_MASK: u32 = 0x1FF;

    /// Y_OFFSET
    #[inline(always)]
    #[must_use]
    pub fn y_offset(&self) -> u16 {
        ((self.0 >> Self::Y_OFFSET_OFFSET) & Self::Y_OFFSET_MASK) as u16
    }

    /// Y_OFFSET
    #[inline(always)]
    pub fn set_y_offset(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::Y_OFFSET_MASK << Self::Y_OFFSET_OFFSET))
            | ((val & Self::Y_OFFSET_MASK) << Self::Y_OFFSET_OFFSET);
    }

    pub const UV_OFFSET_OFFSET: usize = 9;
    pub const UV_OFFSET_WIDTH: usize = 9;
    pub const UV_OFFSET_MASK: u32 = 0x1FF;

    /// UV_OFFSET
    #[inline(always)]
    #[must_use]
    pub fn uv_offset(&self) -> u16 {
        ((self.0 >> Self::UV_OFFSET_OFFSET) & Self::UV_OFFSET_MASK) as u16
    }

    /// UV_OFFSET
    #[inline(always)]
    pub fn set_uv_offset(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::UV_OFFSET_MASK << Self::UV_OFFSET_OFFSET))
            | ((val & Self::UV_OFFSET_MASK) << Self::UV_OFFSET_OFFSET);
    }

    pub const C0_OFFSET: usize = 18;
    pub const C0_WIDTH: usize = 11;
    pub const C0_MASK: u32 = 0x7FF;

    /// C0
    #[inline(always)]
    #[must_use]
    pub fn c0(&self) -> u16 {
        ((self.0 >> Self::C0_OFFSET) & Self::C0_MASK) as u16
    }

    /// C0
    #[inline(always)]
    pub fn set_c0(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::C0_MASK << Self::C0_OFFSET))
            | ((val & Self::C0_MASK) << Self::C0_OFFSET);
    }

    pub const YCBCR_MODE_OFFSET: usize = 30;
    pub const YCBCR_MODE_WIDTH: usize = 1;
    pub const YCBCR_MODE_MASK: u32 = 0x1;

    /// YCBCR_MODE
    ///
    /// Limited-range YCbCr input when set, full-range YUV when clear.
    #[inline(always)]
    #[must_use]
    pub fn ycbcr_mode(&self) -> bool {
        ((self.0 >> Self::YCBCR_MODE_OFFSET) & Self::YCBCR_MODE_MASK) != 0
    }

    /// YCBCR_MODE
    #[inline(always)]
    pub fn set_ycbcr_mode(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::YCBCR_MODE_MASK << Self::YCBCR_MODE_OFFSET))
            | ((val & Self::YCBCR_MODE_MASK) << Self::YCBCR_MODE_OFFSET);
    }

    pub const ENABLE_OFFSET: usize = 31;
    pub const ENABLE_WIDTH: usize = 1;
    pub const ENABLE_MASK: u32 = 0x1;

    /// ENABLE
    #[inline(always)]
    #[must_use]
    pub fn enable(&self) -> bool {
        ((self.0 >> Self::ENABLE_OFFSET) & Self::ENABLE_MASK) != 0
    }

    /// ENABLE
    #[inline(always)]
    pub fn set_enable(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ENABLE_MASK << Self::ENABLE_OFFSET))
            | ((val & Self::ENABLE_MASK) << Self::ENABLE_OFFSET);
    }
}

impl core::fmt::Debug for CscCoef0Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CscCoef0Reg")
            .field("y_offset", &self.y_offset())
            .field("uv_offset", &self.uv_offset())
            .field("c0", &self.c0())
            .field("ycbcr_mode", &self.ycbcr_mode())
            .field("enable", &self.enable())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = CscCoef0Reg::default();
        assert_eq!(reg.y_offset(), 0);
        assert_eq!(reg.uv_offset(), 0);
        assert_eq!(reg.c0(), 0x100);
        assert!(!reg.ycbcr_mode());
        assert!(!reg.enable());
    }
}
