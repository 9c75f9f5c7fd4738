//! Register: DISP_SIZE

/// DISP_SIZE
///
/// Panel dimensions in pixels. Must be non-zero before the display is
/// enabled. Commits immediately, not shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DispSizeReg(u32);

impl core::default::Default for DispSizeReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DispSizeReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl DispSizeReg {
    pub const DELTA_X_OFFSET: usize = 0;
    pub const DELTA_X_WIDTH: usize = 13;
    pub const DELTA_X_MASK: u32 = 0x1FFF;

    /// DELTA_X
    #[inline(always)]
    #[must_use]
    pub fn delta_x(&self) -> u16 {
        ((self.0 >> Self::DELTA_X_OFFSET) & Self::DELTA_X_MASK) as u16
    }

    /// DELTA_X
    #[inline(always)]
    pub fn set_delta_x(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DELTA_X_MASK << Self::DELTA_X_OFFSET))
            | ((val & Self::DELTA_X_MASK) << Self::DELTA_X_OFFSET);
    }

    pub const DELTA_Y_OFFSET: usize = 16;
    pub const DELTA_Y_WIDTH: usize = 13;
    pub const DELTA_Y_MASK: u32 = 0x1FFF;

    /// DELTA_Y
    #[inline(always)]
    #[must_use]
    pub fn delta_y(&self) -> u16 {
        ((self.0 >> Self::DELTA_Y_OFFSET) & Self::DELTA_Y_MASK) as u16
    }

    /// DELTA_Y
    #[inline(always)]
    pub fn set_delta_y(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DELTA_Y_MASK << Self::DELTA_Y_OFFSET))
            | ((val & Self::DELTA_Y_MASK) << Self::DELTA_Y_OFFSET);
    }
}

impl core::fmt::Debug for DispSizeReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispSizeReg")
            .field("delta_x", &self.delta_x())
            .field("delta_y", &self.delta_y())
            .finish()
    }
}
