//! Register: CTRLDESCL1

/// CTRLDESCL1
///
/// Layer width and height in pixels. Shadow-loaded: takes effect at the
/// vertical blank following the layer's shadow-load trigger.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL1Reg(u32);

impl core::default::Default for CtrlDescL1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL1Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL1Reg {
    pub const WIDTH_OFFSET: usize = 0;
    pub const WIDTH_WIDTH: usize = 16;
    pub const WIDTH_MASK: u32 = 0xFFFF;

    /// WIDTH
    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u16 {
        ((self.0 >> Self::WIDTH_OFFSET) & Self::WIDTH_MASK) as u16
    }

    /// WIDTH
    #[inline(always)]
    pub fn set_width(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::WIDTH_MASK << Self::WIDTH_OFFSET))
            | ((val & Self::WIDTH_MASK) << Self::WIDTH_OFFSET);
    }

    pub const HEIGHT_OFFSET: usize = 16;
    pub const HEIGHT_WIDTH: usize = 16;
    pub const HEIGHT_MASK: u32 = 0xFFFF;

    /// HEIGHT
    #[inline(always)]
    #[must_use]
    pub fn height(&self) -> u16 {
        ((self.0 >> Self::HEIGHT_OFFSET) & Self::HEIGHT_MASK) as u16
    }

    /// HEIGHT
    #[inline(always)]
    pub fn set_height(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HEIGHT_MASK << Self::HEIGHT_OFFSET))
            | ((val & Self::HEIGHT_MASK) << Self::HEIGHT_OFFSET);
    }
}

impl core::fmt::Debug for CtrlDescL1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL1Reg")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
