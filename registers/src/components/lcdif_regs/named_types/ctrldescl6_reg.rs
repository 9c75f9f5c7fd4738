//! Register: CTRLDESCL6

/// CTRLDESCL6
///
/// Layer background color, substituted into the blend when the layer is
/// not active. Shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL6Reg(u32);

impl core::default::Default for CtrlDescL6Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL6Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL6Reg {
    pub const BCLR_OFFSET: usize = 0;
    pub const BCLR_WIDTH: usize = 32;
    pub const BCLR_MASK: u32 = 0xFFFF_FFFF;

    /// BCLR
    #[inline(always)]
    #[must_use]
    pub fn bclr(&self) -> u32 {
        self.0
    }

    /// BCLR
    #[inline(always)]
    pub fn set_bclr(&mut self, val: u32) {
        self.0 = val;
    }
}

impl core::fmt::Debug for CtrlDescL6Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL6Reg")
            .field("bclr", &self.bclr())
            .finish()
    }
}
