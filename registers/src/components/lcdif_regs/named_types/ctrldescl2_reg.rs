//! Register: CTRLDESCL2

/// CTRLDESCL2
///
/// Layer position in the composited output frame, offsets from the top
/// left. Shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL2Reg(u32);

impl core::default::Default for CtrlDescL2Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL2Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL2Reg {
    pub const POSX_OFFSET: usize = 0;
    pub const POSX_WIDTH: usize = 16;
    pub const POSX_MASK: u32 = 0xFFFF;

    /// POSX
    #[inline(always)]
    #[must_use]
    pub fn posx(&self) -> u16 {
        ((self.0 >> Self::POSX_OFFSET) & Self::POSX_MASK) as u16
    }

    /// POSX
    #[inline(always)]
    pub fn set_posx(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::POSX_MASK << Self::POSX_OFFSET))
            | ((val & Self::POSX_MASK) << Self::POSX_OFFSET);
    }

    pub const POSY_OFFSET: usize = 16;
    pub const POSY_WIDTH: usize = 16;
    pub const POSY_MASK: u32 = 0xFFFF;

    /// POSY
    #[inline(always)]
    #[must_use]
    pub fn posy(&self) -> u16 {
        ((self.0 >> Self::POSY_OFFSET) & Self::POSY_MASK) as u16
    }

    /// POSY
    #[inline(always)]
    pub fn set_posy(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::POSY_MASK << Self::POSY_OFFSET))
            | ((val & Self::POSY_MASK) << Self::POSY_OFFSET);
    }
}

impl core::fmt::Debug for CtrlDescL2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL2Reg")
            .field("posx", &self.posx())
            .field("posy", &self.posy())
            .finish()
    }
}
