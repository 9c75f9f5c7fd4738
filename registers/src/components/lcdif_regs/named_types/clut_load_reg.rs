//! Register: CLUT_LOAD

/// CLUT_LOAD
///
/// Color lookup table load control. SEL_CLUT_NUM steers subsequent LUT
/// RAM writes to one layer's table. CLUT_UPDATE_EN arms promotion of
/// the written table at the next vertical blank and is cleared by
/// hardware once the copy completes; while it is set the LUT RAM must
/// not be written.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct ClutLoadReg(u32);

impl core::default::Default for ClutLoadReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for ClutLoadReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl ClutLoadReg {
    pub const CLUT_UPDATE_EN_OFFSET: usize = 0;
    pub const CLUT_UPDATE_EN_WIDTH: usize = 1;
    pub const CLUT_UPDATE_EN_MASK: u32 = 0x1;

    /// CLUT_UPDATE_EN
    #[inline(always)]
    #[must_use]
    pub fn clut_update_en(&self) -> bool {
        ((self.0 >> Self::CLUT_UPDATE_EN_OFFSET) & Self::CLUT_UPDATE_EN_MASK) != 0
    }

    /// CLUT_UPDATE_EN
    #[inline(always)]
    pub fn set_clut_update_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::CLUT_UPDATE_EN_MASK << Self::CLUT_UPDATE_EN_OFFSET))
            | ((val & Self::CLUT_UPDATE_EN_MASK) << Self::CLUT_UPDATE_EN_OFFSET);
    }

    pub const SEL_CLUT_NUM_OFFSET: usize = 8;
    pub const SEL_CLUT_NUM_WIDTH: usize = 3;
    pub const SEL_CLUT_NUM_MASK: u32 = 0x7;

    /// SEL_CLUT_NUM
    #[inline(always)]
    #[must_use]
    pub fn sel_clut_num(&self) -> u8 {
        ((self.0 >> Self::SEL_CLUT_NUM_OFFSET) & Self::SEL_CLUT_NUM_MASK) as u8
    }

    /// SEL_CLUT_NUM
    #[inline(always)]
    pub fn set_sel_clut_num(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SEL_CLUT_NUM_MASK << Self::SEL_CLUT_NUM_OFFSET))
            | ((val & Self::SEL_CLUT_NUM_MASK) << Self::SEL_CLUT_NUM_OFFSET);
    }
}

impl core::fmt::Debug for ClutLoadReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClutLoadReg")
            .field("clut_update_en", &self.clut_update_en())
            .field("sel_clut_num", &self.sel_clut_num())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = ClutLoadReg::default();
        assert!(!reg.clut_update_en());
        assert_eq!(reg.sel_clut_num(), 0);
    }
}
