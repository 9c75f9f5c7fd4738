//! Register: CTRL

/// CTRL
///
/// Output signal polarity control and module soft reset. The INV_* bits
/// invert the corresponding sync/enable/clock signals, NEG inverts the
/// data lines. SW_RESET holds the whole module in reset and is set in the
/// power-on state; releasing it (writing 0) brings the compositor out of
/// reset. Polarity writes commit immediately, they are not shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlReg(u32);

impl core::default::Default for CtrlReg {
    fn default() -> Self {
        Self(0x8000_0000)
    }
}

impl crate::reg::Register for CtrlReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlReg {
    pub const INV_VS_OFFSET: usize = 0;
    pub const INV_VS_WIDTH: usize = 1;
    pub const INV_VS_MASK: u32 = 0x1;

    /// INV_VS
    #[inline(always)]
    #[must_use]
    pub fn inv_vs(&self) -> bool {
        (self.0 >> Self::INV_VS_OFFSET) & Self::INV_VS_MASK != 0
    }

    /// INV_VS
    #[inline(always)]
    pub fn set_inv_vs(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INV_VS_MASK << Self::INV_VS_OFFSET))
            | ((val & Self::INV_VS_MASK) << Self::INV_VS_OFFSET);
    }

    pub const INV_HS_OFFSET: usize = 1;
    pub const INV_HS_WIDTH: usize = 1;
    pub const INV_HS_MASK: u32 = 0x1;

    /// INV_HS
    #[inline(always)]
    #[must_use]
    pub fn inv_hs(&self) -> bool {
        (self.0 >> Self::INV_HS_OFFSET) & Self::INV_HS_MASK != 0
    }

    /// INV_HS
    #[inline(always)]
    pub fn set_inv_hs(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INV_HS_MASK << Self::INV_HS_OFFSET))
            | ((val & Self::INV_HS_MASK) << Self::INV_HS_OFFSET);
    }

    pub const INV_DE_OFFSET: usize = 2;
    pub const INV_DE_WIDTH: usize = 1;
    pub const INV_DE_MASK: u32 = 0x1;

    /// INV_DE
    #[inline(always)]
    #[must_use]
    pub fn inv_de(&self) -> bool {
        (self.0 >> Self::INV_DE_OFFSET) & Self::INV_DE_MASK != 0
    }

    /// INV_DE
    #[inline(always)]
    pub fn set_inv_de(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INV_DE_MASK << Self::INV_DE_OFFSET))
            | ((val & Self::INV_DE_MASK) << Self::INV_DE_OFFSET);
    }

    pub const INV_PXCK_OFFSET: usize = 3;
    pub const INV_PXCK_WIDTH: usize = 1;
    pub const INV_PXCK_MASK: u32 = 0x1;

    /// INV_PXCK
    #[inline(always)]
    #[must_use]
    pub fn inv_pxck(&self) -> bool {
        (self.0 >> Self::INV_PXCK_OFFSET) & Self::INV_PXCK_MASK != 0
    }

    /// INV_PXCK
    #[inline(always)]
    pub fn set_inv_pxck(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INV_PXCK_MASK << Self::INV_PXCK_OFFSET))
            | ((val & Self::INV_PXCK_MASK) << Self::INV_PXCK_OFFSET);
    }

    pub const NEG_OFFSET: usize = 4;
    pub const NEG_WIDTH: usize = 1;
    pub const NEG_MASK: u32 = 0x1;

    /// NEG
    #[inline(always)]
    #[must_use]
    pub fn neg(&self) -> bool {
        (self.0 >> Self::NEG_OFFSET) & Self::NEG_MASK != 0
    }

    /// NEG
    #[inline(always)]
    pub fn set_neg(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::NEG_MASK << Self::NEG_OFFSET))
            | ((val & Self::NEG_MASK) << Self::NEG_OFFSET);
    }

    pub const SW_RESET_OFFSET: usize = 31;
    pub const SW_RESET_WIDTH: usize = 1;
    pub const SW_RESET_MASK: u32 = 0x1;

    /// SW_RESET
    #[inline(always)]
    #[must_use]
    pub fn sw_reset(&self) -> bool {
        (self.0 >> Self::SW_RESET_OFFSET) & Self::SW_RESET_MASK != 0
    }

    /// SW_RESET
    #[inline(always)]
    pub fn set_sw_reset(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SW_RESET_MASK << Self::SW_RESET_OFFSET))
            | ((val & Self::SW_RESET_MASK) << Self::SW_RESET_OFFSET);
    }
}

impl core::fmt::Debug for CtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlReg")
            .field("inv_vs", &self.inv_vs())
            .field("inv_hs", &self.inv_hs())
            .field("inv_de", &self.inv_de())
            .field("inv_pxck", &self.inv_pxck())
            .field("neg", &self.neg())
            .field("sw_reset", &self.sw_reset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = CtrlReg::default();
        assert_eq!(reg.inv_vs(), false);
        assert_eq!(reg.inv_hs(), false);
        assert_eq!(reg.inv_de(), false);
        assert_eq!(reg.inv_pxck(), false);
        assert_eq!(reg.neg(), false);
        assert_eq!(reg.sw_reset(), true);
    }
}
