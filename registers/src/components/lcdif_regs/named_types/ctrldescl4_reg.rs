//! Register: CTRLDESCL4

/// CTRLDESCL4
///
/// Layer source buffer address. The usual runtime flip target: write the
/// new buffer, trigger the shadow load, and the swap lands at the next
/// vertical blank. 64-bit alignment is advised. Shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL4Reg(u32);

impl core::default::Default for CtrlDescL4Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL4Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL4Reg {
    pub const ADDR_OFFSET: usize = 0;
    pub const ADDR_WIDTH: usize = 32;
    pub const ADDR_MASK: u32 = 0xFFFF_FFFF;

    /// ADDR
    #[inline(always)]
    #[must_use]
    pub fn addr(&self) -> u32 {
        self.0
    }

    /// ADDR
    #[inline(always)]
    pub fn set_addr(&mut self, val: u32) {
        self.0 = val;
    }
}

impl core::fmt::Debug for CtrlDescL4Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL4Reg")
            .field("addr", &self.addr())
            .finish()
    }
}
