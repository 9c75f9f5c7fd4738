//! Register: WR_CTRL

use crate::components::store_format_e::StoreFormatE;
use crate::encode::UnknownVariant;

/// WR_CTRL
///
/// Store pipeline control. ENABLE starts capture of composited frames
/// to memory; in one-shot mode the hardware clears it after one frame,
/// with REPEAT set it captures continuously until software clears it.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct WrCtrlReg(u32);

impl core::default::Default for WrCtrlReg {
    fn default() -> Self {
        Self(0x007C_0000)
    }
}

impl crate::reg::Register for WrCtrlReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl WrCtrlReg {
    pub const ENABLE_OFFSET: usize = 0;
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

    pub const REPEAT_OFFSET: usize = 1;
    pub const REPEAT_WIDTH: usize = 1;
    pub const REPEAT_MASK: u32 = 0x1;

    /// REPEAT
    #[inline(always)]
    #[must_use]
    pub fn repeat(&self) -> bool {
        ((self.0 >> Self::REPEAT_OFFSET) & Self::REPEAT_MASK) != 0
    }

    /// REPEAT
    #[inline(always)]
    pub fn set_repeat(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::REPEAT_MASK << Self::REPEAT_OFFSET))
            | ((val & Self::REPEAT_MASK) << Self::REPEAT_OFFSET);
    }

    pub const BPP_OFFSET: usize = 18;
    pub const BPP_WIDTH: usize = 5;
    pub const BPP_MASK: u32 = 0x1F;

    /// BPP
    #[inline(always)]
    #[must_use]
    pub fn bpp(&self) -> Result<StoreFormatE, UnknownVariant<u8>> {
        StoreFormatE::from_bits(((self.0 >> Self::BPP_OFFSET) & Self::BPP_MASK) as u8)
    }

    /// BPP
    #[inline(always)]
    pub fn set_bpp(&mut self, val: StoreFormatE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::BPP_MASK << Self::BPP_OFFSET))
            | ((val & Self::BPP_MASK) << Self::BPP_OFFSET);
    }
}

impl core::fmt::Debug for WrCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WrCtrlReg")
            .field("enable", &self.enable())
            .field("repeat", &self.repeat())
            .field("bpp", &self.bpp())
            .finish()
    }
}
