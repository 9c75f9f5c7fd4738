//! Register: VSYN_PARA

/// VSYN_PARA
///
/// Vertical timing: front porch, sync pulse width and back porch, each a
/// 9-bit line count. Reset value encodes 3/3/3. The blanking interval
/// these fields define is the commit point for every shadow-loaded layer
/// register. Commits immediately, not shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VsynParaReg(u32);

impl core::default::Default for VsynParaReg {
    fn default() -> Self {
        Self(0x00C0_1803)
    }
}

impl crate::reg::Register for VsynParaReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl VsynParaReg {
    pub const FP_V_OFFSET: usize = 0;
    pub const FP_V_WIDTH: usize = 9;
    pub const FP_V_MASK: u32 = 0x1FF;

    /// FP_V
    #[inline(always)]
    #[must_use]
    pub fn fp_v(&self) -> u16 {
        ((self.0 >> Self::FP_V_OFFSET) & Self::FP_V_MASK) as u16
    }

    /// FP_V
    #[inline(always)]
    pub fn set_fp_v(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::FP_V_MASK << Self::FP_V_OFFSET))
            | ((val & Self::FP_V_MASK) << Self::FP_V_OFFSET);
    }

    pub const PW_V_OFFSET: usize = 11;
    pub const PW_V_WIDTH: usize = 9;
    pub const PW_V_MASK: u32 = 0x1FF;

    /// PW_V
    #[inline(always)]
    #[must_use]
    pub fn pw_v(&self) -> u16 {
        ((self.0 >> Self::PW_V_OFFSET) & Self::PW_V_MASK) as u16
    }

    /// PW_V
    #[inline(always)]
    pub fn set_pw_v(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PW_V_MASK << Self::PW_V_OFFSET))
            | ((val & Self::PW_V_MASK) << Self::PW_V_OFFSET);
    }

    pub const BP_V_OFFSET: usize = 22;
    pub const BP_V_WIDTH: usize = 9;
    pub const BP_V_MASK: u32 = 0x1FF;

    /// BP_V
    #[inline(always)]
    #[must_use]
    pub fn bp_v(&self) -> u16 {
        ((self.0 >> Self::BP_V_OFFSET) & Self::BP_V_MASK) as u16
    }

    /// BP_V
    #[inline(always)]
    pub fn set_bp_v(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BP_V_MASK << Self::BP_V_OFFSET))
            | ((val & Self::BP_V_MASK) << Self::BP_V_OFFSET);
    }
}

impl core::fmt::Debug for VsynParaReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VsynParaReg")
            .field("fp_v", &self.fp_v())
            .field("pw_v", &self.pw_v())
            .field("bp_v", &self.bp_v())
            .finish()
    }
}
