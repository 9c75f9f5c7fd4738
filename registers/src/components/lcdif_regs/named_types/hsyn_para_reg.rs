//! Register: HSYN_PARA

/// HSYN_PARA
///
/// Horizontal timing: front porch, sync pulse width and back porch, each a
/// 9-bit pixel count. Reset value encodes 3/3/3. Commits immediately, not
/// shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct HsynParaReg(u32);

impl core::default::Default for HsynParaReg {
    fn default() -> Self {
        Self(0x00C0_1803)
    }
}

impl crate::reg::Register for HsynParaReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl HsynParaReg {
    pub const FP_H_OFFSET: usize = 0;
    pub const FP_H_WIDTH: usize = 9;
    pub const FP_H_MASK: u32 = 0x1FF;

    /// FP_H
    #[inline(always)]
    #[must_use]
    pub fn fp_h(&self) -> u16 {
        ((self.0 >> Self::FP_H_OFFSET) & Self::FP_H_MASK) as u16
    }

    /// FP_H
    #[inline(always)]
    pub fn set_fp_h(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::FP_H_MASK << Self::FP_H_OFFSET))
            | ((val & Self::FP_H_MASK) << Self::FP_H_OFFSET);
    }

    pub const PW_H_OFFSET: usize = 11;
    pub const PW_H_WIDTH: usize = 9;
    pub const PW_H_MASK: u32 = 0x1FF;

    /// PW_H
    #[inline(always)]
    #[must_use]
    pub fn pw_h(&self) -> u16 {
        ((self.0 >> Self::PW_H_OFFSET) & Self::PW_H_MASK) as u16
    }

    /// PW_H
    #[inline(always)]
    pub fn set_pw_h(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PW_H_MASK << Self::PW_H_OFFSET))
            | ((val & Self::PW_H_MASK) << Self::PW_H_OFFSET);
    }

    pub const BP_H_OFFSET: usize = 22;
    pub const BP_H_WIDTH: usize = 9;
    pub const BP_H_MASK: u32 = 0x1FF;

    /// BP_H
    #[inline(always)]
    #[must_use]
    pub fn bp_h(&self) -> u16 {
        ((self.0 >> Self::BP_H_OFFSET) & Self::BP_H_MASK) as u16
    }

    /// BP_H
    #[inline(always)]
    pub fn set_bp_h(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BP_H_MASK << Self::BP_H_OFFSET))
            | ((val & Self::BP_H_MASK) << Self::BP_H_OFFSET);
    }
}

impl core::fmt::Debug for HsynParaReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HsynParaReg")
            .field("fp_h", &self.fp_h())
            .field("pw_h", &self.pw_h())
            .field("bp_h", &self.bp_h())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = HsynParaReg::default();
        assert_eq!(reg.fp_h(), 3);
        assert_eq!(reg.pw_h(), 3);
        assert_eq!(reg.bp_h(), 3);
    }
}
