//! Register: CTRLDESCL3

/// CTRLDESCL3
///
/// Layer source buffer stride in bytes between vertically adjacent
/// pixels. 64-bit alignment is advised for burst efficiency but not
/// enforced. Shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL3Reg(u32);

impl core::default::Default for CtrlDescL3Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL3Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL3Reg {
    pub const PITCH_OFFSET: usize = 0;
    pub const PITCH_WIDTH: usize = 16;
    pub const PITCH_MASK: u32 = 0xFFFF;

    /// PITCH
    #[inline(always)]
    #[must_use]
    pub fn pitch(&self) -> u16 {
        ((self.0 >> Self::PITCH_OFFSET) & Self::PITCH_MASK) as u16
    }

    /// PITCH
    #[inline(always)]
    pub fn set_pitch(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PITCH_MASK << Self::PITCH_OFFSET))
            | ((val & Self::PITCH_MASK) << Self::PITCH_OFFSET);
    }
}

impl core::fmt::Debug for CtrlDescL3Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL3Reg")
            .field("pitch", &self.pitch())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = CtrlDescL3Reg::default();
        assert_eq!(reg.pitch(), 0);
    }
}
