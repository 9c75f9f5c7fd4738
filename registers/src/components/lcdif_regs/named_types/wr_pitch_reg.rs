//! Register: WR_PITCH

/// WR_PITCH
///
/// Store pipeline destination stride in bytes between output lines.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct WrPitchReg(u32);

impl core::default::Default for WrPitchReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for WrPitchReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl WrPitchReg {
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

impl core::fmt::Debug for WrPitchReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WrPitchReg")
            .field("pitch", &self.pitch())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = WrPitchReg::default();
        assert_eq!(reg.pitch(), 0);
    }
}
