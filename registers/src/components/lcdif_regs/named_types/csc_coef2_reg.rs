//! Register: CSC_COEF2

/// CSC_COEF2
///
/// Per-layer color space conversion, word 2: green chroma coefficients
/// C2 and C3. Commits immediately, not shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CscCoef2Reg(u32);

impl core::default::Default for CscCoef2Reg {
    fn default() -> Self {
        Self(0x076B_079C)
    }
}

impl crate::reg::Register for CscCoef2Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CscCoef2Reg {
    pub const C3_OFFSET: usize = 0;
    pub const C3_WIDTH: usize = 11;
    pub const C3_MASK: u32 = 0x7FF;

    /// C3
    #[inline(always)]
    #[must_use]
    pub fn c3(&self) -> u16 {
        ((self.0 >> Self::C3_OFFSET) & Self::C3_MASK) as u16
    }

    /// C3
    #[inline(always)]
    pub fn set_c3(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::C3_MASK << Self::C3_OFFSET))
            | ((val & Self::C3_MASK) << Self::C3_OFFSET);
    }

    pub const C2_OFFSET: usize = 16;
    pub const C2_WIDTH: usize = 11;
    pub const C2_MASK: u32 = 0x7FF;

    /// C2
    #[inline(always)]
    #[must_use]
    pub fn c2(&self) -> u16 {
        ((self.0 >> Self::C2_OFFSET) & Self::C2_MASK) as u16
    }

    /// C2
    #[inline(always)]
    pub fn set_c2(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::C2_MASK << Self::C2_OFFSET))
            | ((val & Self::C2_MASK) << Self::C2_OFFSET);
    }
}

impl core::fmt::Debug for CscCoef2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CscCoef2Reg")
            .field("c3", &self.c3())
            .field("c2", &self.c2())
            .finish()
    }
}
