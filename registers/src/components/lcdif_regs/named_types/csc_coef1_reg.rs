//! Register: CSC_COEF1

/// CSC_COEF1
///
/// Per-layer color space conversion, word 1: red chroma coefficient C1
/// and blue chroma coefficient C4. Commits immediately, not
/// shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CscCoef1Reg(u32);

impl core::default::Default for CscCoef1Reg {
    fn default() -> Self {
        Self(0x0123_0208)
    }
}

impl crate::reg::Register for CscCoef1Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CscCoef1Reg {
    pub const C4_OFFSET: usize = 0;
    pub const C4_WIDTH: usize = 11;
    pub const C4_MASK: u32 = 0x7FF;

    /// C4
    #[inline(always)]
    #[must_use]
    pub fn c4(&self) -> u16 {
        ((self.0 >> Self::C4_OFFSET) & Self::C4_MASK) as u16
    }

    /// C4
    #[inline(always)]
    pub fn set_c4(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::C4_MASK << Self::C4_OFFSET))
            | ((val & Self::C4_MASK) << Self::C4_OFFSET);
    }

    pub const C1_OFFSET: usize = 16;
    pub const C1_WIDTH: usize = 11;
    pub const C1_MASK: u32 = 0x7FF;

    /// C1
    #[inline(always)]
    #[must_use]
    pub fn c1(&self) -> u16 {
        ((self.0 >> Self::C1_OFFSET) & Self::C1_MASK) as u16
    }

    /// C1
    #[inline(always)]
    pub fn set_c1(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::C1_MASK << Self::C1_OFFSET))
            | ((val & Self::C1_MASK) << Self::C1_OFFSET);
    }
}

impl core::fmt::Debug for CscCoef1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CscCoef1Reg")
            .field("c4", &self.c4())
            .field("c1", &self.c1())
            .finish()
    }
}
