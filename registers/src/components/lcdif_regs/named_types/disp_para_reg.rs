//! Register: DISP_PARA

/// DISP_PARA
///
/// Display master control. DISP_ON starts scanout; LINE_PATTERN selects
/// one of six RGB channel permutations on the output interface
/// (line_order_e). Commits immediately, not shadow-loaded.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DispParaReg(u32);

impl core::default::Default for DispParaReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DispParaReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl DispParaReg {
    pub const LINE_PATTERN_OFFSET: usize = 26;
    pub const LINE_PATTERN_WIDTH: usize = 3;
    pub const LINE_PATTERN_MASK: u32 = 0x7;

    /// LINE_PATTERN
    #[inline(always)]
    #[must_use]
    pub fn line_pattern(&self) -> u8 {
        ((self.0 >> Self::LINE_PATTERN_OFFSET) & Self::LINE_PATTERN_MASK) as u8
    }

    /// LINE_PATTERN
    #[inline(always)]
    pub fn set_line_pattern(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::LINE_PATTERN_MASK << Self::LINE_PATTERN_OFFSET))
            | ((val & Self::LINE_PATTERN_MASK) << Self::LINE_PATTERN_OFFSET);
    }

    pub const DISP_ON_OFFSET: usize = 31;
    pub const DISP_ON_WIDTH: usize = 1;
    pub const DISP_ON_MASK: u32 = 0x1;

    /// DISP_ON
    #[inline(always)]
    #[must_use]
    pub fn disp_on(&self) -> bool {
        (self.0 >> Self::DISP_ON_OFFSET) & Self::DISP_ON_MASK != 0
    }

    /// DISP_ON
    #[inline(always)]
    pub fn set_disp_on(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DISP_ON_MASK << Self::DISP_ON_OFFSET))
            | ((val & Self::DISP_ON_MASK) << Self::DISP_ON_OFFSET);
    }
}

impl core::fmt::Debug for DispParaReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispParaReg")
            .field("line_pattern", &self.line_pattern())
            .field("disp_on", &self.disp_on())
            .finish()
    }
}
