//! Register: CTRLDESCL5

use crate::components::alpha_mode_e::AlphaModeE;
use crate::components::pd_factor_mode_e::PdFactorModeE;
use crate::components::pd_global_alpha_mode_e::PdGlobalAlphaModeE;
use crate::encode::UnknownVariant;

/// CTRLDESCL5
///
/// Layer control word: pixel format, blend configuration, layer enable,
/// and the shadow-load trigger. All fields except SHADOW_LOAD_EN are
/// shadow-loaded. SHADOW_LOAD_EN itself arms the promotion and is
/// cleared by hardware once the shadow set has been copied to the
/// active set at vertical blank.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CtrlDescL5Reg(u32);

impl core::default::Default for CtrlDescL5Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for CtrlDescL5Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CtrlDescL5Reg {
    pub const GLOBAL_ALPHA_OFFSET: usize = 0;
    pub const GLOBAL_ALPHA_WIDTH: usize = 8;
    pub const GLOBAL_ALPHA_MASK: u32 = 0xFF;

    /// GLOBAL_ALPHA
    #[inline(always)]
    #[must_use]
    pub fn global_alpha(&self) -> u8 {
        ((self.0 >> Self::GLOBAL_ALPHA_OFFSET) & Self::GLOBAL_ALPHA_MASK) as u8
    }

    /// GLOBAL_ALPHA
    #[inline(always)]
    pub fn set_global_alpha(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GLOBAL_ALPHA_MASK << Self::GLOBAL_ALPHA_OFFSET))
            | ((val & Self::GLOBAL_ALPHA_MASK) << Self::GLOBAL_ALPHA_OFFSET);
    }

    pub const AB_MODE_OFFSET: usize = 8;
    pub const AB_MODE_WIDTH: usize = 2;
    pub const AB_MODE_MASK: u32 = 0x3;

    /// AB_MODE
    #[inline(always)]
    #[must_use]
    pub fn ab_mode(&self) -> Result<AlphaModeE, UnknownVariant<u8>> {
        AlphaModeE::from_bits(((self.0 >> Self::AB_MODE_OFFSET) & Self::AB_MODE_MASK) as u8)
    }

    /// AB_MODE
    #[inline(always)]
    pub fn set_ab_mode(&mut self, val: AlphaModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::AB_MODE_MASK << Self::AB_MODE_OFFSET))
            | ((val & Self::AB_MODE_MASK) << Self::AB_MODE_OFFSET);
    }

    pub const PD_FACTOR_MODE_OFFSET: usize = 10;
    pub const PD_FACTOR_MODE_WIDTH: usize = 2;
    pub const PD_FACTOR_MODE_MASK: u32 = 0x3;

    /// PD_FACTOR_MODE
    #[inline(always)]
    #[must_use]
    pub fn pd_factor_mode(&self) -> Result<PdFactorModeE, UnknownVariant<u8>> {
        PdFactorModeE::from_bits(
            ((self.0 >> Self::PD_FACTOR_MODE_OFFSET) & Self::PD_FACTOR_MODE_MASK) as u8,
        )
    }

    /// PD_FACTOR_MODE
    #[inline(always)]
    pub fn set_pd_factor_mode(&mut self, val: PdFactorModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PD_FACTOR_MODE_MASK << Self::PD_FACTOR_MODE_OFFSET))
            | ((val & Self::PD_FACTOR_MODE_MASK) << Self::PD_FACTOR_MODE_OFFSET);
    }

    pub const PD_ALPHA_MODE_OFFSET: usize = 12;
    pub const PD_ALPHA_MODE_WIDTH: usize = 1;
    pub const PD_ALPHA_MODE_MASK: u32 = 0x1;

    /// PD_ALPHA_MODE
    ///
    /// Set to invert the Porter-Duff alpha term.
    #[inline(always)]
    #[must_use]
    pub fn pd_alpha_mode(&self) -> bool {
        ((self.0 >> Self::PD_ALPHA_MODE_OFFSET) & Self::PD_ALPHA_MODE_MASK) != 0
    }

    /// PD_ALPHA_MODE
    #[inline(always)]
    pub fn set_pd_alpha_mode(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PD_ALPHA_MODE_MASK << Self::PD_ALPHA_MODE_OFFSET))
            | ((val & Self::PD_ALPHA_MODE_MASK) << Self::PD_ALPHA_MODE_OFFSET);
    }

    pub const PD_COLOR_MODE_OFFSET: usize = 13;
    pub const PD_COLOR_MODE_WIDTH: usize = 1;
    pub const PD_COLOR_MODE_MASK: u32 = 0x1;

    /// PD_COLOR_MODE
    ///
    /// Set to invert the Porter-Duff color term.
    #[inline(always)]
    #[must_use]
    pub fn pd_color_mode(&self) -> bool {
        ((self.0 >> Self::PD_COLOR_MODE_OFFSET) & Self::PD_COLOR_MODE_MASK) != 0
    }

    /// PD_COLOR_MODE
    #[inline(always)]
    pub fn set_pd_color_mode(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PD_COLOR_MODE_MASK << Self::PD_COLOR_MODE_OFFSET))
            | ((val & Self::PD_COLOR_MODE_MASK) << Self::PD_COLOR_MODE_OFFSET);
    }

    pub const YUV_FORMAT_OFFSET: usize = 14;
    pub const YUV_FORMAT_WIDTH: usize = 2;
    pub const YUV_FORMAT_MASK: u32 = 0x3;

    /// YUV_FORMAT
    ///
    /// Component ordering for the packed 4:2:2 formats. Ignored for RGB
    /// formats.
    #[inline(always)]
    #[must_use]
    pub fn yuv_format(&self) -> u8 {
        ((self.0 >> Self::YUV_FORMAT_OFFSET) & Self::YUV_FORMAT_MASK) as u8
    }

    /// YUV_FORMAT
    #[inline(always)]
    pub fn set_yuv_format(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::YUV_FORMAT_MASK << Self::YUV_FORMAT_OFFSET))
            | ((val & Self::YUV_FORMAT_MASK) << Self::YUV_FORMAT_OFFSET);
    }

    pub const PD_GLOBAL_ALPHA_MODE_OFFSET: usize = 16;
    pub const PD_GLOBAL_ALPHA_MODE_WIDTH: usize = 2;
    pub const PD_GLOBAL_ALPHA_MODE_MASK: u32 = 0x3;

    /// PD_GLOBAL_ALPHA_MODE
    #[inline(always)]
    #[must_use]
    pub fn pd_global_alpha_mode(&self) -> Result<PdGlobalAlphaModeE, UnknownVariant<u8>> {
        PdGlobalAlphaModeE::from_bits(
            ((self.0 >> Self::PD_GLOBAL_ALPHA_MODE_OFFSET) & Self::PD_GLOBAL_ALPHA_MODE_MASK)
                as u8,
        )
    }

    /// PD_GLOBAL_ALPHA_MODE
    #[inline(always)]
    pub fn set_pd_global_alpha_mode(&mut self, val: PdGlobalAlphaModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0
            & !(Self::PD_GLOBAL_ALPHA_MODE_MASK << Self::PD_GLOBAL_ALPHA_MODE_OFFSET))
            | ((val & Self::PD_GLOBAL_ALPHA_MODE_MASK) << Self::PD_GLOBAL_ALPHA_MODE_OFFSET);
    }

    pub const BPP_OFFSET: usize = 24;
    pub const BPP_WIDTH: usize = 4;
    pub const BPP_MASK: u32 = 0xF;

    /// BPP
    #[inline(always)]
    #[must_use]
    pub fn bpp(&self) -> u8 {
        ((self.0 >> Self::BPP_OFFSET) & Self::BPP_MASK) as u8
    }

    /// BPP
    #[inline(always)]
    pub fn set_bpp(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BPP_MASK << Self::BPP_OFFSET))
            | ((val & Self::BPP_MASK) << Self::BPP_OFFSET);
    }

    pub const SAFETY_EN_OFFSET: usize = 28;
    pub const SAFETY_EN_WIDTH: usize = 1;
    pub const SAFETY_EN_MASK: u32 = 0x1;

    /// SAFETY_EN
    ///
    /// Stream safety mode. Must be set whenever alpha blending is
    /// disabled for the layer.
    #[inline(always)]
    #[must_use]
    pub fn safety_en(&self) -> bool {
        ((self.0 >> Self::SAFETY_EN_OFFSET) & Self::SAFETY_EN_MASK) != 0
    }

    /// SAFETY_EN
    #[inline(always)]
    pub fn set_safety_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SAFETY_EN_MASK << Self::SAFETY_EN_OFFSET))
            | ((val & Self::SAFETY_EN_MASK) << Self::SAFETY_EN_OFFSET);
    }

    pub const SHADOW_LOAD_EN_OFFSET: usize = 30;
    pub const SHADOW_LOAD_EN_WIDTH: usize = 1;
    pub const SHADOW_LOAD_EN_MASK: u32 = 0x1;

    /// SHADOW_LOAD_EN
    ///
    /// Arm promotion of this layer's shadow registers at the next
    /// vertical blank. Cleared by hardware when the promotion happens.
    #[inline(always)]
    #[must_use]
    pub fn shadow_load_en(&self) -> bool {
        ((self.0 >> Self::SHADOW_LOAD_EN_OFFSET) & Self::SHADOW_LOAD_EN_MASK) != 0
    }

    /// SHADOW_LOAD_EN
    #[inline(always)]
    pub fn set_shadow_load_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_LOAD_EN_MASK << Self::SHADOW_LOAD_EN_OFFSET))
            | ((val & Self::SHADOW_LOAD_EN_MASK) << Self::SHADOW_LOAD_EN_OFFSET);
    }

    pub const EN_OFFSET: usize = 31;
    pub const EN_WIDTH: usize = 1;
    pub const EN_MASK: u32 = 0x1;

    /// EN
    #[inline(always)]
    #[must_use]
    pub fn en(&self) -> bool {
        ((self.0 >> Self::EN_OFFSET) & Self::EN_MASK) != 0
    }

    /// EN
    #[inline(always)]
    pub fn set_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::EN_MASK << Self::EN_OFFSET))
            | ((val & Self::EN_MASK) << Self::EN_OFFSET);
    }
}

impl core::fmt::Debug for CtrlDescL5Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrlDescL5Reg")
            .field("global_alpha", &self.global_alpha())
            .field("ab_mode", &self.ab_mode())
            .field("pd_factor_mode", &self.pd_factor_mode())
            .field("pd_alpha_mode", &self.pd_alpha_mode())
            .field("pd_color_mode", &self.pd_color_mode())
            .field("yuv_format", &self.yuv_format())
            .field("pd_global_alpha_mode", &self.pd_global_alpha_mode())
            .field("bpp", &self.bpp())
            .field("safety_en", &self.safety_en())
            .field("shadow_load_en", &self.shadow_load_en())
            .field("en", &self.en())
            .finish()
    }
}
