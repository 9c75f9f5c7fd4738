//! Per-layer configuration: geometry, source buffer, blending and the
//! shadow load handshake.

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::components::alpha_mode_e::AlphaModeE;
use lcdifv2_registers::components::pd_factor_mode_e::PdFactorModeE;
use lcdifv2_registers::components::pd_global_alpha_mode_e::PdGlobalAlphaModeE;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::{
    CtrlDescL1Reg, CtrlDescL2Reg, CtrlDescL3Reg, CtrlDescL4Reg, CtrlDescL5Reg, CtrlDescL6Reg,
};

use crate::driver::{Error, Lcdifv2};

/// Layer source pixel formats.
///
/// The Index* formats address the layer's palette; the packed 4:2:2
/// formats are only supported on layers 0 and 1 and route through the
/// layer's color space conversion stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 1-bit palette index.
    Index1Bpp,
    /// 2-bit palette index.
    Index2Bpp,
    /// 4-bit palette index.
    Index4Bpp,
    /// 8-bit palette index.
    Index8Bpp,
    /// RGB565, 16 bits per pixel.
    Rgb565,
    /// ARGB1555, 16 bits per pixel.
    Argb1555,
    /// ARGB4444, 16 bits per pixel.
    Argb4444,
    /// Packed 4:2:2, U Y V Y byte order.
    Uyvy,
    /// Packed 4:2:2, V Y U Y byte order.
    Vyuy,
    /// Packed 4:2:2, Y U Y V byte order.
    Yuyv,
    /// Packed 4:2:2, Y V Y U byte order.
    Yvyu,
    /// RGB888 packed, 24 bits per pixel.
    Rgb888,
    /// ARGB8888 unpacked, 32 bits per pixel.
    Argb8888,
    /// ABGR8888 unpacked, 32 bits per pixel.
    Abgr8888,
}

impl PixelFormat {
    /// The BPP field encoding.
    #[must_use]
    pub const fn bpp_bits(self) -> u8 {
        match self {
            Self::Index1Bpp => 0,
            Self::Index2Bpp => 1,
            Self::Index4Bpp => 2,
            Self::Index8Bpp => 3,
            Self::Rgb565 => 4,
            Self::Argb1555 => 5,
            Self::Argb4444 => 6,
            Self::Uyvy | Self::Vyuy | Self::Yuyv | Self::Yvyu => 7,
            Self::Rgb888 => 8,
            Self::Argb8888 => 9,
            Self::Abgr8888 => 10,
        }
    }

    /// The YUV_FORMAT field encoding. Zero for RGB formats.
    #[must_use]
    pub const fn yuv_bits(self) -> u8 {
        match self {
            Self::Uyvy => 0,
            Self::Vyuy => 1,
            Self::Yuyv => 2,
            Self::Yvyu => 3,
            _ => 0,
        }
    }

    /// Whether the format is a packed 4:2:2 format.
    #[must_use]
    pub const fn is_yuv(self) -> bool {
        matches!(self, Self::Uyvy | Self::Vyuy | Self::Yuyv | Self::Yvyu)
    }

    /// Decode the BPP and YUV_FORMAT fields. Returns `None` for a
    /// reserved BPP encoding.
    #[must_use]
    pub const fn from_bits(bpp: u8, yuv_format: u8) -> Option<Self> {
        match bpp {
            0 => Some(Self::Index1Bpp),
            1 => Some(Self::Index2Bpp),
            2 => Some(Self::Index4Bpp),
            3 => Some(Self::Index8Bpp),
            4 => Some(Self::Rgb565),
            5 => Some(Self::Argb1555),
            6 => Some(Self::Argb4444),
            7 => match yuv_format & 0x3 {
                0 => Some(Self::Uyvy),
                1 => Some(Self::Vyuy),
                2 => Some(Self::Yuyv),
                _ => Some(Self::Yvyu),
            },
            8 => Some(Self::Rgb888),
            9 => Some(Self::Argb8888),
            10 => Some(Self::Abgr8888),
            _ => None,
        }
    }
}

/// Layer source buffer layout. The buffer address is set separately via
/// [`Lcdifv2::set_layer_buffer_addr`] so frame flips stay a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferConfig {
    /// Bytes between vertically adjacent pixels.
    pub stride_bytes: u16,
    /// Source pixel format.
    pub pixel_format: PixelFormat,
}

/// Layer blend configuration.
///
/// The default disables blending, which on this hardware means the layer
/// runs with the safety path engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlendConfig {
    /// Global alpha value, used per `alpha_mode`.
    pub global_alpha: u8,
    /// Alpha blending mode.
    pub alpha_mode: AlphaModeE,
    /// Invert the Porter-Duff alpha term.
    pub pd_alpha_inverted: bool,
    /// Invert the Porter-Duff color term.
    pub pd_color_inverted: bool,
    /// Source of the alpha used by Porter-Duff blending.
    pub pd_global_alpha_mode: PdGlobalAlphaModeE,
    /// Porter-Duff blend factor.
    pub pd_factor_mode: PdFactorModeE,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            global_alpha: 0,
            alpha_mode: AlphaModeE::Disabled,
            pd_alpha_inverted: false,
            pd_color_inverted: false,
            pd_global_alpha_mode: PdGlobalAlphaModeE::Global,
            pd_factor_mode: PdFactorModeE::One,
        }
    }
}

impl<B: RegisterBus> Lcdifv2<B> {
    /// Set a layer's width and height in pixels. Shadow-loaded.
    pub fn set_layer_size(
        &mut self,
        layer: usize,
        width: u16,
        height: u16,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let mut reg = CtrlDescL1Reg::default();
        reg.set_width(width);
        reg.set_height(height);
        self.write_reg(lcdif_regs::ctrldescl1(layer), reg)
    }

    /// Set a layer's position in the output frame. Shadow-loaded.
    pub fn set_layer_offset(
        &mut self,
        layer: usize,
        x: u16,
        y: u16,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let mut reg = CtrlDescL2Reg::default();
        reg.set_posx(x);
        reg.set_posy(y);
        self.write_reg(lcdif_regs::ctrldescl2(layer), reg)
    }

    /// Read a layer's width and height back from the shadow register.
    pub fn layer_size(&mut self, layer: usize) -> Result<(u16, u16), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL1Reg = self.read_reg(lcdif_regs::ctrldescl1(layer))?;
        Ok((reg.width(), reg.height()))
    }

    /// Read a layer's position back from the shadow register.
    pub fn layer_offset(&mut self, layer: usize) -> Result<(u16, u16), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL2Reg = self.read_reg(lcdif_regs::ctrldescl2(layer))?;
        Ok((reg.posx(), reg.posy()))
    }

    /// Program a layer's buffer stride and pixel format. Shadow-loaded.
    ///
    /// Keeps the hardware invariant that a layer with blending disabled
    /// must run with the safety path engaged. Packed 4:2:2 formats are
    /// only valid on layers 0 and 1.
    pub fn set_layer_buffer_config(
        &mut self,
        layer: usize,
        config: &BufferConfig,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        debug_assert!(!config.pixel_format.is_yuv() || layer < 2);

        let mut pitch = CtrlDescL3Reg::default();
        pitch.set_pitch(config.stride_bytes);
        self.write_reg(lcdif_regs::ctrldescl3(layer), pitch)?;

        self.modify_reg(lcdif_regs::ctrldescl5(layer), |reg: &mut CtrlDescL5Reg| {
            reg.set_bpp(config.pixel_format.bpp_bits());
            reg.set_yuv_format(config.pixel_format.yuv_bits());
            if reg.ab_mode() == Ok(AlphaModeE::Disabled) {
                reg.set_safety_en(true);
            }
        })
    }

    /// Read a layer's stride and pixel format back from the shadow
    /// registers. `None` when the format field holds a reserved
    /// encoding.
    pub fn layer_buffer_config(
        &mut self,
        layer: usize,
    ) -> Result<Option<BufferConfig>, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let pitch: CtrlDescL3Reg = self.read_reg(lcdif_regs::ctrldescl3(layer))?;
        let desc5: CtrlDescL5Reg = self.read_reg(lcdif_regs::ctrldescl5(layer))?;
        Ok(
            PixelFormat::from_bits(desc5.bpp(), desc5.yuv_format()).map(|pixel_format| {
                BufferConfig {
                    stride_bytes: pitch.pitch(),
                    pixel_format,
                }
            }),
        )
    }

    /// Point a layer at a new source buffer. Shadow-loaded, so together
    /// with [`Lcdifv2::trigger_shadow_load`] this is a tear-free flip.
    pub fn set_layer_buffer_addr(
        &mut self,
        layer: usize,
        addr: u32,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let mut reg = CtrlDescL4Reg::default();
        reg.set_addr(addr);
        self.write_reg(lcdif_regs::ctrldescl4(layer), reg)
    }

    /// Read a layer's source buffer address back from the shadow
    /// register.
    pub fn layer_buffer_addr(&mut self, layer: usize) -> Result<u32, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL4Reg = self.read_reg(lcdif_regs::ctrldescl4(layer))?;
        Ok(reg.addr())
    }

    /// Set a layer's background color, shown where the layer is not
    /// active. Shadow-loaded.
    pub fn set_layer_background_color(
        &mut self,
        layer: usize,
        color: u32,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let mut reg = CtrlDescL6Reg::default();
        reg.set_bclr(color);
        self.write_reg(lcdif_regs::ctrldescl6(layer), reg)
    }

    /// Read a layer's background color back from the shadow register.
    pub fn layer_background_color(&mut self, layer: usize) -> Result<u32, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL6Reg = self.read_reg(lcdif_regs::ctrldescl6(layer))?;
        Ok(reg.bclr())
    }

    /// Program a layer's blend configuration. Shadow-loaded.
    ///
    /// Disabling blending forces the safety path on, as the hardware
    /// requires.
    pub fn set_layer_blend_config(
        &mut self,
        layer: usize,
        config: &BlendConfig,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        self.modify_reg(lcdif_regs::ctrldescl5(layer), |reg: &mut CtrlDescL5Reg| {
            reg.set_global_alpha(config.global_alpha);
            reg.set_ab_mode(config.alpha_mode);
            reg.set_pd_factor_mode(config.pd_factor_mode);
            reg.set_pd_alpha_mode(config.pd_alpha_inverted);
            reg.set_pd_color_mode(config.pd_color_inverted);
            reg.set_pd_global_alpha_mode(config.pd_global_alpha_mode);
            reg.set_safety_en(config.alpha_mode == AlphaModeE::Disabled);
        })
    }

    /// Read a layer's blend configuration back from the shadow register.
    pub fn layer_blend_config(&mut self, layer: usize) -> Result<BlendConfig, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL5Reg = self.read_reg(lcdif_regs::ctrldescl5(layer))?;
        Ok(BlendConfig {
            global_alpha: reg.global_alpha(),
            alpha_mode: reg.ab_mode().unwrap_or(AlphaModeE::Disabled),
            pd_alpha_inverted: reg.pd_alpha_mode(),
            pd_color_inverted: reg.pd_color_mode(),
            // The one reserved encoding reads back as the global source.
            pd_global_alpha_mode: reg
                .pd_global_alpha_mode()
                .unwrap_or(PdGlobalAlphaModeE::Global),
            pd_factor_mode: reg.pd_factor_mode().unwrap_or(PdFactorModeE::One),
        })
    }

    /// Enable or disable a layer. Shadow-loaded.
    pub fn enable_layer(&mut self, layer: usize, enable: bool) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        self.modify_reg(lcdif_regs::ctrldescl5(layer), |reg: &mut CtrlDescL5Reg| {
            reg.set_en(enable)
        })
    }

    /// Whether a layer is enabled, from the shadow register.
    pub fn is_layer_enabled(&mut self, layer: usize) -> Result<bool, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL5Reg = self.read_reg(lcdif_regs::ctrldescl5(layer))?;
        Ok(reg.en())
    }

    /// Arm promotion of a layer's shadow registers at the next vertical
    /// blank. All of the layer's shadowed state is taken over in one
    /// step, so a frame never mixes old and new settings.
    pub fn trigger_shadow_load(&mut self, layer: usize) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        self.bus.set_bits(
            lcdif_regs::ctrldescl5(layer),
            CtrlDescL5Reg::SHADOW_LOAD_EN_MASK << CtrlDescL5Reg::SHADOW_LOAD_EN_OFFSET,
        )?;
        Ok(())
    }

    /// Whether a triggered shadow load has not yet been taken over by
    /// the hardware.
    pub fn is_shadow_load_pending(&mut self, layer: usize) -> Result<bool, Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let reg: CtrlDescL5Reg = self.read_reg(lcdif_regs::ctrldescl5(layer))?;
        Ok(reg.shadow_load_en())
    }
}
