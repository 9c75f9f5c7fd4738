//! Per-layer color space conversion.
//!
//! The conversion stage applies
//!
//! ```text
//! R = C0*(Y+Y_OFFSET)                    + C1*(V+UV_OFFSET)
//! G = C0*(Y+Y_OFFSET) + C3*(U+UV_OFFSET) + C2*(V+UV_OFFSET)
//! B = C0*(Y+Y_OFFSET) + C4*(U+UV_OFFSET)
//! ```
//!
//! with coefficients in unsigned two's-complement fixed point, two
//! integer bits and eight fractional bits.

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::{CscCoef0Reg, CscCoef1Reg, CscCoef2Reg};
use lcdifv2_registers::reg::Register;

use crate::driver::{Error, Lcdifv2};

/// Color space conversion preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CscMode {
    /// Pass pixels through unconverted.
    Disabled,
    /// Full-range YUV to RGB.
    Yuv2Rgb,
    /// Limited-range YCbCr to RGB.
    Ycbcr2Rgb,
}

/// The three coefficient words a preset programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CscCoefficients {
    pub coef0: u32,
    pub coef1: u32,
    pub coef2: u32,
}

impl CscCoefficients {
    /// The coefficient words for a preset.
    #[must_use]
    pub fn for_mode(mode: CscMode) -> Self {
        match mode {
            CscMode::Disabled => Self {
                coef0: 0,
                coef1: 0,
                coef2: 0,
            },
            CscMode::Yuv2Rgb => {
                let mut coef0 = CscCoef0Reg::from_raw(0);
                coef0.set_enable(true);
                coef0.set_c0(0x100); // 1.000
                coef0.set_y_offset(0x0);
                coef0.set_uv_offset(0x0);
                let mut coef1 = CscCoef1Reg::from_raw(0);
                coef1.set_c1(0x123); // 1.140
                coef1.set_c4(0x208); // 2.032
                let mut coef2 = CscCoef2Reg::from_raw(0);
                coef2.set_c2(0x76B); // -0.851
                coef2.set_c3(0x79B); // -0.394
                Self {
                    coef0: coef0.to_raw(),
                    coef1: coef1.to_raw(),
                    coef2: coef2.to_raw(),
                }
            }
            CscMode::Ycbcr2Rgb => {
                let mut coef0 = CscCoef0Reg::from_raw(0);
                coef0.set_enable(true);
                coef0.set_ycbcr_mode(true);
                coef0.set_c0(0x12A); // 1.164
                coef0.set_y_offset(0x1F0); // -16
                coef0.set_uv_offset(0x180); // -128
                let mut coef1 = CscCoef1Reg::from_raw(0);
                coef1.set_c1(0x198); // 1.596
                coef1.set_c4(0x204); // 2.017
                let mut coef2 = CscCoef2Reg::from_raw(0);
                coef2.set_c2(0x730); // -0.813
                coef2.set_c3(0x79C); // -0.392
                Self {
                    coef0: coef0.to_raw(),
                    coef1: coef1.to_raw(),
                    coef2: coef2.to_raw(),
                }
            }
        }
    }
}

impl<B: RegisterBus> Lcdifv2<B> {
    /// Program one layer's conversion stage to a preset. Disabling zeroes
    /// all three coefficient words. Commits immediately, outside the
    /// shadow-load protocol.
    pub fn set_csc_mode(&mut self, layer: usize, mode: CscMode) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        let coef = CscCoefficients::for_mode(mode);
        self.bus
            .write_register(lcdif_regs::csc_coef0(layer), coef.coef0)?;
        self.bus
            .write_register(lcdif_regs::csc_coef1(layer), coef.coef1)?;
        self.bus
            .write_register(lcdif_regs::csc_coef2(layer), coef.coef2)?;
        Ok(())
    }
}
