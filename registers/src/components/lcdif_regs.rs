//! Addrmap: LCDIFv2 Register Map
//!
//! Byte offsets of every control/status word in the compositor's register
//! space. The global block covers timing, the two interrupt domains, the
//! store pipeline and the LUT load handshake; eight identical per-layer
//! blocks carry the scanout descriptors and CSC coefficients; the LUT RAM
//! holds 256 palette words per layer.

/// Named types defined within this component's body
pub mod named_types {
    pub mod clut_load_reg;
    pub mod csc_coef0_reg;
    pub mod csc_coef1_reg;
    pub mod csc_coef2_reg;
    pub mod ctrl_reg;
    pub mod ctrldescl1_reg;
    pub mod ctrldescl2_reg;
    pub mod ctrldescl3_reg;
    pub mod ctrldescl4_reg;
    pub mod ctrldescl5_reg;
    pub mod ctrldescl6_reg;
    pub mod disp_para_reg;
    pub mod disp_size_reg;
    pub mod hsyn_para_reg;
    pub mod vsyn_para_reg;
    pub mod wr_ctrl_reg;
    pub mod wr_pitch_reg;
}

pub use named_types::clut_load_reg::ClutLoadReg;
pub use named_types::csc_coef0_reg::CscCoef0Reg;
pub use named_types::csc_coef1_reg::CscCoef1Reg;
pub use named_types::csc_coef2_reg::CscCoef2Reg;
pub use named_types::ctrl_reg::CtrlReg;
pub use named_types::ctrldescl1_reg::CtrlDescL1Reg;
pub use named_types::ctrldescl2_reg::CtrlDescL2Reg;
pub use named_types::ctrldescl3_reg::CtrlDescL3Reg;
pub use named_types::ctrldescl4_reg::CtrlDescL4Reg;
pub use named_types::ctrldescl5_reg::CtrlDescL5Reg;
pub use named_types::ctrldescl6_reg::CtrlDescL6Reg;
pub use named_types::disp_para_reg::DispParaReg;
pub use named_types::disp_size_reg::DispSizeReg;
pub use named_types::hsyn_para_reg::HsynParaReg;
pub use named_types::vsyn_para_reg::VsynParaReg;
pub use named_types::wr_ctrl_reg::WrCtrlReg;
pub use named_types::wr_pitch_reg::WrPitchReg;

/// Size in bytes of the register space
pub const SIZE: usize = 0x3000;

/// Number of compositing layers
pub const LAYER_COUNT: usize = 8;

/// Number of independent interrupt domains
pub const DOMAIN_COUNT: usize = 2;

/// LUT entries per layer
pub const LUT_ENTRY_COUNT: usize = 256;

/// CTRL
///
/// Signal polarity inversion bits and the module soft reset.
pub const CTRL: usize = 0x000;

/// DISP_PARA
///
/// Display master enable and output line order.
pub const DISP_PARA: usize = 0x004;

/// DISP_SIZE
///
/// Panel width/height in pixels.
pub const DISP_SIZE: usize = 0x008;

/// HSYN_PARA
///
/// Horizontal sync pulse width and front/back porch.
pub const HSYN_PARA: usize = 0x00C;

/// VSYN_PARA
///
/// Vertical sync pulse width and front/back porch.
pub const VSYN_PARA: usize = 0x010;

/// PDI_PARA
///
/// Parallel data interface configuration. Programmed only by the reset
/// sequence; the documented reset value is `0x0000_1000`.
pub const PDI_PARA: usize = 0x014;

/// PDI_PARA reset value
pub const PDI_PARA_DEFAULT: u32 = 0x0000_1000;

const INT_BASE: usize = 0x018;
const INT_STRIDE: usize = 0x008;

/// INT_STATUS\[domain\]
///
/// Interrupt status for one domain, write-1-to-clear. Both domains observe
/// the same 32-source event space; neither can see or clear the other's
/// bank.
#[inline(always)]
#[must_use]
pub const fn int_status(domain: usize) -> usize {
    INT_BASE + INT_STRIDE * domain
}

/// INT_ENABLE\[domain\]
///
/// Interrupt enable mask for one domain. Gates only the domain's interrupt
/// line; status bits latch regardless.
#[inline(always)]
#[must_use]
pub const fn int_enable(domain: usize) -> usize {
    INT_BASE + INT_STRIDE * domain + 0x4
}

/// WR_CTRL
///
/// Store pipeline control: enable, repeat and output pixel format.
pub const WR_CTRL: usize = 0x028;

/// WR_BASE_ADDR
///
/// Store destination buffer address.
pub const WR_BASE_ADDR: usize = 0x02C;

/// WR_PITCH
///
/// Store destination stride in bytes.
pub const WR_PITCH: usize = 0x030;

/// CLUT_LOAD
///
/// LUT update handshake: layer select plus the update-enable flag that
/// holds until the palette is taken over at a vertical blank.
pub const CLUT_LOAD: usize = 0x034;

const LAYER_BASE: usize = 0x200;
const LAYER_STRIDE: usize = 0x040;

/// CTRLDESCL1\[layer\]
///
/// Layer width/height in pixels (shadow-loaded).
#[inline(always)]
#[must_use]
pub const fn ctrldescl1(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer
}

/// CTRLDESCL2\[layer\]
///
/// Layer position in the output frame (shadow-loaded).
#[inline(always)]
#[must_use]
pub const fn ctrldescl2(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x04
}

/// CTRLDESCL3\[layer\]
///
/// Layer source buffer stride in bytes (shadow-loaded).
#[inline(always)]
#[must_use]
pub const fn ctrldescl3(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x08
}

/// CTRLDESCL4\[layer\]
///
/// Layer source buffer address (shadow-loaded).
#[inline(always)]
#[must_use]
pub const fn ctrldescl4(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x0C
}

/// CTRLDESCL5\[layer\]
///
/// Layer enable, pixel format, blend configuration and the shadow-load
/// trigger bit (shadow-loaded; the trigger itself takes effect at the next
/// vertical blank).
#[inline(always)]
#[must_use]
pub const fn ctrldescl5(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x10
}

/// CTRLDESCL6\[layer\]
///
/// Layer background color, shown while the layer is not active
/// (shadow-loaded).
#[inline(always)]
#[must_use]
pub const fn ctrldescl6(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x14
}

/// CSC_COEF0\[layer\]
///
/// Color space conversion enable, mode flag, C0 coefficient and input
/// offsets. Commits immediately, not shadow-loaded.
#[inline(always)]
#[must_use]
pub const fn csc_coef0(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x18
}

/// CSC_COEF1\[layer\]
///
/// CSC C1/C4 coefficients.
#[inline(always)]
#[must_use]
pub const fn csc_coef1(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x1C
}

/// CSC_COEF2\[layer\]
///
/// CSC C2/C3 coefficients.
#[inline(always)]
#[must_use]
pub const fn csc_coef2(layer: usize) -> usize {
    LAYER_BASE + LAYER_STRIDE * layer + 0x20
}

const CLUT_RAM_BASE: usize = 0x1000;

/// CLUT_RAM
///
/// Palette memory, 256 words per layer packed back to back.
#[inline(always)]
#[must_use]
pub const fn clut_ram(layer: usize, index: usize) -> usize {
    CLUT_RAM_BASE + 4 * (LUT_ENTRY_COUNT * layer + index)
}
