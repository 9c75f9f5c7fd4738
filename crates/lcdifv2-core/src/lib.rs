//! Platform-agnostic driver for the LCDIFv2 display compositor.
//!
//! The compositor scans out up to eight layers blended over each other,
//! each with its own pixel format, position, palette and color space
//! conversion. Configuration is double-buffered in hardware: writes land
//! in shadow registers and are promoted to the active set at the vertical
//! blank after the layer's shadow load is triggered, so a frame never
//! mixes old and new settings.
//!
//! All register access goes through [`lcdifv2_hal::RegisterBus`], so the
//! same driver runs against memory-mapped hardware and against the
//! software model in `lcdifv2-sim`.
#![no_std]

mod csc;
mod driver;
mod interrupt;
mod layer;
mod lut;
mod store;

pub use csc::{CscCoefficients, CscMode};
pub use driver::{DisplayConfig, Error, Lcdifv2};
pub use interrupt::{Interrupts, PolarityFlags};
pub use layer::{BlendConfig, BufferConfig, PixelFormat};
pub use store::StoreConfig;

pub use lcdifv2_registers::components::alpha_mode_e::AlphaModeE;
pub use lcdifv2_registers::components::line_order_e::LineOrderE;
pub use lcdifv2_registers::components::pd_factor_mode_e::PdFactorModeE;
pub use lcdifv2_registers::components::pd_global_alpha_mode_e::PdGlobalAlphaModeE;
pub use lcdifv2_registers::components::store_format_e::StoreFormatE;
pub use lcdifv2_registers::lcdif_regs::{DOMAIN_COUNT, LAYER_COUNT, LUT_ENTRY_COUNT};
