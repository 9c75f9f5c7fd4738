//! Control/Status Register crate for the LCDIFv2 display compositor
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;
pub mod reg;

pub use crate::components::lcdif_regs;
