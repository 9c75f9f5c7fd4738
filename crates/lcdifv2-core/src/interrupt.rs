//! Interrupt sources and the two interrupt domains.
//!
//! Both domains see the same 32 event sources but keep fully independent
//! enable and status banks, so two cores (or a secure/non-secure split)
//! can each own their interrupt line without stepping on the other.

use bitflags::bitflags;
use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::lcdif_regs;

use crate::driver::{Error, Lcdifv2};

bitflags! {
    /// Interrupt event sources. One bit per source, shared by both
    /// domains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interrupts: u32 {
        /// Vertical sync edge.
        const VSYNC_EDGE = 1 << 0;
        /// Output FIFO ran dry mid-frame.
        const OUTPUT_UNDERRUN = 1 << 1;
        /// Entered the vertical blanking period.
        const VERTICAL_BLANKING = 1 << 2;
        /// Store pipeline finished writing a frame.
        const STORE_FRAME_DONE = 1 << 4;
        /// Store pipeline write error.
        const STORE_ERROR = 1 << 5;

        const LAYER0_DMA_ERROR = 1 << 8;
        const LAYER1_DMA_ERROR = 1 << 9;
        const LAYER2_DMA_ERROR = 1 << 10;
        const LAYER3_DMA_ERROR = 1 << 11;
        const LAYER4_DMA_ERROR = 1 << 12;
        const LAYER5_DMA_ERROR = 1 << 13;
        const LAYER6_DMA_ERROR = 1 << 14;
        const LAYER7_DMA_ERROR = 1 << 15;

        const LAYER0_DMA_DONE = 1 << 16;
        const LAYER1_DMA_DONE = 1 << 17;
        const LAYER2_DMA_DONE = 1 << 18;
        const LAYER3_DMA_DONE = 1 << 19;
        const LAYER4_DMA_DONE = 1 << 20;
        const LAYER5_DMA_DONE = 1 << 21;
        const LAYER6_DMA_DONE = 1 << 22;
        const LAYER7_DMA_DONE = 1 << 23;

        const LAYER0_FIFO_EMPTY = 1 << 24;
        const LAYER1_FIFO_EMPTY = 1 << 25;
        const LAYER2_FIFO_EMPTY = 1 << 26;
        const LAYER3_FIFO_EMPTY = 1 << 27;
        const LAYER4_FIFO_EMPTY = 1 << 28;
        const LAYER5_FIFO_EMPTY = 1 << 29;
        const LAYER6_FIFO_EMPTY = 1 << 30;
        const LAYER7_FIFO_EMPTY = 1 << 31;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Interrupts {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Interrupts({=u32:#x})", self.bits());
    }
}

impl Interrupts {
    /// DMA error for one layer.
    #[must_use]
    pub const fn layer_dma_error(layer: usize) -> Self {
        Self::from_bits_retain(1 << (8 + layer))
    }

    /// DMA done for one layer.
    #[must_use]
    pub const fn layer_dma_done(layer: usize) -> Self {
        Self::from_bits_retain(1 << (16 + layer))
    }

    /// FIFO empty for one layer.
    #[must_use]
    pub const fn layer_fifo_empty(layer: usize) -> Self {
        Self::from_bits_retain(1 << (24 + layer))
    }
}

bitflags! {
    /// Output signal polarity inversions, matching the CTRL low bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolarityFlags: u32 {
        /// Invert vertical sync.
        const INVERT_VSYNC = 1 << 0;
        /// Invert horizontal sync.
        const INVERT_HSYNC = 1 << 1;
        /// Invert data enable.
        const INVERT_DATA_ENABLE = 1 << 2;
        /// Drive pixels on the falling pixel clock edge.
        const INVERT_PIXEL_CLOCK = 1 << 3;
        /// Invert the data lines.
        const INVERT_DATA = 1 << 4;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PolarityFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "PolarityFlags({=u32:#x})", self.bits());
    }
}

impl<B: RegisterBus> Lcdifv2<B> {
    /// Enable the given sources in one domain's interrupt mask. Sources
    /// already enabled stay enabled.
    pub fn enable_interrupts(
        &mut self,
        domain: usize,
        interrupts: Interrupts,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(domain < lcdif_regs::DOMAIN_COUNT);
        self.bus
            .set_bits(lcdif_regs::int_enable(domain), interrupts.bits())?;
        Ok(())
    }

    /// Disable the given sources in one domain's interrupt mask. The
    /// other domain's mask is untouched.
    pub fn disable_interrupts(
        &mut self,
        domain: usize,
        interrupts: Interrupts,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(domain < lcdif_regs::DOMAIN_COUNT);
        self.bus
            .clear_bits(lcdif_regs::int_enable(domain), interrupts.bits())?;
        Ok(())
    }

    /// Pending status for one domain. Status bits latch for every source
    /// regardless of the enable mask.
    pub fn interrupt_status(&mut self, domain: usize) -> Result<Interrupts, Error<B::Error>> {
        debug_assert!(domain < lcdif_regs::DOMAIN_COUNT);
        let raw = self.bus.read_register(lcdif_regs::int_status(domain))?;
        Ok(Interrupts::from_bits_truncate(raw))
    }

    /// Acknowledge the given sources in one domain's status bank,
    /// write-1-to-clear. Unnamed bits stay latched.
    pub fn clear_interrupt_status(
        &mut self,
        domain: usize,
        interrupts: Interrupts,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(domain < lcdif_regs::DOMAIN_COUNT);
        self.bus
            .write_register(lcdif_regs::int_status(domain), interrupts.bits())?;
        Ok(())
    }
}
