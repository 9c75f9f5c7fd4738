//! Store pipeline: capture of composited output frames to memory.

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::components::store_format_e::StoreFormatE;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::{WrCtrlReg, WrPitchReg};

use crate::driver::{Error, Lcdifv2};

/// Store pipeline destination buffer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreConfig {
    /// Destination buffer address.
    pub buffer_addr: u32,
    /// Bytes between output lines.
    pub pitch_bytes: u16,
    /// Output pixel format.
    pub format: StoreFormatE,
}

impl<B: RegisterBus> Lcdifv2<B> {
    /// Program the store destination buffer and output format. Does not
    /// start a capture.
    pub fn set_store_config(&mut self, config: &StoreConfig) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(lcdif_regs::WR_BASE_ADDR, config.buffer_addr)?;

        let mut pitch = WrPitchReg::default();
        pitch.set_pitch(config.pitch_bytes);
        self.write_reg(lcdif_regs::WR_PITCH, pitch)?;

        self.modify_reg(lcdif_regs::WR_CTRL, |reg: &mut WrCtrlReg| {
            reg.set_bpp(config.format)
        })
    }

    /// Start capturing composited frames.
    ///
    /// Without `repeat` the hardware captures one frame and clears the
    /// enable itself; with `repeat` it keeps capturing until
    /// [`Lcdifv2::stop_store`]. Frame completion raises the store frame
    /// done interrupt source.
    ///
    /// Only sets bits: a REPEAT already armed stays armed until
    /// [`Lcdifv2::stop_store`] clears it.
    pub fn start_store(&mut self, repeat: bool) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "log")]
        log::debug!("store started, repeat={}", repeat);
        self.modify_reg(lcdif_regs::WR_CTRL, |reg: &mut WrCtrlReg| {
            if repeat {
                reg.set_repeat(true);
            }
            reg.set_enable(true);
        })
    }

    /// Stop a repeating capture. The frame in flight still completes.
    pub fn stop_store(&mut self) -> Result<(), Error<B::Error>> {
        self.modify_reg(lcdif_regs::WR_CTRL, |reg: &mut WrCtrlReg| {
            reg.set_repeat(false);
            reg.set_enable(false);
        })
    }
}
