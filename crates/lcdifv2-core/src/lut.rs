//! Layer palette loading.

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::ClutLoadReg;
use lcdifv2_registers::reg::Register;

use crate::driver::{Error, Lcdifv2};

impl<B: RegisterBus> Lcdifv2<B> {
    /// Load a layer's palette, up to 256 words.
    ///
    /// With `shadow_load` set the written table is taken over at a
    /// vertical blank; trigger the layer's shadow load afterwards so the
    /// palette lands together with the rest of its shadow state. Without
    /// it the words hit the active table immediately and may be visible
    /// mid-frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutBusy`] without touching any register when a
    /// previous shadow-loaded palette has not yet been taken over.
    pub fn set_lut(
        &mut self,
        layer: usize,
        lut: &[u32],
        shadow_load: bool,
    ) -> Result<(), Error<B::Error>> {
        debug_assert!(layer < lcdif_regs::LAYER_COUNT);
        debug_assert!(lut.len() <= lcdif_regs::LUT_ENTRY_COUNT);

        let load: ClutLoadReg = self.read_reg(lcdif_regs::CLUT_LOAD)?;
        if load.clut_update_en() {
            #[cfg(feature = "log")]
            log::warn!("palette load refused, previous update still pending");
            return Err(Error::LutBusy);
        }

        let mut load = ClutLoadReg::from_raw(0);
        load.set_sel_clut_num(layer as u8);
        load.set_clut_update_en(shadow_load);
        self.write_reg(lcdif_regs::CLUT_LOAD, load)?;

        for (i, &word) in lut.iter().enumerate() {
            self.bus
                .write_register(lcdif_regs::clut_ram(layer, i), word)?;
        }

        Ok(())
    }
}
