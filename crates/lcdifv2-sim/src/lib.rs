//! Frame-step behavioral model of the LCDIFv2 display compositor.
//!
//! The model keeps the full register file plus the hardware-internal
//! active descriptor set that shadow loads promote into. It advances in
//! whole frames: [`LcdifModel::tick_frame`] plays the vertical blank,
//! promoting armed shadow state, taking over a pending palette, stepping
//! the store pipeline and latching interrupt status.
//!
//! Drive it through [`SharedModel`], which implements
//! [`lcdifv2_hal::RegisterBus`] and can be cloned so a test keeps a
//! handle to the model while the driver owns the bus.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::{CtrlDescL5Reg, DispParaReg, WrCtrlReg};
use lcdifv2_registers::reg::Register;

const WORD_COUNT: usize = lcdif_regs::SIZE / 4;
const DESC_WORDS: usize = 6;

const VSYNC_EDGE: u32 = 1 << 0;
const VERTICAL_BLANKING: u32 = 1 << 2;
const STORE_FRAME_DONE: u32 = 1 << 4;

/// Behavioral model of one compositor instance.
pub struct LcdifModel {
    regs: Vec<u32>,
    /// Active (promoted) copy of CTRLDESCL1..6 per layer.
    active: [[u32; DESC_WORDS]; lcdif_regs::LAYER_COUNT],
    frames: u64,
}

impl LcdifModel {
    /// A model in the power-on state, registers at their reset values.
    #[must_use]
    pub fn new() -> Self {
        let mut model = Self {
            regs: vec![0; WORD_COUNT],
            active: [[0; DESC_WORDS]; lcdif_regs::LAYER_COUNT],
            frames: 0,
        };
        model.regs[lcdif_regs::CTRL / 4] = 0x8000_0000;
        model.regs[lcdif_regs::HSYN_PARA / 4] = 0x00C0_1803;
        model.regs[lcdif_regs::VSYN_PARA / 4] = 0x00C0_1803;
        model.regs[lcdif_regs::PDI_PARA / 4] = lcdif_regs::PDI_PARA_DEFAULT;
        model.regs[lcdif_regs::WR_CTRL / 4] = 0x007C_0000;
        for layer in 0..lcdif_regs::LAYER_COUNT {
            model.regs[lcdif_regs::csc_coef0(layer) / 4] = 0x0400_0000;
            model.regs[lcdif_regs::csc_coef1(layer) / 4] = 0x0123_0208;
            model.regs[lcdif_regs::csc_coef2(layer) / 4] = 0x076B_079C;
        }
        model
    }

    /// Raw register value, shadow side.
    #[must_use]
    pub fn reg(&self, offset: usize) -> u32 {
        self.regs[offset / 4]
    }

    /// The active descriptor words CTRLDESCL1..6 for one layer, as
    /// promoted by the last shadow load.
    #[must_use]
    pub fn active_descriptor(&self, layer: usize) -> [u32; DESC_WORDS] {
        self.active[layer]
    }

    /// Number of frames ticked so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether a domain's interrupt line is asserted.
    #[must_use]
    pub fn irq_pending(&self, domain: usize) -> bool {
        let status = self.regs[lcdif_regs::int_status(domain) / 4];
        let enable = self.regs[lcdif_regs::int_enable(domain) / 4];
        status & enable != 0
    }

    /// Play one frame's vertical blank.
    pub fn tick_frame(&mut self) {
        self.frames += 1;
        log::trace!("frame {}", self.frames);

        for layer in 0..lcdif_regs::LAYER_COUNT {
            let desc5_idx = lcdif_regs::ctrldescl5(layer) / 4;
            let mut desc5 = CtrlDescL5Reg::from_raw(self.regs[desc5_idx]);
            if desc5.shadow_load_en() {
                desc5.set_shadow_load_en(false);
                self.regs[desc5_idx] = desc5.to_raw();
                // The trigger bit was cleared above, so the promoted
                // copy never carries it.
                for word in 0..DESC_WORDS {
                    self.active[layer][word] =
                        self.regs[(lcdif_regs::ctrldescl1(layer) + 4 * word) / 4];
                }
            }
        }

        // A pending palette is taken over during the same blank.
        self.regs[lcdif_regs::CLUT_LOAD / 4] &= !1;

        let wr_ctrl_idx = lcdif_regs::WR_CTRL / 4;
        let wr_ctrl = WrCtrlReg::from_raw(self.regs[wr_ctrl_idx]);
        if wr_ctrl.enable() {
            self.raise(STORE_FRAME_DONE);
            if !wr_ctrl.repeat() {
                // One-shot capture clears its own enable.
                self.regs[wr_ctrl_idx] &= !1;
            }
        }

        let para = DispParaReg::from_raw(self.regs[lcdif_regs::DISP_PARA / 4]);
        if para.disp_on() {
            self.raise(VSYNC_EDGE | VERTICAL_BLANKING);
            for layer in 0..lcdif_regs::LAYER_COUNT {
                if CtrlDescL5Reg::from_raw(self.active[layer][4]).en() {
                    self.raise(1 << (16 + layer));
                }
            }
        }
    }

    /// Latch status bits in both domains. Status latches regardless of
    /// the enable masks.
    fn raise(&mut self, bits: u32) {
        for domain in 0..lcdif_regs::DOMAIN_COUNT {
            self.regs[lcdif_regs::int_status(domain) / 4] |= bits;
        }
    }

    fn write(&mut self, offset: usize, value: u32) {
        assert!(offset % 4 == 0 && offset < lcdif_regs::SIZE);
        for domain in 0..lcdif_regs::DOMAIN_COUNT {
            if offset == lcdif_regs::int_status(domain) {
                // Write-1-to-clear.
                self.regs[offset / 4] &= !value;
                return;
            }
        }
        self.regs[offset / 4] = value;
    }

    fn read(&self, offset: usize) -> u32 {
        assert!(offset % 4 == 0 && offset < lcdif_regs::SIZE);
        self.regs[offset / 4]
    }
}

impl Default for LcdifModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable bus handle to a [`LcdifModel`].
#[derive(Clone, Default)]
pub struct SharedModel(Rc<RefCell<LcdifModel>>);

impl SharedModel {
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(LcdifModel::new())))
    }

    /// Borrow the model, e.g. to inspect active state.
    #[must_use]
    pub fn model(&self) -> Ref<'_, LcdifModel> {
        self.0.borrow()
    }

    /// Borrow the model mutably, e.g. to tick frames.
    #[must_use]
    pub fn model_mut(&self) -> RefMut<'_, LcdifModel> {
        self.0.borrow_mut()
    }
}

impl RegisterBus for SharedModel {
    type Error = core::convert::Infallible;

    fn read_register(&mut self, offset: usize) -> Result<u32, Self::Error> {
        Ok(self.0.borrow().read(offset))
    }

    fn write_register(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        self.0.borrow_mut().write(offset, value);
        Ok(())
    }
}
