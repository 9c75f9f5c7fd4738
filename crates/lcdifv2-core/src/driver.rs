//! Compositor driver core, generic over RegisterBus.
//!
//! Owns the bus for one peripheral instance and carries the init/reset
//! sequencing plus the global display configuration. Layer, interrupt,
//! LUT, CSC and store operations live in their own modules as further
//! impl blocks on [`Lcdifv2`].

use lcdifv2_hal::RegisterBus;
use lcdifv2_registers::lcdif_regs;
use lcdifv2_registers::lcdif_regs::{
    CtrlReg, DispParaReg, DispSizeReg, HsynParaReg, VsynParaReg, WrCtrlReg,
};
use lcdifv2_registers::lcdif_regs::{CscCoef0Reg, CscCoef1Reg, CscCoef2Reg};
use lcdifv2_registers::reg::Register;

use crate::interrupt::PolarityFlags;
use crate::LineOrderE;

/// Error type for compositor operations, generic over bus errors.
#[derive(Debug)]
pub enum Error<E: core::fmt::Debug> {
    /// A palette update is still waiting to be taken over at vertical
    /// blank; the LUT RAM must not be touched until then.
    LutBusy,
    /// Register bus error.
    Bus(E),
}

impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

/// Display timing and output signal configuration.
///
/// Porch and pulse widths are counted in pixels (horizontal) and lines
/// (vertical). The defaults mirror the hardware reset state: zero panel
/// size and 3-cycle sync timing, which must be overwritten before the
/// display is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Panel width in pixels.
    pub panel_width: u16,
    /// Panel height in pixels.
    pub panel_height: u16,
    /// Horizontal sync pulse width.
    pub hsw: u8,
    /// Horizontal front porch.
    pub hfp: u8,
    /// Horizontal back porch.
    pub hbp: u8,
    /// Vertical sync pulse width.
    pub vsw: u8,
    /// Vertical front porch.
    pub vfp: u8,
    /// Vertical back porch.
    pub vbp: u8,
    /// Output signal polarity inversions.
    pub polarity: PolarityFlags,
    /// RGB channel ordering on the output interface.
    pub line_order: LineOrderE,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            panel_width: 0,
            panel_height: 0,
            hsw: 3,
            hfp: 3,
            hbp: 3,
            vsw: 3,
            vfp: 3,
            vbp: 3,
            polarity: PolarityFlags::empty(),
            line_order: LineOrderE::Rgb,
        }
    }
}

/// Driver for one LCDIFv2 instance. Owns the register bus.
pub struct Lcdifv2<B: RegisterBus> {
    pub(crate) bus: B,
}

impl<B: RegisterBus> Lcdifv2<B> {
    /// Take ownership of an instance: put every register into its
    /// documented reset state, then release the module soft reset.
    ///
    /// The peripheral clock must already be running; clock gating is the
    /// platform's business.
    pub fn new(bus: B) -> Result<Self, Error<B::Error>> {
        let mut driver = Self { bus };
        driver.reset_registers()?;
        driver.bus.write_register(lcdif_regs::CTRL, 0)?;
        #[cfg(feature = "log")]
        log::debug!("compositor out of reset");
        Ok(driver)
    }

    /// Put every register back into its reset state and release the soft
    /// reset again. Equivalent to dropping all configuration.
    pub fn reset(&mut self) -> Result<(), Error<B::Error>> {
        self.reset_registers()?;
        self.bus.write_register(lcdif_regs::CTRL, 0)?;
        Ok(())
    }

    /// Shut the instance down and hand the bus back. The module is left
    /// held in soft reset; the caller may gate its clock afterwards.
    pub fn release(mut self) -> Result<B, Error<B::Error>> {
        self.reset_registers()?;
        Ok(self.bus)
    }

    /// Write the documented reset value to every register. Leaves the
    /// module held in soft reset via CTRL.
    fn reset_registers(&mut self) -> Result<(), Error<B::Error>> {
        self.write_reg(lcdif_regs::CTRL, CtrlReg::default())?;
        self.write_reg(lcdif_regs::DISP_PARA, DispParaReg::default())?;
        self.write_reg(lcdif_regs::DISP_SIZE, DispSizeReg::default())?;
        self.write_reg(lcdif_regs::HSYN_PARA, HsynParaReg::default())?;
        self.write_reg(lcdif_regs::VSYN_PARA, VsynParaReg::default())?;
        self.bus
            .write_register(lcdif_regs::PDI_PARA, lcdif_regs::PDI_PARA_DEFAULT)?;
        self.write_reg(lcdif_regs::WR_CTRL, WrCtrlReg::default())?;
        self.bus.write_register(lcdif_regs::WR_BASE_ADDR, 0)?;
        self.bus.write_register(lcdif_regs::WR_PITCH, 0)?;
        self.bus.write_register(lcdif_regs::CLUT_LOAD, 0)?;

        for domain in 0..lcdif_regs::DOMAIN_COUNT {
            self.bus.write_register(lcdif_regs::int_enable(domain), 0)?;
            // Status bits are write-1-to-clear.
            self.bus
                .write_register(lcdif_regs::int_status(domain), 0xFFFF_FFFF)?;
        }

        for layer in 0..lcdif_regs::LAYER_COUNT {
            self.bus.write_register(lcdif_regs::ctrldescl1(layer), 0)?;
            self.bus.write_register(lcdif_regs::ctrldescl2(layer), 0)?;
            self.bus.write_register(lcdif_regs::ctrldescl3(layer), 0)?;
            self.bus.write_register(lcdif_regs::ctrldescl4(layer), 0)?;
            self.bus.write_register(lcdif_regs::ctrldescl5(layer), 0)?;
            self.bus.write_register(lcdif_regs::ctrldescl6(layer), 0)?;
            self.write_reg(lcdif_regs::csc_coef0(layer), CscCoef0Reg::default())?;
            self.write_reg(lcdif_regs::csc_coef1(layer), CscCoef1Reg::default())?;
            self.write_reg(lcdif_regs::csc_coef2(layer), CscCoef2Reg::default())?;
        }

        Ok(())
    }

    /// Program panel size, sync timing, line order and signal polarity.
    ///
    /// Also clears DISP_ON, so call this before [`Self::enable_display`].
    pub fn set_display_config(&mut self, config: &DisplayConfig) -> Result<(), Error<B::Error>> {
        let mut size = DispSizeReg::from_raw(0);
        size.set_delta_x(config.panel_width);
        size.set_delta_y(config.panel_height);
        self.write_reg(lcdif_regs::DISP_SIZE, size)?;

        let mut hsyn = HsynParaReg::from_raw(0);
        hsyn.set_fp_h(config.hfp as u16);
        hsyn.set_pw_h(config.hsw as u16);
        hsyn.set_bp_h(config.hbp as u16);
        self.write_reg(lcdif_regs::HSYN_PARA, hsyn)?;

        let mut vsyn = VsynParaReg::from_raw(0);
        vsyn.set_fp_v(config.vfp as u16);
        vsyn.set_pw_v(config.vsw as u16);
        vsyn.set_bp_v(config.vbp as u16);
        self.write_reg(lcdif_regs::VSYN_PARA, vsyn)?;

        let mut para = DispParaReg::from_raw(0);
        para.set_line_pattern(config.line_order.bits());
        self.write_reg(lcdif_regs::DISP_PARA, para)?;

        self.bus
            .write_register(lcdif_regs::CTRL, config.polarity.bits())?;

        #[cfg(feature = "log")]
        log::debug!(
            "display configured {}x{}",
            config.panel_width,
            config.panel_height
        );
        Ok(())
    }

    /// Read the current display configuration back from the registers.
    pub fn display_config(&mut self) -> Result<DisplayConfig, Error<B::Error>> {
        let size: DispSizeReg = self.read_reg(lcdif_regs::DISP_SIZE)?;
        let hsyn: HsynParaReg = self.read_reg(lcdif_regs::HSYN_PARA)?;
        let vsyn: VsynParaReg = self.read_reg(lcdif_regs::VSYN_PARA)?;
        let para: DispParaReg = self.read_reg(lcdif_regs::DISP_PARA)?;
        let ctrl: CtrlReg = self.read_reg(lcdif_regs::CTRL)?;

        Ok(DisplayConfig {
            panel_width: size.delta_x(),
            panel_height: size.delta_y(),
            hsw: hsyn.pw_h() as u8,
            hfp: hsyn.fp_h() as u8,
            hbp: hsyn.bp_h() as u8,
            vsw: vsyn.pw_v() as u8,
            vfp: vsyn.fp_v() as u8,
            vbp: vsyn.bp_v() as u8,
            polarity: PolarityFlags::from_bits_truncate(ctrl.to_raw()),
            // A reserved LINE_PATTERN encoding reads back as plain RGB.
            line_order: LineOrderE::from_bits(para.line_pattern()).unwrap_or(LineOrderE::Rgb),
        })
    }

    /// Start or stop scanout.
    pub fn enable_display(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.modify_reg(lcdif_regs::DISP_PARA, |para: &mut DispParaReg| {
            para.set_disp_on(enable)
        })
    }

    pub(crate) fn read_reg<R>(&mut self, offset: usize) -> Result<R, Error<B::Error>>
    where
        R: Register<Regwidth = u32>,
    {
        Ok(R::from_raw(self.bus.read_register(offset)?))
    }

    pub(crate) fn write_reg<R>(&mut self, offset: usize, reg: R) -> Result<(), Error<B::Error>>
    where
        R: Register<Regwidth = u32>,
    {
        self.bus.write_register(offset, reg.to_raw())?;
        Ok(())
    }

    pub(crate) fn modify_reg<R>(
        &mut self,
        offset: usize,
        f: impl FnOnce(&mut R),
    ) -> Result<(), Error<B::Error>>
    where
        R: Register<Regwidth = u32>,
    {
        let mut reg = R::from_raw(self.bus.read_register(offset)?);
        f(&mut reg);
        self.bus.write_register(offset, reg.to_raw())?;
        Ok(())
    }
}
