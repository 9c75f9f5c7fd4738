//! Integration tests for Lcdifv2 using a mock register bus.
//!
//! Verifies the init/reset sequence and the register packing of the
//! display, layer, blend, CSC, LUT, interrupt and store operations.
//!
//! Uses a RAM-backed mock bus that captures (offset, value) write tuples,
//! so read-modify-write paths see their own earlier writes.

use std::cell::RefCell;
use std::rc::Rc;

use lcdifv2_core::{
    AlphaModeE, BlendConfig, BufferConfig, CscMode, DisplayConfig, Error, Interrupts, Lcdifv2,
    LineOrderE, PdFactorModeE, PdGlobalAlphaModeE, PixelFormat, PolarityFlags, StoreConfig,
    StoreFormatE,
};
use lcdifv2_registers::lcdif_regs;

/// Captured register write: (offset, value).
type WriteRecord = (usize, u32);

/// Mock register bus backed by a flat RAM image so reads observe earlier
/// writes, with a separate spy log of every write.
#[derive(Clone)]
struct MockBus {
    mem: Rc<RefCell<Vec<u32>>>,
    writes: Rc<RefCell<Vec<WriteRecord>>>,
}

impl MockBus {
    fn new() -> Self {
        Self {
            mem: Rc::new(RefCell::new(vec![0; lcdif_regs::SIZE / 4])),
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Plant a register value without recording a write.
    fn poke(&self, offset: usize, value: u32) {
        self.mem.borrow_mut()[offset / 4] = value;
    }

    /// Current register value.
    fn peek(&self, offset: usize) -> u32 {
        self.mem.borrow()[offset / 4]
    }

    /// Get all captured writes.
    fn get_writes(&self) -> Vec<WriteRecord> {
        self.writes.borrow().clone()
    }

    /// Forget writes recorded so far (e.g. the init sequence).
    fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }

    /// Find the last write to a specific offset.
    fn last_write_to(&self, offset: usize) -> Option<u32> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
    }
}

#[derive(Debug)]
struct MockError;

impl lcdifv2_hal::RegisterBus for MockBus {
    type Error = MockError;

    fn read_register(&mut self, offset: usize) -> Result<u32, Self::Error> {
        Ok(self.mem.borrow()[offset / 4])
    }

    fn write_register(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        self.mem.borrow_mut()[offset / 4] = value;
        self.writes.borrow_mut().push((offset, value));
        Ok(())
    }
}

/// Helper: create a driver on a fresh mock bus with the init writes
/// already dropped from the spy log.
fn make_driver() -> (Lcdifv2<MockBus>, MockBus) {
    let bus = MockBus::new();
    let bus_clone = bus.clone();
    let driver = Lcdifv2::new(bus).expect("init should succeed");
    bus_clone.clear_writes();
    (driver, bus_clone)
}

// ============================================================================
// Init / reset tests
// ============================================================================

mod init_tests {
    use super::*;

    #[test]
    fn init_writes_reset_values_then_releases_reset() {
        let bus = MockBus::new();
        let bus_clone = bus.clone();
        let _driver = Lcdifv2::new(bus).expect("init should succeed");

        let writes = bus_clone.get_writes();

        // The reset sequence parks CTRL at its power-on value before the
        // final write releases the soft reset.
        let ctrl_writes: Vec<u32> = writes
            .iter()
            .filter(|(o, _)| *o == lcdif_regs::CTRL)
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(ctrl_writes, vec![0x8000_0000, 0]);

        assert_eq!(
            bus_clone.last_write_to(lcdif_regs::HSYN_PARA),
            Some(0x00C0_1803)
        );
        assert_eq!(
            bus_clone.last_write_to(lcdif_regs::PDI_PARA),
            Some(0x0000_1000)
        );
        assert_eq!(
            bus_clone.last_write_to(lcdif_regs::WR_CTRL),
            Some(0x007C_0000)
        );

        // Both domains get their status cleared and masks dropped.
        for domain in 0..lcdif_regs::DOMAIN_COUNT {
            assert_eq!(
                bus_clone.last_write_to(lcdif_regs::int_status(domain)),
                Some(0xFFFF_FFFF)
            );
            assert_eq!(
                bus_clone.last_write_to(lcdif_regs::int_enable(domain)),
                Some(0)
            );
        }

        // Every layer descriptor is zeroed and CSC is back at defaults.
        for layer in 0..lcdif_regs::LAYER_COUNT {
            assert_eq!(bus_clone.last_write_to(lcdif_regs::ctrldescl5(layer)), Some(0));
            assert_eq!(
                bus_clone.last_write_to(lcdif_regs::csc_coef0(layer)),
                Some(0x0400_0000)
            );
            assert_eq!(
                bus_clone.last_write_to(lcdif_regs::csc_coef2(layer)),
                Some(0x076B_079C)
            );
        }
    }

    #[test]
    fn release_leaves_module_in_reset() {
        let (driver, bus) = make_driver();

        let _bus_back = driver.release().expect("release should succeed");

        assert_eq!(bus.peek(lcdif_regs::CTRL), 0x8000_0000);
    }
}

// ============================================================================
// Display configuration tests
// ============================================================================

mod display_tests {
    use super::*;

    fn panel_config() -> DisplayConfig {
        DisplayConfig {
            panel_width: 800,
            panel_height: 480,
            hsw: 4,
            hfp: 8,
            hbp: 43,
            vsw: 4,
            vfp: 8,
            vbp: 12,
            polarity: PolarityFlags::INVERT_HSYNC | PolarityFlags::INVERT_VSYNC,
            line_order: LineOrderE::Bgr,
        }
    }

    #[test]
    fn display_config_packs_correctly() {
        let (mut driver, bus) = make_driver();

        driver
            .set_display_config(&panel_config())
            .expect("set_display_config should succeed");

        assert_eq!(
            bus.last_write_to(lcdif_regs::DISP_SIZE),
            Some(800 | (480 << 16))
        );
        // FP at [8:0], PW at [19:11], BP at [30:22].
        assert_eq!(
            bus.last_write_to(lcdif_regs::HSYN_PARA),
            Some(8 | (4 << 11) | (43 << 22))
        );
        assert_eq!(
            bus.last_write_to(lcdif_regs::VSYN_PARA),
            Some(8 | (4 << 11) | (12 << 22))
        );
        // Bgr = 5 in LINE_PATTERN at [28:26], DISP_ON stays clear.
        assert_eq!(bus.last_write_to(lcdif_regs::DISP_PARA), Some(5 << 26));
        // INV_VS | INV_HS.
        assert_eq!(bus.last_write_to(lcdif_regs::CTRL), Some(0b11));
    }

    #[test]
    fn display_config_round_trips() {
        let (mut driver, _bus) = make_driver();

        let config = panel_config();
        driver
            .set_display_config(&config)
            .expect("set_display_config should succeed");

        let readback = driver.display_config().expect("readback should succeed");
        assert_eq!(readback, config);
    }

    #[test]
    fn enable_display_preserves_line_order() {
        let (mut driver, bus) = make_driver();

        driver
            .set_display_config(&panel_config())
            .expect("set_display_config should succeed");
        driver.enable_display(true).expect("enable should succeed");

        assert_eq!(
            bus.last_write_to(lcdif_regs::DISP_PARA),
            Some((5 << 26) | (1 << 31))
        );

        driver.enable_display(false).expect("disable should succeed");
        assert_eq!(bus.last_write_to(lcdif_regs::DISP_PARA), Some(5 << 26));
    }
}

// ============================================================================
// Interrupt domain tests
// ============================================================================

mod interrupt_tests {
    use super::*;

    #[test]
    fn enable_is_cumulative_and_per_domain() {
        let (mut driver, bus) = make_driver();

        driver
            .enable_interrupts(0, Interrupts::VERTICAL_BLANKING)
            .expect("enable should succeed");
        driver
            .enable_interrupts(0, Interrupts::OUTPUT_UNDERRUN)
            .expect("enable should succeed");

        assert_eq!(
            bus.peek(lcdif_regs::int_enable(0)),
            (Interrupts::VERTICAL_BLANKING | Interrupts::OUTPUT_UNDERRUN).bits()
        );
        // Domain 1 mask untouched.
        assert_eq!(bus.peek(lcdif_regs::int_enable(1)), 0);
    }

    #[test]
    fn disable_clears_only_named_sources() {
        let (mut driver, bus) = make_driver();

        driver
            .enable_interrupts(1, Interrupts::VERTICAL_BLANKING | Interrupts::STORE_FRAME_DONE)
            .expect("enable should succeed");
        driver
            .disable_interrupts(1, Interrupts::VERTICAL_BLANKING)
            .expect("disable should succeed");

        assert_eq!(
            bus.peek(lcdif_regs::int_enable(1)),
            Interrupts::STORE_FRAME_DONE.bits()
        );
    }

    #[test]
    fn status_reads_and_clears_write_one() {
        let (mut driver, bus) = make_driver();

        bus.poke(
            lcdif_regs::int_status(0),
            (Interrupts::VSYNC_EDGE | Interrupts::layer_dma_done(3)).bits(),
        );

        let status = driver.interrupt_status(0).expect("read should succeed");
        assert!(status.contains(Interrupts::VSYNC_EDGE));
        assert!(status.contains(Interrupts::LAYER3_DMA_DONE));

        driver
            .clear_interrupt_status(0, Interrupts::VSYNC_EDGE)
            .expect("clear should succeed");
        // The driver writes exactly the acknowledge mask; the hardware
        // side of write-1-to-clear is the peripheral's business.
        assert_eq!(
            bus.last_write_to(lcdif_regs::int_status(0)),
            Some(Interrupts::VSYNC_EDGE.bits())
        );
    }

    #[test]
    fn per_layer_helpers_match_named_bits() {
        assert_eq!(Interrupts::layer_dma_error(0), Interrupts::LAYER0_DMA_ERROR);
        assert_eq!(Interrupts::layer_dma_done(7), Interrupts::LAYER7_DMA_DONE);
        assert_eq!(
            Interrupts::layer_fifo_empty(5),
            Interrupts::LAYER5_FIFO_EMPTY
        );
    }
}

// ============================================================================
// Layer geometry and buffer tests
// ============================================================================

mod layer_tests {
    use super::*;

    #[test]
    fn size_and_offset_pack_correctly() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_size(2, 640, 360)
            .expect("set_layer_size should succeed");
        driver
            .set_layer_offset(2, 80, 60)
            .expect("set_layer_offset should succeed");

        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl1(2)),
            Some(640 | (360 << 16))
        );
        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl2(2)),
            Some(80 | (60 << 16))
        );
    }

    #[test]
    fn buffer_config_sets_stride_format_and_safety() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_buffer_config(
                0,
                &BufferConfig {
                    stride_bytes: 1600,
                    pixel_format: PixelFormat::Rgb565,
                },
            )
            .expect("set_layer_buffer_config should succeed");

        assert_eq!(bus.last_write_to(lcdif_regs::ctrldescl3(0)), Some(1600));
        // BPP 4 at [27:24]; blending is off so SAFETY_EN comes along.
        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl5(0)),
            Some((4 << 24) | (1 << 28))
        );
    }

    #[test]
    fn buffer_config_skips_safety_when_blending() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_blend_config(
                1,
                &BlendConfig {
                    global_alpha: 0xFF,
                    alpha_mode: AlphaModeE::Embedded,
                    ..BlendConfig::default()
                },
            )
            .expect("set_layer_blend_config should succeed");
        driver
            .set_layer_buffer_config(
                1,
                &BufferConfig {
                    stride_bytes: 3200,
                    pixel_format: PixelFormat::Argb8888,
                },
            )
            .expect("set_layer_buffer_config should succeed");

        let desc5 = bus.last_write_to(lcdif_regs::ctrldescl5(1)).unwrap();
        assert_eq!((desc5 >> 24) & 0xF, 9, "BPP should be ARGB8888");
        assert_eq!((desc5 >> 28) & 1, 0, "SAFETY_EN must stay clear");
        assert_eq!((desc5 >> 8) & 0x3, 2, "AB_MODE must survive");
    }

    #[test]
    fn yuv_format_field_set_for_packed_422() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_buffer_config(
                1,
                &BufferConfig {
                    stride_bytes: 1600,
                    pixel_format: PixelFormat::Yuyv,
                },
            )
            .expect("set_layer_buffer_config should succeed");

        let desc5 = bus.last_write_to(lcdif_regs::ctrldescl5(1)).unwrap();
        assert_eq!((desc5 >> 24) & 0xF, 7, "packed 4:2:2 uses BPP 7");
        assert_eq!((desc5 >> 14) & 0x3, 2, "YUYV is YUV_FORMAT 2");
    }

    #[test]
    fn buffer_addr_and_background_color_pass_through() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_buffer_addr(4, 0x8020_0000)
            .expect("set_layer_buffer_addr should succeed");
        driver
            .set_layer_background_color(4, 0x00FF_8800)
            .expect("set_layer_background_color should succeed");

        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl4(4)),
            Some(0x8020_0000)
        );
        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl6(4)),
            Some(0x00FF_8800)
        );
    }

    #[test]
    fn layer_state_round_trips() {
        let (mut driver, _bus) = make_driver();

        driver.set_layer_size(6, 320, 240).unwrap();
        driver.set_layer_offset(6, 16, 32).unwrap();
        driver.set_layer_buffer_addr(6, 0x8040_0000).unwrap();
        driver.set_layer_background_color(6, 0x0000_00FF).unwrap();
        let config = BufferConfig {
            stride_bytes: 640,
            pixel_format: PixelFormat::Argb4444,
        };
        driver.set_layer_buffer_config(6, &config).unwrap();
        driver.enable_layer(6, true).unwrap();

        assert_eq!(driver.layer_size(6).unwrap(), (320, 240));
        assert_eq!(driver.layer_offset(6).unwrap(), (16, 32));
        assert_eq!(driver.layer_buffer_addr(6).unwrap(), 0x8040_0000);
        assert_eq!(driver.layer_background_color(6).unwrap(), 0x0000_00FF);
        assert_eq!(driver.layer_buffer_config(6).unwrap(), Some(config));
        assert!(driver.is_layer_enabled(6).unwrap());
        assert!(!driver.is_layer_enabled(7).unwrap());
    }

    #[test]
    fn shadow_trigger_touches_only_its_layer() {
        let (mut driver, bus) = make_driver();

        driver
            .enable_layer(3, true)
            .expect("enable_layer should succeed");
        bus.clear_writes();

        driver
            .trigger_shadow_load(3)
            .expect("trigger_shadow_load should succeed");

        let writes = bus.get_writes();
        assert_eq!(writes.len(), 1, "trigger is a single RMW write");
        assert_eq!(writes[0].0, lcdif_regs::ctrldescl5(3));
        // EN from before plus the trigger bit.
        assert_eq!(writes[0].1, (1 << 31) | (1 << 30));

        assert!(driver.is_shadow_load_pending(3).unwrap());
        assert!(!driver.is_shadow_load_pending(2).unwrap());
    }
}

// ============================================================================
// Blend configuration tests
// ============================================================================

mod blend_tests {
    use super::*;

    #[test]
    fn porter_duff_packs_correctly() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_blend_config(
                6,
                &BlendConfig {
                    global_alpha: 0xF0,
                    alpha_mode: AlphaModeE::PorterDuff,
                    pd_alpha_inverted: true,
                    pd_color_inverted: false,
                    pd_global_alpha_mode: PdGlobalAlphaModeE::Scaled,
                    pd_factor_mode: PdFactorModeE::StraightAlpha,
                },
            )
            .expect("set_layer_blend_config should succeed");

        // alpha 0xF0 | AB_MODE 3<<8 | PD_FACTOR 2<<10 | PD_ALPHA 1<<12
        // | PD_GLOBAL_ALPHA 2<<16; SAFETY_EN stays clear.
        assert_eq!(
            bus.last_write_to(lcdif_regs::ctrldescl5(6)),
            Some(0x0002_1BF0)
        );
    }

    #[test]
    fn disabled_blending_forces_safety() {
        let (mut driver, bus) = make_driver();

        for mode in [
            AlphaModeE::GlobalOverride,
            AlphaModeE::Embedded,
            AlphaModeE::PorterDuff,
        ] {
            driver
                .set_layer_blend_config(
                    0,
                    &BlendConfig {
                        alpha_mode: mode,
                        ..BlendConfig::default()
                    },
                )
                .expect("set_layer_blend_config should succeed");
            let desc5 = bus.last_write_to(lcdif_regs::ctrldescl5(0)).unwrap();
            assert_eq!((desc5 >> 28) & 1, 0, "{mode:?} must not set SAFETY_EN");
        }

        driver
            .set_layer_blend_config(0, &BlendConfig::default())
            .expect("set_layer_blend_config should succeed");
        let desc5 = bus.last_write_to(lcdif_regs::ctrldescl5(0)).unwrap();
        assert_eq!((desc5 >> 28) & 1, 1, "Disabled must set SAFETY_EN");
    }

    #[test]
    fn blend_config_preserves_format_and_enable() {
        let (mut driver, bus) = make_driver();

        driver
            .set_layer_buffer_config(
                5,
                &BufferConfig {
                    stride_bytes: 2400,
                    pixel_format: PixelFormat::Rgb888,
                },
            )
            .expect("set_layer_buffer_config should succeed");
        driver.enable_layer(5, true).expect("enable should succeed");

        driver
            .set_layer_blend_config(
                5,
                &BlendConfig {
                    global_alpha: 0x80,
                    alpha_mode: AlphaModeE::GlobalOverride,
                    ..BlendConfig::default()
                },
            )
            .expect("set_layer_blend_config should succeed");

        let desc5 = bus.last_write_to(lcdif_regs::ctrldescl5(5)).unwrap();
        assert_eq!((desc5 >> 24) & 0xF, 8, "BPP must survive the blend RMW");
        assert_eq!(desc5 >> 31, 1, "EN must survive the blend RMW");
        assert_eq!(desc5 & 0xFF, 0x80);
        assert_eq!((desc5 >> 8) & 0x3, 1);
    }

    #[test]
    fn blend_config_round_trips() {
        let (mut driver, _bus) = make_driver();

        let config = BlendConfig {
            global_alpha: 0x42,
            alpha_mode: AlphaModeE::PorterDuff,
            pd_alpha_inverted: false,
            pd_color_inverted: true,
            pd_global_alpha_mode: PdGlobalAlphaModeE::Local,
            pd_factor_mode: PdFactorModeE::InversedAlpha,
        };
        driver
            .set_layer_blend_config(7, &config)
            .expect("set_layer_blend_config should succeed");

        let readback = driver
            .layer_blend_config(7)
            .expect("readback should succeed");
        assert_eq!(readback, config);
    }
}

// ============================================================================
// CSC tests
// ============================================================================

mod csc_tests {
    use super::*;

    #[test]
    fn yuv2rgb_coefficients() {
        let (mut driver, bus) = make_driver();

        driver
            .set_csc_mode(1, CscMode::Yuv2Rgb)
            .expect("set_csc_mode should succeed");

        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef0(1)), Some(0x8400_0000));
        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef1(1)), Some(0x0123_0208));
        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef2(1)), Some(0x076B_079B));
    }

    #[test]
    fn ycbcr2rgb_coefficients() {
        let (mut driver, bus) = make_driver();

        driver
            .set_csc_mode(0, CscMode::Ycbcr2Rgb)
            .expect("set_csc_mode should succeed");

        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef0(0)), Some(0xC4AB_01F0));
        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef1(0)), Some(0x0198_0204));
        assert_eq!(bus.last_write_to(lcdif_regs::csc_coef2(0)), Some(0x0730_079C));
    }

    #[test]
    fn disable_zeroes_only_that_layer() {
        let (mut driver, bus) = make_driver();

        driver
            .set_csc_mode(2, CscMode::Disabled)
            .expect("set_csc_mode should succeed");

        assert_eq!(bus.peek(lcdif_regs::csc_coef0(2)), 0);
        assert_eq!(bus.peek(lcdif_regs::csc_coef1(2)), 0);
        assert_eq!(bus.peek(lcdif_regs::csc_coef2(2)), 0);
        // The neighbor keeps its reset coefficients.
        assert_eq!(bus.peek(lcdif_regs::csc_coef0(3)), 0x0400_0000);
        assert_eq!(bus.peek(lcdif_regs::csc_coef1(3)), 0x0123_0208);
    }
}

// ============================================================================
// LUT tests
// ============================================================================

mod lut_tests {
    use super::*;

    #[test]
    fn busy_returns_error_without_writing() {
        let (mut driver, bus) = make_driver();

        // A previous palette is still waiting for takeover.
        bus.poke(lcdif_regs::CLUT_LOAD, 1);

        let lut = [0u32; 4];
        let result = driver.set_lut(0, &lut, true);
        assert!(matches!(result, Err(Error::LutBusy)));
        assert!(bus.get_writes().is_empty(), "busy path must not write");
    }

    #[test]
    fn shadow_load_selects_layer_and_arms_update() {
        let (mut driver, bus) = make_driver();

        let lut: Vec<u32> = (0..256).map(|i| 0xFF00_0000 | i).collect();
        driver
            .set_lut(3, &lut, true)
            .expect("set_lut should succeed");

        // SEL_CLUT_NUM at [10:8] plus CLUT_UPDATE_EN.
        assert_eq!(bus.last_write_to(lcdif_regs::CLUT_LOAD), Some((3 << 8) | 1));

        let writes = bus.get_writes();
        assert_eq!(writes.len(), 1 + 256);
        assert_eq!(writes[1], (lcdif_regs::clut_ram(3, 0), 0xFF00_0000));
        assert_eq!(writes[256], (lcdif_regs::clut_ram(3, 255), 0xFF00_00FF));
    }

    #[test]
    fn immediate_load_skips_update_enable() {
        let (mut driver, bus) = make_driver();

        let lut = [0x0012_3456u32; 16];
        driver
            .set_lut(5, &lut, false)
            .expect("set_lut should succeed");

        assert_eq!(bus.last_write_to(lcdif_regs::CLUT_LOAD), Some(5 << 8));
        // Only the 16 given words are written.
        assert_eq!(bus.get_writes().len(), 1 + 16);
        assert_eq!(
            bus.last_write_to(lcdif_regs::clut_ram(5, 15)),
            Some(0x0012_3456)
        );
        assert_eq!(bus.last_write_to(lcdif_regs::clut_ram(5, 16)), None);
    }
}

// ============================================================================
// Store pipeline tests
// ============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn store_config_packs_correctly() {
        let (mut driver, bus) = make_driver();

        driver
            .set_store_config(&StoreConfig {
                buffer_addr: 0x8100_0000,
                pitch_bytes: 3200,
                format: StoreFormatE::Rgb888,
            })
            .expect("set_store_config should succeed");

        assert_eq!(
            bus.last_write_to(lcdif_regs::WR_BASE_ADDR),
            Some(0x8100_0000)
        );
        assert_eq!(bus.last_write_to(lcdif_regs::WR_PITCH), Some(3200));
        // Format replaces the reset BPP field; enable stays clear.
        assert_eq!(bus.last_write_to(lcdif_regs::WR_CTRL), Some(1 << 18));
    }

    #[test]
    fn start_and_stop_toggle_enable_and_repeat() {
        let (mut driver, bus) = make_driver();

        driver
            .set_store_config(&StoreConfig {
                buffer_addr: 0x8100_0000,
                pitch_bytes: 3200,
                format: StoreFormatE::Argb8888,
            })
            .expect("set_store_config should succeed");

        driver.start_store(true).expect("start should succeed");
        assert_eq!(bus.peek(lcdif_regs::WR_CTRL) & 0b11, 0b11);

        driver.stop_store().expect("stop should succeed");
        assert_eq!(bus.peek(lcdif_regs::WR_CTRL) & 0b11, 0);

        driver.start_store(false).expect("start should succeed");
        assert_eq!(bus.peek(lcdif_regs::WR_CTRL) & 0b11, 0b01);
    }

    #[test]
    fn one_shot_start_keeps_armed_repeat() {
        let (mut driver, bus) = make_driver();

        driver.start_store(true).expect("start should succeed");
        assert_eq!(bus.peek(lcdif_regs::WR_CTRL) & 0b11, 0b11);

        // A later one-shot start must not demote a running repeating
        // capture; only stop_store clears REPEAT.
        driver.start_store(false).expect("start should succeed");
        assert_eq!(bus.peek(lcdif_regs::WR_CTRL) & 0b11, 0b11);
    }
}
