use lcdifv2_registers::components::lcdif_regs;
use lcdifv2_registers::reg::Register;

/// Test every address formula against the documented register map
#[test]
fn test_lcdif_regs_addresses() {
    assert_eq!(lcdif_regs::CTRL, 0x000);
    assert_eq!(lcdif_regs::DISP_PARA, 0x004);
    assert_eq!(lcdif_regs::DISP_SIZE, 0x008);
    assert_eq!(lcdif_regs::HSYN_PARA, 0x00C);
    assert_eq!(lcdif_regs::VSYN_PARA, 0x010);
    assert_eq!(lcdif_regs::PDI_PARA, 0x014);
    assert_eq!(lcdif_regs::int_status(0), 0x018);
    assert_eq!(lcdif_regs::int_enable(0), 0x01C);
    assert_eq!(lcdif_regs::int_status(1), 0x020);
    assert_eq!(lcdif_regs::int_enable(1), 0x024);
    assert_eq!(lcdif_regs::WR_CTRL, 0x028);
    assert_eq!(lcdif_regs::WR_BASE_ADDR, 0x02C);
    assert_eq!(lcdif_regs::WR_PITCH, 0x030);
    assert_eq!(lcdif_regs::CLUT_LOAD, 0x034);

    assert_eq!(lcdif_regs::ctrldescl1(0), 0x200);
    assert_eq!(lcdif_regs::ctrldescl2(0), 0x204);
    assert_eq!(lcdif_regs::ctrldescl3(0), 0x208);
    assert_eq!(lcdif_regs::ctrldescl4(0), 0x20C);
    assert_eq!(lcdif_regs::ctrldescl5(0), 0x210);
    assert_eq!(lcdif_regs::ctrldescl6(0), 0x214);
    assert_eq!(lcdif_regs::csc_coef0(0), 0x218);
    assert_eq!(lcdif_regs::csc_coef1(0), 0x21C);
    assert_eq!(lcdif_regs::csc_coef2(0), 0x220);

    assert_eq!(lcdif_regs::ctrldescl1(1), 0x240);
    assert_eq!(lcdif_regs::ctrldescl5(7), 0x3D0);
    assert_eq!(lcdif_regs::csc_coef2(7), 0x3E0);

    assert_eq!(lcdif_regs::clut_ram(0, 0), 0x1000);
    assert_eq!(lcdif_regs::clut_ram(0, 255), 0x13FC);
    assert_eq!(lcdif_regs::clut_ram(1, 0), 0x1400);
    assert_eq!(lcdif_regs::clut_ram(3, 255), 0x1FFC);
    assert_eq!(lcdif_regs::clut_ram(7, 0), 0x2C00);
    assert_eq!(lcdif_regs::clut_ram(7, 255), 0x2FFC);
}

/// No layer block, interrupt bank or LUT word may fall outside the map
#[test]
fn test_lcdif_regs_bounds() {
    for domain in 0..lcdif_regs::DOMAIN_COUNT {
        assert!(lcdif_regs::int_enable(domain) + 4 <= lcdif_regs::SIZE);
    }
    for layer in 0..lcdif_regs::LAYER_COUNT {
        assert!(lcdif_regs::csc_coef2(layer) + 4 <= lcdif_regs::SIZE);
        assert!(
            lcdif_regs::clut_ram(layer, lcdif_regs::LUT_ENTRY_COUNT - 1) + 4
                <= lcdif_regs::SIZE
        );
    }
}

/// Layer blocks must not overlap the LUT RAM
#[test]
fn test_lcdif_regs_no_overlap() {
    assert!(
        lcdif_regs::csc_coef2(lcdif_regs::LAYER_COUNT - 1) + 4 <= lcdif_regs::clut_ram(0, 0)
    );
}

/// Reset values decode to the documented field defaults
#[test]
fn test_lcdif_regs_reset_values() {
    assert_eq!(lcdif_regs::CtrlReg::default().to_raw(), 0x8000_0000);
    assert_eq!(lcdif_regs::DispParaReg::default().to_raw(), 0x0000_0000);
    assert_eq!(lcdif_regs::HsynParaReg::default().to_raw(), 0x00C0_1803);
    assert_eq!(lcdif_regs::VsynParaReg::default().to_raw(), 0x00C0_1803);
    assert_eq!(lcdif_regs::WrCtrlReg::default().to_raw(), 0x007C_0000);
    assert_eq!(lcdif_regs::CscCoef0Reg::default().to_raw(), 0x0400_0000);
    assert_eq!(lcdif_regs::CscCoef1Reg::default().to_raw(), 0x0123_0208);
    assert_eq!(lcdif_regs::CscCoef2Reg::default().to_raw(), 0x076B_079C);
}

/// A descriptor control word survives a raw round trip unchanged
#[test]
fn test_ctrldescl5_round_trip() {
    use lcdifv2_registers::components::alpha_mode_e::AlphaModeE;

    let mut reg = lcdif_regs::CtrlDescL5Reg::default();
    reg.set_global_alpha(0x80);
    reg.set_ab_mode(AlphaModeE::GlobalOverride);
    reg.set_bpp(0x4);
    reg.set_en(true);
    let raw = reg.to_raw();
    let back = lcdif_regs::CtrlDescL5Reg::from_raw(raw);
    assert_eq!(back, reg);
    assert_eq!(back.global_alpha(), 0x80);
    assert_eq!(back.ab_mode(), Ok(AlphaModeE::GlobalOverride));
    assert_eq!(back.bpp(), 0x4);
    assert!(back.en());
}
