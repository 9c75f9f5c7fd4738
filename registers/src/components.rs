//! Register map component definitions

pub mod alpha_mode_e;
pub mod lcdif_regs;
pub mod line_order_e;
pub mod pd_factor_mode_e;
pub mod pd_global_alpha_mode_e;
pub mod store_format_e;
