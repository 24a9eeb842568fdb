//! Clock tree for the NUCLEO-F429ZI
//!
//! The ST-LINK feeds an 8 MHz clock into OSC_IN, so the HSE runs in bypass
//! mode. The main PLL takes it to 180 MHz:
//!
//! ```text
//! 8 MHz / M=8 = 1 MHz * N=360 = 360 MHz / P=2 = 180 MHz SYSCLK
//! AHB 180 MHz, APB1 /4 = 45 MHz, APB2 /2 = 90 MHz
//! ```

use embassy_stm32::rcc::{
    AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPDiv, PllPreDiv, PllSource, Sysclk,
};
use embassy_stm32::time::Hertz;
use embassy_stm32::Config;

/// HSE frequency supplied by the ST-LINK MCO
pub const HSE_HZ: u32 = 8_000_000;

/// Resulting system clock
pub const SYSCLK_HZ: u32 = 180_000_000;

/// embassy-stm32 config for 180 MHz from the bypassed HSE
pub fn nucleo_f429zi_config() -> Config {
    let mut config = Config::default();
    config.rcc.hse = Some(Hse {
        freq: Hertz(HSE_HZ),
        mode: HseMode::Bypass,
    });
    config.rcc.pll_src = PllSource::HSE;
    config.rcc.pll = Some(Pll {
        prediv: PllPreDiv::DIV8,
        mul: PllMul::MUL360,
        divp: Some(PllPDiv::DIV2),
        divq: None,
        divr: None,
    });
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV4;
    config.rcc.apb2_pre = APBPrescaler::DIV2;
    config.rcc.sys = Sysclk::PLL1_P;
    config
}
