//! Marquee - LCD1602 text display firmware
//!
//! Firmware for a NUCLEO-F429ZI driving a 16x2 character LCD through a
//! PCF8574 I2C backpack. Text lines arrive over the ST-LINK virtual COM
//! port and are shown either statically or as a right-to-left marquee; the
//! user button switches between the two.

#![no_std]
#![no_main]

mod board;
mod channels;
mod config;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::peripherals::USART3;
use embassy_stm32::usart::{self, Uart};
use embassy_time::{Delay, Duration};
use {defmt_rtt as _, panic_probe as _};

use marquee_core::DisplayEngine;
use marquee_drivers::{Button, Heartbeat, Lcd1602};
use marquee_hal::i2c::I2cConfig;
use marquee_hal::uart::UartConfig;
use marquee_hal::{Polarity, UartTx};
use marquee_hal_stm32f4::{
    i2c_config, nucleo_f429zi_config, usart_config, Stm32I2c, Stm32Input, Stm32Output,
    Stm32UartTx,
};

use crate::tasks::DisplayTaskConfig;

bind_interrupts!(struct Irqs {
    USART3 => usart::InterruptHandler<USART3>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Marquee firmware starting...");

    let p = embassy_stm32::init(nucleo_f429zi_config());
    info!("Peripherals initialized");

    let config = config::load();

    // I2C1 for the LCD backpack (PB8=SCL, PB9=SDA)
    let mut bus_config = i2c_config(&I2cConfig::STANDARD);
    bus_config.timeout = Duration::from_millis(100);
    let i2c = Stm32I2c::new(I2c::new_blocking(p.I2C1, p.PB8, p.PB9, bus_config));

    let mut lcd = Lcd1602::with_geometry(
        i2c,
        Delay,
        config.display.i2c_address,
        config.display.cols,
        config.display.rows,
    );
    match lcd.init() {
        Ok(()) => {
            info!("LCD initialized");
            if let Err(e) = lcd.set_backlight(config.display.backlight) {
                warn!("Failed to set backlight: {:?}", e);
            }
        }
        // Keep running: the heartbeat and serial echo still work
        Err(e) => error!("Failed to initialize LCD: {:?}", e),
    }
    let engine = DisplayEngine::from_config(lcd, &config.render);

    // USART3 to the ST-LINK VCP (PD8=TX, PD9=RX)
    let uart_config = usart_config(&UartConfig::with_baudrate(config.serial.baudrate));
    let uart = unwrap!(Uart::new(
        p.USART3,
        p.PD9, // RX
        p.PD8, // TX
        Irqs,
        p.DMA1_CH3,
        p.DMA1_CH1,
        uart_config,
    ));
    let (tx, rx) = uart.split();
    let mut tx = Stm32UartTx::new(tx);
    if let Err(e) = tx.write_line("Marquee ready") {
        warn!("UART write error: {:?}", e);
    }

    // User button (PC13) and blue LED (PB7)
    let polarity = if config.button.active_low {
        Polarity::ActiveLow
    } else {
        Polarity::ActiveHigh
    };
    let pull = match polarity {
        Polarity::ActiveHigh => Pull::Down,
        Polarity::ActiveLow => Pull::Up,
    };
    let button = Button::new(Stm32Input::new(Input::new(p.PC13, pull)), polarity);
    let led = Heartbeat::new(
        Stm32Output::new(Output::new(p.PB7, Level::Low, Speed::Low)),
        config.heartbeat.first_ms,
        config.heartbeat.second_ms,
    );

    let task_config = DisplayTaskConfig {
        debounce_ms: config.button.debounce_ms,
        poll_interval_ms: config.render.poll_interval_ms,
        echo_events: config.serial.echo_events,
    };

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::uart_rx_task(rx)));
    unwrap!(spawner.spawn(tasks::display_task(engine, button, led, tx, task_config)));

    info!("All tasks spawned, firmware running");
}
