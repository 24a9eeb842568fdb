//! Display task
//!
//! Cooperative main loop. Each pass samples the button on its debounce
//! period, blinks the heartbeat, hands the newest received line to the engine,
//! ticks the active render strategy and then yields.

use defmt::*;
use embassy_time::{Instant, Timer};

use marquee_core::input::ButtonEvent;
use marquee_core::render::RenderMode;
use marquee_core::timing::Delay;
use marquee_hal::UartTx;

use crate::board::{Engine, Led, SerialTx, UserButton};
use crate::channels::TEXT_MAILBOX;

/// Settings the loop needs from `MarqueeConfig`
#[derive(Debug, Clone, Copy, Format)]
pub struct DisplayTaskConfig {
    /// Button sampling period
    pub debounce_ms: u32,
    /// Pause between loop passes
    pub poll_interval_ms: u32,
    /// Echo button and mode events over UART
    pub echo_events: bool,
}

/// Display task - owns the engine and every local peripheral
#[embassy_executor::task]
pub async fn display_task(
    mut engine: Engine,
    mut button: UserButton,
    mut led: Led,
    mut tx: SerialTx,
    config: DisplayTaskConfig,
) {
    info!("Display task started in {} mode", engine.mode().label());

    let start = Instant::now();
    let mut debounce = Delay::new(config.debounce_ms);
    // Log the first failure after each successful tick, not every pass
    let mut display_ok = true;

    loop {
        // Truncation wraps every ~49.7 days; all timing uses wrapping math
        let now_ms = start.elapsed().as_millis() as u32;

        if debounce.read(now_ms) {
            if let Some(event) = button.sample() {
                debug!("Button event: {:?}", event);
                if config.echo_events {
                    echo_event(&mut tx, event);
                }
            }
        }

        if button.take_press() {
            let mode = engine.cycle_mode();
            led.toggle_rate();
            info!("Mode: {}", mode.label());
            if config.echo_events {
                echo_mode(&mut tx, mode);
            }
        }

        if led.poll(now_ms) {
            trace!("Heartbeat");
        }

        if let Some(line) = TEXT_MAILBOX.take() {
            match engine.append(line.as_str()) {
                Ok(revision) => debug!("Text revision {}", revision),
                Err(e) => warn!("Text rejected: {:?}", e),
            }
        }

        match engine.tick(now_ms) {
            Ok(refresh) => {
                if refresh.is_repainted() {
                    trace!("Repainted at {} ms", now_ms);
                }
                display_ok = true;
            }
            Err(e) => {
                if display_ok {
                    warn!("Display error: {:?}", e);
                }
                display_ok = false;
            }
        }

        Timer::after_millis(config.poll_interval_ms as u64).await;
    }
}

fn echo_event(tx: &mut SerialTx, event: ButtonEvent) {
    if let Err(e) = tx.write_line(event.message()) {
        warn!("UART write error: {:?}", e);
    }
}

fn echo_mode(tx: &mut SerialTx, mode: RenderMode) {
    let result = tx
        .write_blocking(b"Mode: ")
        .and_then(|()| tx.write_line(mode.label()));
    if let Err(e) = result {
        warn!("UART write error: {:?}", e);
    }
}
