//! UART receive task
//!
//! Assembles bytes from USART3 into lines and hands them to the display
//! loop.

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartRx;
use embassy_time::{Duration, Timer};

use marquee_core::text::{LineAssembler, LineError};

use crate::channels::TEXT_MAILBOX;

/// Buffer size for one UART read
const RX_BUF_SIZE: usize = 64;

/// UART RX task - receives text lines from the host
#[embassy_executor::task]
pub async fn uart_rx_task(mut rx: UartRx<'static, Async>) {
    info!("UART RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read_until_idle(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    match assembler.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line received: {}", line.as_str());
                            if TEXT_MAILBOX.post(line) {
                                debug!("Unread line replaced by a newer one");
                            }
                        }
                        Ok(None) => {}
                        Err(LineError::Overflow) => {
                            warn!("Line longer than the text buffer, discarding");
                        }
                        Err(LineError::InvalidUtf8) => {
                            warn!("Line is not valid UTF-8, discarding");
                        }
                    }
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                assembler.reset();
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}
