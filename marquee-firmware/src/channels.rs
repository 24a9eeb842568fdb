//! Inter-task communication
//!
//! Static hand-off between the UART receive task and the display loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use marquee_core::text::LineMailbox;

/// Newest complete line received over UART
pub static TEXT_MAILBOX: LineMailbox<CriticalSectionRawMutex> = LineMailbox::new();
