//! Embassy tasks

mod display;
mod uart_rx;

pub use display::{display_task, DisplayTaskConfig};
pub use uart_rx::uart_rx_task;
