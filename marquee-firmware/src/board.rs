//! NUCLEO-F429ZI wiring
//!
//! | Function       | Peripheral | Pins                   |
//! |----------------|------------|------------------------|
//! | Text in/echo   | USART3     | PD8 (TX), PD9 (RX)     |
//! | LCD backpack   | I2C1       | PB8 (SCL), PB9 (SDA)   |
//! | User button    | GPIO       | PC13, active high      |
//! | Heartbeat LED  | GPIO       | PB7 (LD2, blue)        |

use embassy_stm32::mode::{Async, Blocking};
use embassy_time::Delay;

use marquee_core::DisplayEngine;
use marquee_drivers::{Button, Heartbeat, Lcd1602};
use marquee_hal_stm32f4::{Stm32I2c, Stm32Input, Stm32Output, Stm32UartTx};

/// LCD on the blocking I2C1 bus
pub type Lcd = Lcd1602<Stm32I2c<'static, Blocking>, Delay>;

/// Engine driving the LCD
pub type Engine = DisplayEngine<Lcd>;

/// User button
pub type UserButton = Button<Stm32Input<'static>>;

/// Heartbeat LED
pub type Led = Heartbeat<Stm32Output<'static>>;

/// USART3 transmitter
pub type SerialTx = Stm32UartTx<'static, Async>;
