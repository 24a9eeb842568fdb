//! LCD1602 driver
//!
//! HD44780-compatible character LCD driven in 4-bit mode through a PCF8574
//! I2C port expander. Expander bit layout:
//!
//! ```text
//! P7 P6 P5 P4 | P3        P2  P1  P0
//! D7 D6 D5 D4 | BACKLIGHT EN  RW  RS
//! ```
//!
//! Every controller byte is sent as two nibbles, each latched by pulsing EN.
//! The driver never reads the busy flag (RW stays low); it waits the
//! datasheet execution times instead.

use embedded_hal::delay::DelayNs;
use marquee_display::{CharDisplay, DisplayError};
use marquee_hal::I2cBus;

/// Usual address of PCF8574 backpacks (0x3F for the PCF8574A variant)
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Expander control bits
mod bits {
    pub const RS: u8 = 0x01;
    #[allow(dead_code)]
    pub const RW: u8 = 0x02;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 instructions
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const EIGHT_BIT: u8 = 0x10;
    pub const TWO_LINES: u8 = 0x08;
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Character LCD over a PCF8574 backpack
pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    cols: u8,
    rows: u8,
    backlight: bool,
    initialized: bool,
}

impl<I2C: I2cBus, D: DelayNs> Lcd1602<I2C, D> {
    /// Create a 16x2 driver; call [`Lcd1602::init`] before use
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self::with_geometry(i2c, delay, address, 16, 2)
    }

    /// Create a driver for another HD44780 geometry (up to 40x4)
    pub fn with_geometry(i2c: I2C, delay: D, address: u8, cols: u8, rows: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            cols,
            rows: rows.min(ROW_OFFSETS.len() as u8),
            backlight: true,
            initialized: false,
        }
    }

    /// Run the 4-bit initialization sequence
    ///
    /// The controller may power up in 8-bit mode or halfway through a
    /// nibble, so it is forced to 8-bit three times before switching to
    /// 4-bit. Leaves the display on, cleared, with the cursor hidden.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;

        // Power-up: VDD must settle for >40 ms
        self.delay.delay_ms(50);
        self.expander_write(0)?;

        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)?;

        self.initialized = true;
        Ok(())
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.expander_write(0)
    }

    /// Whether the backlight is on
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Whether `init` completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, 0)
    }

    fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, bits::RS)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble(value & 0xF0, mode)?;
        self.write_nibble(value << 4, mode)
    }

    /// Put a nibble (in the high bits) on D4..D7 and pulse EN
    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), DisplayError> {
        let out = (nibble & 0xF0) | mode;
        self.expander_write(out | bits::EN)?;
        // EN pulse width >450 ns
        self.delay.delay_us(1);
        self.expander_write(out)?;
        // Command execution >37 us
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander_write(&mut self, value: u8) -> Result<(), DisplayError> {
        let backlight = if self.backlight { bits::BACKLIGHT } else { 0 };
        self.i2c
            .write(self.address, &[value | backlight])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2cBus, D: DelayNs> CharDisplay for Lcd1602<I2C, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::CLEAR)?;
        // Clear takes 1.52 ms
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(cmd::SET_DDRAM | (col + ROW_OFFSETS[row as usize]))
    }

    fn write_char(&mut self, glyph: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.data(glyph)
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<u8, 256>,
        address: Option<u8>,
        fail: bool,
    }

    impl I2cBus for &mut MockI2c {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.address = Some(address);
            self.writes.extend_from_slice(data).map_err(|_| ())
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn ready(bus: &mut MockI2c) -> Lcd1602<&mut MockI2c, NoopDelay> {
        let mut lcd = Lcd1602::new(bus, NoopDelay, DEFAULT_ADDRESS);
        lcd.init().unwrap();
        lcd
    }

    #[test]
    fn test_init_sequence() {
        let mut bus = MockI2c::default();
        let lcd = ready(&mut bus);
        assert!(lcd.is_initialized());
        drop(lcd);

        assert_eq!(bus.address, Some(DEFAULT_ADDRESS));
        // Backlight-only write, then three 8-bit wake-ups and the 4-bit switch
        assert_eq!(
            &bus.writes[..9],
            &[0x08, 0x3C, 0x38, 0x3C, 0x38, 0x3C, 0x38, 0x2C, 0x28]
        );
        // Function set 0x28 as two nibbles
        assert_eq!(&bus.writes[9..13], &[0x2C, 0x28, 0x8C, 0x88]);
        // Four instructions of four writes each follow the wake-up
        assert_eq!(bus.writes.len(), 9 + 4 * 4);
    }

    #[test]
    fn test_write_char_sends_data_nibbles() {
        let mut bus = MockI2c::default();
        let mut lcd = ready(&mut bus);
        let (i2c, _) = {
            lcd.write_char(b'A').unwrap();
            lcd.release()
        };
        let writes = &i2c.writes;
        // 'A' = 0x41 with RS and backlight
        assert_eq!(&writes[writes.len() - 4..], &[0x4D, 0x49, 0x1D, 0x19]);
    }

    #[test]
    fn test_set_cursor_second_row() {
        let mut bus = MockI2c::default();
        let mut lcd = ready(&mut bus);
        lcd.set_cursor(1, 3).unwrap();
        let (i2c, _) = lcd.release();
        let writes = &i2c.writes;
        // DDRAM address 0x80 | 0x43
        assert_eq!(&writes[writes.len() - 4..], &[0xCC, 0xC8, 0x3C, 0x38]);
    }

    #[test]
    fn test_set_cursor_out_of_range() {
        let mut bus = MockI2c::default();
        let mut lcd = ready(&mut bus);
        assert_eq!(lcd.set_cursor(2, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.set_cursor(0, 16), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_requires_init() {
        let mut bus = MockI2c::default();
        let mut lcd = Lcd1602::new(&mut bus, NoopDelay, DEFAULT_ADDRESS);
        assert_eq!(lcd.write_char(b'x'), Err(DisplayError::NotInitialized));
        assert_eq!(lcd.clear(), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut bus = MockI2c {
            fail: true,
            ..MockI2c::default()
        };
        let mut lcd = Lcd1602::new(&mut bus, NoopDelay, DEFAULT_ADDRESS);
        assert_eq!(lcd.init(), Err(DisplayError::Communication));
        assert!(!lcd.is_initialized());
    }

    #[test]
    fn test_backlight_off_clears_bit() {
        let mut bus = MockI2c::default();
        let mut lcd = ready(&mut bus);
        lcd.set_backlight(false).unwrap();
        lcd.write_char(b' ').unwrap();
        assert!(!lcd.backlight());
        let (i2c, _) = lcd.release();
        // ' ' = 0x20 with RS only
        let writes = &i2c.writes;
        assert_eq!(&writes[writes.len() - 5..], &[0x00, 0x25, 0x21, 0x05, 0x01]);
    }

    #[test]
    fn test_dimensions() {
        let mut bus = MockI2c::default();
        let lcd = Lcd1602::with_geometry(&mut bus, NoopDelay, DEFAULT_ADDRESS, 20, 4);
        assert_eq!(lcd.dimensions(), (20, 4));
    }
}
