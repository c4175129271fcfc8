//! Driver for the MAX7219/MAX7221 serially interfaced 8-digit LED display
//! driver, usable both as an 8x8 LED matrix and as up to eight 7-segment
//! digits.
//!
//! The chip is write-only, so the driver keeps a local mirror of the eight
//! digit registers and of the configuration registers; all getters answer
//! from the mirror without touching the bus.

#![no_std]

mod constants;
pub mod interface;

pub use constants::*;
pub use interface::{RegisterInterface, SpiInterface};

use embedded_hal::spi::SpiDevice;
use num_traits::ToPrimitive;

// digit register from 0-based row index (digits are 1-based on the wire)
fn digit_register(row: u8) -> u8 {
    register::DIGIT_OFFSET + row
}

// font code lookup, linear scan over the 16 valid characters
fn font_code(character: char) -> Option<u8> {
    FONT_CHARS
        .iter()
        .position(|&c| c == character)
        .map(|i| i as u8)
}

/// Driver for one MAX72XX chip.
///
/// Owns the display mirror and the configured register values. Nothing is
/// written to the device until [`init`](Max72xx::init) runs.
pub struct Max72xx<I> {
    interface: I,
    matrix: [u8; MATRIX_DIM as usize],
    decode_mode: u8,
    intensity: u8,
    scan_limit: u8,
    shutdown: bool,
    test_mode: bool,
}

impl<SPI> Max72xx<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Create a driver over an SPI device (mode 0, 10 MHz maximum).
    pub fn new(spi: SPI) -> Self {
        Self::with_interface(SpiInterface::new(spi))
    }
}

impl<I> Max72xx<I>
where
    I: RegisterInterface,
{
    /// Create a driver over any register write transport.
    pub fn with_interface(interface: I) -> Self {
        Self {
            interface,
            matrix: [0; MATRIX_DIM as usize],
            decode_mode: register::decode_mode::NO_DECODE,
            intensity: 0xFF,
            scan_limit: MATRIX_DIM - 1,
            shutdown: false,
            test_mode: false,
        }
    }

    pub fn destroy(self) -> I {
        self.interface
    }

    /// Set the decode mode applied by [`init`](Max72xx::init).
    pub fn with_decode_mode(mut self, decode_mode: u8) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    /// Set the intensity applied by [`init`](Max72xx::init).
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the scan limit applied by [`init`](Max72xx::init).
    pub fn with_scan_limit(mut self, scan_limit: u8) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    /// Set the shutdown state applied by [`init`](Max72xx::init).
    pub fn with_shutdown(mut self, shutdown: bool) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Set the display test state applied by [`init`](Max72xx::init).
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Bring the device to a known state: blank all eight digit registers,
    /// then write decode mode, intensity, scan limit, shutdown and display
    /// test from the configured values.
    ///
    /// Must run before any other operation is meaningful. Running it again
    /// repeats the exact same register writes.
    pub fn init(&mut self) -> Result<(), Max72xxError<I::Error>> {
        self.matrix = [0; MATRIX_DIM as usize];
        self.write_matrix()?;

        self.interface
            .write_register(register::DECODE_MODE, self.decode_mode)?;
        self.interface
            .write_register(register::INTENSITY, self.intensity)?;
        self.interface
            .write_register(register::SCAN_LIMIT, self.scan_limit)?;
        self.interface
            .write_register(register::SHUTDOWN, shutdown_data(self.shutdown))?;
        self.interface
            .write_register(register::DISPLAY_TEST, test_mode_data(self.test_mode))?;

        Ok(())
    }

    /// Blank the whole display.
    pub fn clear(&mut self) -> Result<(), Max72xxError<I::Error>> {
        self.set_matrix(&[0; MATRIX_DIM as usize])
    }

    /// Replace the whole display, one byte per row, bit `k` of each byte
    /// driving column `k`.
    pub fn set_matrix(
        &mut self,
        data: &[u8; MATRIX_DIM as usize],
    ) -> Result<(), Max72xxError<I::Error>> {
        self.matrix = *data;
        self.write_matrix()
    }

    /// Set one row, or return `InvalidLocation` for `row >= 8`.
    pub fn try_set_row(&mut self, row: u8, value: u8) -> Result<(), Max72xxError<I::Error>> {
        if row >= MATRIX_DIM {
            return Err(Max72xxError::InvalidLocation(row));
        }
        self.write_digit_data(row, value)
    }

    /// Set one row; out-of-range rows are silently ignored.
    pub fn set_row(&mut self, row: u8, value: u8) -> Result<(), Max72xxError<I::Error>> {
        match self.try_set_row(row, value) {
            Err(Max72xxError::InvalidLocation(_)) => Ok(()),
            result => result,
        }
    }

    /// Set one column from `value`, bit `r` of which drives row `r`, or
    /// return `InvalidLocation` for `col >= 8`.
    ///
    /// The chip has no column register, so this rewrites all eight digit
    /// registers.
    pub fn try_set_column(&mut self, col: u8, value: u8) -> Result<(), Max72xxError<I::Error>> {
        if col >= MATRIX_DIM {
            return Err(Max72xxError::InvalidLocation(col));
        }
        for row in 0..MATRIX_DIM {
            if value & (1 << row) != 0 {
                self.matrix[row as usize] |= 1 << col;
            } else {
                self.matrix[row as usize] &= !(1 << col);
            }
        }
        self.write_matrix()
    }

    /// Set one column; out-of-range columns are silently ignored.
    pub fn set_column(&mut self, col: u8, value: u8) -> Result<(), Max72xxError<I::Error>> {
        match self.try_set_column(col, value) {
            Err(Max72xxError::InvalidLocation(_)) => Ok(()),
            result => result,
        }
    }

    /// Set one LED, or return `InvalidLocation` if either coordinate is
    /// out of range. Only the affected row is rewritten.
    pub fn try_set_pixel(
        &mut self,
        row: u8,
        col: u8,
        on: bool,
    ) -> Result<(), Max72xxError<I::Error>> {
        if row >= MATRIX_DIM {
            return Err(Max72xxError::InvalidLocation(row));
        }
        if col >= MATRIX_DIM {
            return Err(Max72xxError::InvalidLocation(col));
        }
        let value = if on {
            self.matrix[row as usize] | 1 << col
        } else {
            self.matrix[row as usize] & !(1 << col)
        };
        self.write_digit_data(row, value)
    }

    /// Set one LED; out-of-range coordinates are silently ignored.
    pub fn set_pixel(&mut self, row: u8, col: u8, on: bool) -> Result<(), Max72xxError<I::Error>> {
        match self.try_set_pixel(row, col, on) {
            Err(Max72xxError::InvalidLocation(_)) => Ok(()),
            result => result,
        }
    }

    /// Display a Code B font character on one digit, or return
    /// `InvalidLocation` / `UnknownCharacter`.
    ///
    /// Valid characters are `0`-`9`, `-`, `E`, `H`, `L`, `P` and space;
    /// the digit must have Code B decode enabled for the character to
    /// render (see [`set_decode_mode`](Max72xx::set_decode_mode)).
    pub fn try_set_character(
        &mut self,
        digit: u8,
        character: char,
        decimal_point: bool,
    ) -> Result<(), Max72xxError<I::Error>> {
        if digit >= MATRIX_DIM {
            return Err(Max72xxError::InvalidLocation(digit));
        }
        let code = font_code(character).ok_or(Max72xxError::UnknownCharacter(character))?;
        let data = if decimal_point {
            code | DECIMAL_POINT
        } else {
            code
        };
        self.write_digit_data(digit, data)
    }

    /// Display a Code B font character on one digit; out-of-range digits
    /// and characters outside the font are silently ignored.
    pub fn set_character(
        &mut self,
        digit: u8,
        character: char,
        decimal_point: bool,
    ) -> Result<(), Max72xxError<I::Error>> {
        match self.try_set_character(digit, character, decimal_point) {
            Err(Max72xxError::InvalidLocation(_)) | Err(Max72xxError::UnknownCharacter(_)) => {
                Ok(())
            }
            result => result,
        }
    }

    /// Display a decimal number right-aligned across all eight digits,
    /// zero-padded on the left. Requires Code B decode on all digits.
    ///
    /// Returns `InvalidValue` for negative values and for values that do
    /// not fit in eight digits.
    pub fn display_number<T>(&mut self, number: T) -> Result<(), Max72xxError<I::Error>>
    where
        T: ToPrimitive,
    {
        let mut num = number.to_u32().ok_or(Max72xxError::InvalidValue)?;
        if num >= 100_000_000 {
            // more than 8 digits
            return Err(Max72xxError::InvalidValue);
        }
        for i in 0..MATRIX_DIM {
            let code = (num % 10) as u8;
            self.write_digit_data(MATRIX_DIM - 1 - i, code)?;
            num /= 10;
        }
        Ok(())
    }

    /// Current contents of all eight rows, from the mirror.
    pub fn matrix(&self) -> [u8; MATRIX_DIM as usize] {
        self.matrix
    }

    /// Current contents of one row; 0 for out-of-range rows.
    pub fn row(&self, row: u8) -> u8 {
        if row >= MATRIX_DIM {
            return 0;
        }
        self.matrix[row as usize]
    }

    /// Current contents of one column, reassembled bit by bit from the
    /// rows; 0 for out-of-range columns.
    pub fn column(&self, col: u8) -> u8 {
        if col >= MATRIX_DIM {
            return 0;
        }
        let mut value = 0;
        for row in 0..MATRIX_DIM {
            if self.matrix[row as usize] & (1 << col) != 0 {
                value |= 1 << row;
            }
        }
        value
    }

    /// Current state of one LED; `false` for out-of-range coordinates.
    pub fn pixel(&self, row: u8, col: u8) -> bool {
        if row >= MATRIX_DIM || col >= MATRIX_DIM {
            return false;
        }
        self.matrix[row as usize] & (1 << col) != 0
    }

    pub fn set_decode_mode(&mut self, decode_mode: u8) -> Result<(), Max72xxError<I::Error>> {
        self.interface
            .write_register(register::DECODE_MODE, decode_mode)?;
        self.decode_mode = decode_mode;
        Ok(())
    }

    pub fn decode_mode(&self) -> u8 {
        self.decode_mode
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max72xxError<I::Error>> {
        self.interface
            .write_register(register::INTENSITY, intensity)?;
        self.intensity = intensity;
        Ok(())
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn set_scan_limit(&mut self, scan_limit: u8) -> Result<(), Max72xxError<I::Error>> {
        self.interface
            .write_register(register::SCAN_LIMIT, scan_limit)?;
        self.scan_limit = scan_limit;
        Ok(())
    }

    pub fn scan_limit(&self) -> u8 {
        self.scan_limit
    }

    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max72xxError<I::Error>> {
        self.interface
            .write_register(register::SHUTDOWN, shutdown_data(shutdown))?;
        self.shutdown = shutdown;
        Ok(())
    }

    pub fn shutdown(&self) -> bool {
        self.shutdown
    }

    pub fn set_test_mode(&mut self, test_mode: bool) -> Result<(), Max72xxError<I::Error>> {
        self.interface
            .write_register(register::DISPLAY_TEST, test_mode_data(test_mode))?;
        self.test_mode = test_mode;
        Ok(())
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    // store in the mirror, then transmit; the mirror always holds the last
    // byte sent to each digit register
    fn write_digit_data(&mut self, digit: u8, data: u8) -> Result<(), Max72xxError<I::Error>> {
        self.matrix[digit as usize] = data;
        self.interface.write_register(digit_register(digit), data)?;
        Ok(())
    }

    fn write_matrix(&mut self) -> Result<(), Max72xxError<I::Error>> {
        for row in 0..MATRIX_DIM {
            self.interface
                .write_register(digit_register(row), self.matrix[row as usize])?;
        }
        Ok(())
    }
}

fn shutdown_data(shutdown: bool) -> u8 {
    if shutdown {
        register::shutdown_mode::SHUTDOWN
    } else {
        register::shutdown_mode::NORMAL_OPERATION
    }
}

fn test_mode_data(test_mode: bool) -> u8 {
    if test_mode {
        register::display_test_mode::DISPLAY_TEST
    } else {
        register::display_test_mode::NORMAL_OPERATION
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Max72xxError<E> {
    /// Transport failure reported by the underlying bus.
    Bus(E),
    /// Row, column or digit index outside 0-7.
    InvalidLocation(u8),
    /// Value cannot be rendered on the available digits.
    InvalidValue,
    /// Character outside the chip's fixed Code B font.
    UnknownCharacter(char),
}

impl<E> From<E> for Max72xxError<E> {
    fn from(error: E) -> Self {
        Max72xxError::Bus(error)
    }
}
