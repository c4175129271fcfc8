//! Register write transport to the display driver chip.
//!
//! The MAX72XX is write-only: the host shifts a 16-bit frame (register
//! address, then data, MSB first) while LOAD/CS is held low, and the chip
//! latches it on the rising edge of LOAD/CS. There is no way to read a
//! register back, which is why the driver keeps a local mirror of the
//! digit registers.

use embedded_hal::spi::SpiDevice;

/// A transport able to perform one register write.
///
/// Implemented by [`SpiInterface`] for real hardware; the driver is generic
/// over this trait so tests can substitute their own transport.
pub trait RegisterInterface {
    type Error;

    /// Write one `[address, data]` frame to the device.
    fn write_register(&mut self, address: u8, data: u8) -> Result<(), Self::Error>;
}

/// [`RegisterInterface`] over an embedded-hal [`SpiDevice`].
///
/// Each register write is issued as a single two-byte SPI transaction, so
/// the device's chip-select line frames exactly one 16-bit packet per
/// write. The `SpiDevice` must be configured for SPI mode 0 at no more
/// than 10 MHz (the chip's maximum serial clock).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give the SPI device back, consuming the interface.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> RegisterInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, address: u8, data: u8) -> Result<(), Self::Error> {
        self.spi.write(&[address, data])
    }
}
