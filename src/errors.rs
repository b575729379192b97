#[cfg(feature = "defmt")]
use defmt::Format;

/// Represents potential errors when interacting with the LC709203F chip.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error<E> {
    /// An error occurred during I2C communication.
    I2c(E),
    /// A register word did not decode to a known value.
    InvalidData,
    /// CRC validation of a register read failed.
    Crc,
}
