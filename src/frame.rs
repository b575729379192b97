//! Wire framing for 16-bit register words.
//!
//! Words travel low byte first. A write carries a CRC-8 computed over the
//! bus address byte, the register address and both data bytes, even though
//! the bus address byte itself is sent by the I2C addressing phase and not
//! as data.

use crate::crc::calculate_crc;

/// Bus address byte in write direction, as it enters the CRC.
pub const fn bus_address_byte(address: u8) -> u8 {
    address << 1
}

/// Builds the bytes sent after the address phase of a register write:
/// `[register, low, high, crc]`.
pub fn encode_write_frame(bus_address_byte: u8, register: u8, word: u16) -> [u8; 4] {
    let [low, high] = word.to_le_bytes();
    let mut crc_frame = [bus_address_byte, register, low, high, 0];
    crc_frame[4] = calculate_crc(&crc_frame[..4]);
    [register, low, high, crc_frame[4]]
}

/// Combines a received word, low byte first.
pub fn decode_read_word(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | (low as u16)
}

/// CRC the device appends to a register read.
///
/// Covers the write address byte, the register, the read address byte and
/// both data bytes.
pub fn read_crc(bus_address_byte: u8, register: u8, low: u8, high: u8) -> u8 {
    calculate_crc(&[bus_address_byte, register, bus_address_byte | 1, low, high])
}
