/// Selects whether register reads carry a trailing CRC byte.
///
/// Writes are always checksummed, the LC709203F rejects frames without one.
pub trait CrcMode {}

/// Reads fetch the bare 16-bit word.
pub struct Disabled;
impl CrcMode for Disabled {}

/// Reads fetch the word plus the CRC byte and verify it.
pub struct Enabled;
impl CrcMode for Enabled {}

/// Calculates the CRC-8 checksum for the given data according to LC709203F specifications.
/// Polynomial: x^8 + x^2 + x + 1 (0x07)
/// Initial value: 0x00
/// No input reflection, no output xor.
pub fn calculate_crc(data: &[u8]) -> u8 {
    let mut crc: u8 = 0;
    for byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if (crc & 0x80) != 0 {
                crc = (crc << 1) ^ 0x07;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
