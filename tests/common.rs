#![allow(dead_code)]

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use lc709203f_rs::{Disabled, Enabled, Lc709203f, Register};

pub const LC709203F_ADDR: u8 = 0x0B;
/// Write-direction address byte that enters every CRC for `LC709203F_ADDR`.
pub const LC709203F_WRITE_BYTE: u8 = 0x16;

/// Helper function to create an unchecked-read driver over a mock bus.
/// The returned mock shares state with the one inside the driver.
pub fn create_driver(transactions: &[I2cTransaction]) -> (Lc709203f<I2cMock, Disabled>, I2cMock) {
    let i2c = I2cMock::new(transactions);
    let driver = Lc709203f::new(i2c.clone(), LC709203F_ADDR);
    (driver, i2c)
}

/// Helper function to create a driver that verifies read CRCs.
pub fn create_checked_driver(
    transactions: &[I2cTransaction],
) -> (Lc709203f<I2cMock, Enabled>, I2cMock) {
    let i2c = I2cMock::new(transactions);
    let driver = Lc709203f::new_with_read_crc(i2c.clone(), LC709203F_ADDR);
    (driver, i2c)
}

/// Expected register read returning `word`, without CRC.
pub fn read_tx(reg: Register, word: u16) -> I2cTransaction {
    let [low, high] = word.to_le_bytes();
    I2cTransaction::write_read(LC709203F_ADDR, vec![reg as u8], vec![low, high])
}

/// Expected register write, with `crc` given explicitly.
pub fn write_tx(reg: Register, low: u8, high: u8, crc: u8) -> I2cTransaction {
    I2cTransaction::write(LC709203F_ADDR, vec![reg as u8, low, high, crc])
}
