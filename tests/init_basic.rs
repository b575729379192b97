#![cfg(not(feature = "async"))]

#[path = "common.rs"]
mod common;

use common::{create_driver, write_tx, LC709203F_WRITE_BYTE};
use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use lc709203f_rs::{
    calculate_crc, encode_write_frame, AdjustmentPackApplication, CellProfile, Error,
    GaugeConfig, PowerMode, Register, TemperatureMode,
};

fn expect_init_sequence() -> [embedded_hal_mock::eh1::i2c::Transaction; 3] {
    [
        // Power mode = operate
        write_tx(Register::PowerMode, 0x01, 0x00, 0x64),
        // APA = 500 mAh
        write_tx(Register::Apa, 0x10, 0x00, 0xA8),
        // Status bit = thermistor
        write_tx(Register::StatusBit, 0x01, 0x00, 0xD9),
    ]
}

#[test]
fn test_init_writes_three_registers_in_order() {
    let expectations = expect_init_sequence();
    let (mut driver, mut i2c) = create_driver(&expectations);
    assert_eq!(driver.init(), Ok(()));
    i2c.done();
}

#[test]
fn test_init_checksums_cover_bus_address_byte() {
    for (reg, word) in [
        (Register::PowerMode, PowerMode::Operate as u16),
        (Register::Apa, AdjustmentPackApplication::Capacity500mAh as u16),
        (Register::StatusBit, TemperatureMode::Thermistor as u16),
    ] {
        let [low, high] = word.to_le_bytes();
        let frame = encode_write_frame(LC709203F_WRITE_BYTE, reg as u8, word);
        assert_eq!(
            frame[3],
            calculate_crc(&[LC709203F_WRITE_BYTE, reg as u8, low, high])
        );
    }
}

#[test]
fn test_init_issues_all_writes_after_failure() {
    let expectations = [
        write_tx(Register::PowerMode, 0x01, 0x00, 0x64).with_error(ErrorKind::Bus),
        write_tx(Register::Apa, 0x10, 0x00, 0xA8),
        write_tx(Register::StatusBit, 0x01, 0x00, 0xD9),
    ];
    let (mut driver, mut i2c) = create_driver(&expectations);
    assert_eq!(driver.init(), Err(Error::I2c(ErrorKind::Bus)));
    i2c.done();
}

#[test]
fn test_init_reports_first_of_several_failures() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
    let expectations = [
        write_tx(Register::PowerMode, 0x01, 0x00, 0x64),
        write_tx(Register::Apa, 0x10, 0x00, 0xA8).with_error(nack),
        write_tx(Register::StatusBit, 0x01, 0x00, 0xD9).with_error(ErrorKind::Bus),
    ];
    let (mut driver, mut i2c) = create_driver(&expectations);
    assert_eq!(driver.init(), Err(Error::I2c(nack)));
    i2c.done();
}

#[test]
fn test_default_config_matches_init() {
    let config = GaugeConfig::default();
    assert_eq!(config.power_mode, PowerMode::Operate);
    assert_eq!(config.capacity, AdjustmentPackApplication::Capacity500mAh);
    assert_eq!(config.temperature_mode, TemperatureMode::Thermistor);
    assert_eq!(config.profile, None);
    assert_eq!(config.thermistor_b, None);
    assert_eq!(config.alarm_rsoc, None);
    assert_eq!(config.alarm_voltage, None);
}

#[test]
fn test_set_config_full() {
    let config = GaugeConfig {
        power_mode: PowerMode::Operate,
        capacity: AdjustmentPackApplication::Capacity1000mAh,
        temperature_mode: TemperatureMode::I2c,
        profile: Some(CellProfile::Profile1),
        thermistor_b: Some(3435),
        alarm_rsoc: Some(10),
        alarm_voltage: Some(3.7),
    };
    let expectations = [
        write_tx(Register::PowerMode, 0x01, 0x00, 0x64),
        write_tx(Register::Apa, 0x19, 0x00, 0x15),
        write_tx(Register::StatusBit, 0x00, 0x00, 0xCC),
        write_tx(Register::ChangeOfParameter, 0x01, 0x00, 0x72),
        write_tx(Register::ThermistorB, 0x6B, 0x0D, 0x2F),
        write_tx(Register::AlarmLowRsoc, 0x0A, 0x00, 0x8E),
        write_tx(Register::AlarmLowCellVoltage, 0x74, 0x0E, 0xC6),
    ];
    let (mut driver, mut i2c) = create_driver(&expectations);
    assert_eq!(driver.set_config(&config), Ok(()));
    i2c.done();
}

#[test]
fn test_set_config_continues_after_failed_write() {
    let config = GaugeConfig {
        thermistor_b: Some(3435),
        alarm_rsoc: Some(10),
        ..GaugeConfig::default()
    };
    let expectations = [
        write_tx(Register::PowerMode, 0x01, 0x00, 0x64),
        write_tx(Register::Apa, 0x10, 0x00, 0xA8),
        write_tx(Register::StatusBit, 0x01, 0x00, 0xD9),
        write_tx(Register::ThermistorB, 0x6B, 0x0D, 0x2F).with_error(ErrorKind::Bus),
        write_tx(Register::AlarmLowRsoc, 0x0A, 0x00, 0x8E),
    ];
    let (mut driver, mut i2c) = create_driver(&expectations);
    assert_eq!(driver.set_config(&config), Err(Error::I2c(ErrorKind::Bus)));
    i2c.done();
}
