/// Default 7-bit I2C address of the LC709203F.
pub const DEFAULT_ADDRESS: u8 = 0x0B;

/// Word written to `BeforeRsoc` and `InitialRsoc` to trigger the RSOC algorithm.
pub const RSOC_INIT_SENTINEL: u16 = 0xAA55;

/// LC709203F register map. Access is noted per register but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Before RSOC (W)
    BeforeRsoc = 0x04,
    /// Thermistor B constant (RW)
    ThermistorB = 0x06,
    /// Initial RSOC (W)
    InitialRsoc = 0x07,
    /// Cell Temperature, 0.1 K units (RW)
    CellTemperature = 0x08,
    /// Cell Voltage, mV (R)
    CellVoltage = 0x09,
    /// Current Direction (RW)
    CurrentDirection = 0x0A,
    /// Adjustment Pack Application (RW)
    Apa = 0x0B,
    /// Adjustment Pack Thermistor (RW)
    Apt = 0x0C,
    /// Relative State Of Charge, % (RW)
    Rsoc = 0x0D,
    /// Indicator To Empty, 0.1 % (R)
    Ite = 0x0F,
    /// IC Version (R)
    IcVersion = 0x11,
    /// Change Of The Parameter, battery profile select (RW)
    ChangeOfParameter = 0x12,
    /// Alarm Low RSOC (RW)
    AlarmLowRsoc = 0x13,
    /// Alarm Low Cell Voltage (RW)
    AlarmLowCellVoltage = 0x14,
    /// IC Power Mode (RW)
    PowerMode = 0x15,
    /// Status Bit, temperature source (RW)
    StatusBit = 0x16,
    /// Number Of The Parameter (R)
    NumberOfParameter = 0x1A,
}

// Status Bit values
pub const STATUS_BIT_I2C: u16 = 0x0000;
pub const STATUS_BIT_THERMISTOR: u16 = 0x0001;

// IC Power Mode values
pub const POWER_MODE_OPERATE: u16 = 0x0001;
pub const POWER_MODE_SLEEP: u16 = 0x0002;

// Current Direction values
pub const CURRENT_DIRECTION_AUTO: u16 = 0x0000;
pub const CURRENT_DIRECTION_CHARGE: u16 = 0x0001;
pub const CURRENT_DIRECTION_DISCHARGE: u16 = 0xFFFF;
