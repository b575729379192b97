use crate::registers::*;

/// Source of the cell temperature reading (Status Bit register).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum TemperatureMode {
    /// Host writes the temperature over I2C.
    I2c = STATUS_BIT_I2C,
    /// Measured through the external thermistor.
    Thermistor = STATUS_BIT_THERMISTOR,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum PowerMode {
    Operate = POWER_MODE_OPERATE,
    Sleep = POWER_MODE_SLEEP,
}

/// Approximate pack capacity, written to the APA register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum AdjustmentPackApplication {
    Capacity100mAh = 0x08,
    Capacity200mAh = 0x0B,
    Capacity500mAh = 0x10,
    Capacity1000mAh = 0x19,
    Capacity2000mAh = 0x2D,
    Capacity3000mAh = 0x36,
}

/// Row of the battery profile table reported by `NumberOfParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum CellProfile {
    Profile0 = 0x0000,
    Profile1 = 0x0001,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum CurrentDirection {
    Auto = CURRENT_DIRECTION_AUTO,
    Charge = CURRENT_DIRECTION_CHARGE,
    Discharge = CURRENT_DIRECTION_DISCHARGE,
}

impl TryFrom<u16> for TemperatureMode {
    type Error = u16;

    fn try_from(word: u16) -> Result<Self, Self::Error> {
        match word {
            STATUS_BIT_I2C => Ok(Self::I2c),
            STATUS_BIT_THERMISTOR => Ok(Self::Thermistor),
            other => Err(other),
        }
    }
}

impl TryFrom<u16> for PowerMode {
    type Error = u16;

    fn try_from(word: u16) -> Result<Self, Self::Error> {
        match word {
            POWER_MODE_OPERATE => Ok(Self::Operate),
            POWER_MODE_SLEEP => Ok(Self::Sleep),
            other => Err(other),
        }
    }
}

impl TryFrom<u16> for AdjustmentPackApplication {
    type Error = u16;

    fn try_from(word: u16) -> Result<Self, Self::Error> {
        match word {
            0x08 => Ok(Self::Capacity100mAh),
            0x0B => Ok(Self::Capacity200mAh),
            0x10 => Ok(Self::Capacity500mAh),
            0x19 => Ok(Self::Capacity1000mAh),
            0x2D => Ok(Self::Capacity2000mAh),
            0x36 => Ok(Self::Capacity3000mAh),
            other => Err(other),
        }
    }
}

impl TryFrom<u16> for CellProfile {
    type Error = u16;

    fn try_from(word: u16) -> Result<Self, Self::Error> {
        match word {
            0x0000 => Ok(Self::Profile0),
            0x0001 => Ok(Self::Profile1),
            other => Err(other),
        }
    }
}

impl TryFrom<u16> for CurrentDirection {
    type Error = u16;

    fn try_from(word: u16) -> Result<Self, Self::Error> {
        match word {
            CURRENT_DIRECTION_AUTO => Ok(Self::Auto),
            CURRENT_DIRECTION_CHARGE => Ok(Self::Charge),
            CURRENT_DIRECTION_DISCHARGE => Ok(Self::Discharge),
            other => Err(other),
        }
    }
}

/// Operating parameters applied by `Lc709203f::set_config`.
///
/// The `Default` matches what `init` writes; optional fields are left
/// untouched on the device when `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeConfig {
    pub power_mode: PowerMode,
    pub capacity: AdjustmentPackApplication,
    pub temperature_mode: TemperatureMode,
    pub profile: Option<CellProfile>,
    pub thermistor_b: Option<u16>,
    /// Percent, 0 disables the alarm.
    pub alarm_rsoc: Option<u8>,
    /// Volts, 0.0 disables the alarm.
    pub alarm_voltage: Option<f32>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            power_mode: PowerMode::Operate,
            capacity: AdjustmentPackApplication::Capacity500mAh,
            temperature_mode: TemperatureMode::Thermistor,
            profile: None,
            thermistor_b: None,
            alarm_rsoc: None,
            alarm_voltage: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_words_round_trip() {
        for mode in [PowerMode::Operate, PowerMode::Sleep] {
            assert_eq!(PowerMode::try_from(mode as u16), Ok(mode));
        }
        for apa in [
            AdjustmentPackApplication::Capacity100mAh,
            AdjustmentPackApplication::Capacity3000mAh,
        ] {
            assert_eq!(AdjustmentPackApplication::try_from(apa as u16), Ok(apa));
        }
        assert_eq!(
            CurrentDirection::try_from(0xFFFF),
            Ok(CurrentDirection::Discharge)
        );
    }

    #[test]
    fn test_unknown_words_rejected() {
        assert_eq!(PowerMode::try_from(0x0000), Err(0x0000));
        assert_eq!(TemperatureMode::try_from(0x0002), Err(0x0002));
        assert_eq!(AdjustmentPackApplication::try_from(0x0011), Err(0x0011));
        assert_eq!(CellProfile::try_from(0x0004), Err(0x0004));
    }
}
