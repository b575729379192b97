#![no_std]

#[macro_use]
extern crate uom;

#[cfg(feature = "defmt")]
extern crate defmt;

#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c;

pub mod crc;
pub mod data_types;
pub mod errors;
pub mod frame;
pub mod registers;
pub mod units;

pub use crc::{calculate_crc, CrcMode, Disabled, Enabled};
pub use data_types::{
    AdjustmentPackApplication, CellProfile, CurrentDirection, GaugeConfig, PowerMode,
    TemperatureMode,
};
pub use errors::Error;
pub use frame::{decode_read_word, encode_write_frame};
pub use registers::{Register, DEFAULT_ADDRESS};

use crate::registers::RSOC_INIT_SENTINEL;
use crate::units::{ElectricPotential, ThermodynamicTemperature};
use uom::si::electric_potential::millivolt;
use uom::si::thermodynamic_temperature::kelvin;

/// LC709203F driver
pub struct Lc709203f<I2C, M: CrcMode>
where
    I2C: I2c,
{
    address: u8,
    i2c: I2C,
    _crc_mode: core::marker::PhantomData<M>,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "RegisterAccess",),
    async(feature = "async", keep_self)
)]
#[allow(async_fn_in_trait)]
/// Trait for abstracting 16-bit register access, with or without read CRC.
pub trait RegisterAccess<E>
where
    Self: Sized,
{
    /// Reads a 16-bit word from the specified register.
    async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>>;

    /// Writes a 16-bit word, followed by its CRC, to the specified register.
    async fn write_word(&mut self, reg: Register, value: u16) -> Result<(), Error<E>>;
}

impl<I2C, M> Lc709203f<I2C, M>
where
    I2C: I2c,
    M: CrcMode,
{
    /// The 7-bit I2C address this driver talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consumes the driver and returns the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709203f",),
    async(feature = "async", keep_self)
)]
impl<I2C, M, E> Lc709203f<I2C, M>
where
    I2C: I2c<Error = E>,
    M: CrcMode,
{
    /// Register writes are the same in both CRC modes.
    async fn write_frame(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        let data =
            frame::encode_write_frame(frame::bus_address_byte(self.address), reg as u8, value);
        #[cfg(feature = "defmt")]
        defmt::debug!("write {}: {:04x} (crc {:02x})", reg, value, data[3]);
        self.i2c
            .write(self.address, &data)
            .await
            .map_err(Error::I2c)
    }
}

impl<I2C> Lc709203f<I2C, Disabled>
where
    I2C: I2c,
{
    /// Creates a new instance of the LC709203F driver with unchecked reads.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C peripheral.
    /// * `address` - The I2C address of the LC709203F chip, usually [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            address,
            i2c,
            _crc_mode: core::marker::PhantomData,
        }
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709203f",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> RegisterAccess<E> for Lc709203f<I2C, Disabled>
where
    I2C: I2c<Error = E>,
{
    async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>> {
        let mut data = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg as u8], &mut data)
            .await
            .map_err(Error::I2c)?;
        let word = frame::decode_read_word(data[0], data[1]);
        #[cfg(feature = "defmt")]
        defmt::debug!("read {}: {:04x}", reg, word);
        Ok(word)
    }

    async fn write_word(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        self.write_frame(reg, value).await
    }
}

impl<I2C> Lc709203f<I2C, Enabled>
where
    I2C: I2c,
{
    /// Creates a new instance of the LC709203F driver that verifies the CRC
    /// byte appended to every register read.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C peripheral.
    /// * `address` - The I2C address of the LC709203F chip, usually [`DEFAULT_ADDRESS`].
    pub fn new_with_read_crc(i2c: I2C, address: u8) -> Self {
        Self {
            address,
            i2c,
            _crc_mode: core::marker::PhantomData,
        }
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709203f",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> RegisterAccess<E> for Lc709203f<I2C, Enabled>
where
    I2C: I2c<Error = E>,
{
    async fn read_word(&mut self, reg: Register) -> Result<u16, Error<E>> {
        let mut data = [0u8; 3]; // Low byte + high byte + CRC byte
        self.i2c
            .write_read(self.address, &[reg as u8], &mut data)
            .await
            .map_err(Error::I2c)?;

        let received_crc = data[2];
        let calculated_crc = frame::read_crc(
            frame::bus_address_byte(self.address),
            reg as u8,
            data[0],
            data[1],
        );

        if calculated_crc != received_crc {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "CRC validation failed. {} Received CRC: {:02x}, Calculated CRC: {:02x}",
                reg,
                received_crc,
                calculated_crc
            );
            return Err(Error::Crc);
        }

        let word = frame::decode_read_word(data[0], data[1]);
        #[cfg(feature = "defmt")]
        defmt::debug!("read {}: {:04x}", reg, word);
        Ok(word)
    }

    async fn write_word(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        self.write_frame(reg, value).await
    }
}

// Generic impl block for methods that use RegisterAccess
#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Lc709203f",),
    async(feature = "async", keep_self)
)]
impl<I2C, M, E> Lc709203f<I2C, M>
where
    I2C: I2c<Error = E>,
    M: CrcMode,
    Self: RegisterAccess<E>,
{
    /// Puts the gauge into operate mode with a 500 mAh APA and thermistor
    /// temperature sensing.
    ///
    /// All three writes are issued even if one fails; the first error is returned.
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        self.set_config(&GaugeConfig::default()).await
    }

    /// Applies `config`. Power mode, APA and temperature mode are always
    /// written, in that order; optional fields only when set.
    ///
    /// Every write is attempted; the first error is returned at the end.
    pub async fn set_config(&mut self, config: &GaugeConfig) -> Result<(), Error<E>> {
        let mut result = self.set_power_mode(config.power_mode).await;
        result = result.and(self.set_cell_capacity(config.capacity).await);
        result = result.and(self.set_temperature_mode(config.temperature_mode).await);

        if let Some(profile) = config.profile {
            result = result.and(self.set_cell_profile(profile).await);
        }
        if let Some(beta) = config.thermistor_b {
            result = result.and(self.set_thermistor_b(beta).await);
        }
        if let Some(percent) = config.alarm_rsoc {
            result = result.and(self.set_alarm_rsoc(percent).await);
        }
        if let Some(volts) = config.alarm_voltage {
            result = result.and(self.set_alarm_voltage(volts).await);
        }

        result
    }

    /// Reads the IC version word.
    pub async fn ic_version(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::IcVersion).await
    }

    /// Restarts the RSOC algorithm from the current cell voltage.
    pub async fn init_rsoc(&mut self) -> Result<(), Error<E>> {
        self.write_word(Register::InitialRsoc, RSOC_INIT_SENTINEL)
            .await
    }

    /// Restarts the RSOC algorithm from the voltage sampled before the last
    /// power-up.
    pub async fn before_rsoc(&mut self) -> Result<(), Error<E>> {
        self.write_word(Register::BeforeRsoc, RSOC_INIT_SENTINEL)
            .await
    }

    /// Cell voltage in millivolts.
    pub async fn cell_voltage_mv(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::CellVoltage).await
    }

    /// Cell voltage as an electric potential.
    pub async fn cell_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        let mv = self.cell_voltage_mv().await?;
        Ok(ElectricPotential::new::<millivolt>(mv as f32))
    }

    /// Remaining charge (ITE) in tenths of a percent, 0 to 1000.
    pub async fn cell_remaining_percent10(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::Ite).await
    }

    /// Relative state of charge in percent, 0 to 100.
    pub async fn cell_state_of_charge(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::Rsoc).await
    }

    /// Raw cell temperature word, in 0.1 K.
    pub async fn cell_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::CellTemperature).await
    }

    /// Cell temperature converted from the 0.1 K register word.
    pub async fn cell_temperature(&mut self) -> Result<ThermodynamicTemperature, Error<E>> {
        let raw = self.cell_temperature_raw().await?;
        Ok(ThermodynamicTemperature::new::<kelvin>(raw as f32 / 10.0))
    }

    /// Feeds the cell temperature to the gauge. Only used by the device in
    /// [`TemperatureMode::I2c`].
    pub async fn set_cell_temperature(
        &mut self,
        temperature: ThermodynamicTemperature,
    ) -> Result<(), Error<E>> {
        let raw = (temperature.get::<kelvin>() * 10.0 + 0.5) as u16;
        self.write_word(Register::CellTemperature, raw).await
    }

    /// Reads the temperature source from the Status Bit register.
    pub async fn temperature_mode(&mut self) -> Result<TemperatureMode, Error<E>> {
        let word = self.read_word(Register::StatusBit).await?;
        TemperatureMode::try_from(word).map_err(|_| Error::InvalidData)
    }

    /// Selects where the cell temperature comes from.
    pub async fn set_temperature_mode(&mut self, mode: TemperatureMode) -> Result<(), Error<E>> {
        self.write_word(Register::StatusBit, mode as u16).await
    }

    /// Reads the APA capacity profile.
    pub async fn cell_capacity(&mut self) -> Result<AdjustmentPackApplication, Error<E>> {
        let word = self.read_word(Register::Apa).await?;
        AdjustmentPackApplication::try_from(word).map_err(|_| Error::InvalidData)
    }

    /// Writes the APA capacity profile.
    pub async fn set_cell_capacity(
        &mut self,
        apa: AdjustmentPackApplication,
    ) -> Result<(), Error<E>> {
        self.write_word(Register::Apa, apa as u16).await
    }

    /// Reads the APT thermistor adjustment word.
    pub async fn adjustment_pack_thermistor(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::Apt).await
    }

    /// Writes the APT thermistor adjustment word.
    pub async fn set_adjustment_pack_thermistor(&mut self, apt: u16) -> Result<(), Error<E>> {
        self.write_word(Register::Apt, apt).await
    }

    /// Reads the RSOC alarm threshold in percent.
    pub async fn alarm_rsoc(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::AlarmLowRsoc).await
    }

    /// Sets the RSOC level (percent) that asserts the alarm pin. 0 disables it.
    pub async fn set_alarm_rsoc(&mut self, percent: u8) -> Result<(), Error<E>> {
        self.write_word(Register::AlarmLowRsoc, percent as u16).await
    }

    /// Reads the cell voltage alarm threshold in millivolts.
    pub async fn alarm_voltage_mv(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::AlarmLowCellVoltage).await
    }

    /// Sets the cell voltage (volts) that asserts the alarm pin. 0.0 disables it.
    ///
    /// The value is rounded to the nearest millivolt rather than truncated.
    /// Negative and NaN inputs write 0, anything above 65.535 V writes `0xFFFF`.
    pub async fn set_alarm_voltage(&mut self, volts: f32) -> Result<(), Error<E>> {
        // `as` saturates, and maps NaN to 0
        let mv = (volts * 1000.0 + 0.5) as u16;
        self.write_word(Register::AlarmLowCellVoltage, mv).await
    }

    /// Reads the IC power mode.
    pub async fn power_mode(&mut self) -> Result<PowerMode, Error<E>> {
        let word = self.read_word(Register::PowerMode).await?;
        PowerMode::try_from(word).map_err(|_| Error::InvalidData)
    }

    /// Switches between operate and sleep mode.
    pub async fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<E>> {
        self.write_word(Register::PowerMode, mode as u16).await
    }

    /// Reads the selected battery profile.
    pub async fn cell_profile(&mut self) -> Result<CellProfile, Error<E>> {
        let word = self.read_word(Register::ChangeOfParameter).await?;
        CellProfile::try_from(word).map_err(|_| Error::InvalidData)
    }

    /// Selects the battery profile.
    pub async fn set_cell_profile(&mut self, profile: CellProfile) -> Result<(), Error<E>> {
        self.write_word(Register::ChangeOfParameter, profile as u16)
            .await
    }

    /// Battery profile table identifier.
    pub async fn number_of_parameter(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::NumberOfParameter).await
    }

    /// Reads the current direction setting.
    pub async fn current_direction(&mut self) -> Result<CurrentDirection, Error<E>> {
        let word = self.read_word(Register::CurrentDirection).await?;
        CurrentDirection::try_from(word).map_err(|_| Error::InvalidData)
    }

    /// Forces the current direction or returns it to automatic detection.
    pub async fn set_current_direction(
        &mut self,
        direction: CurrentDirection,
    ) -> Result<(), Error<E>> {
        self.write_word(Register::CurrentDirection, direction as u16)
            .await
    }

    /// Reads the thermistor B constant.
    pub async fn thermistor_b(&mut self) -> Result<u16, Error<E>> {
        self.read_word(Register::ThermistorB).await
    }

    /// Writes the thermistor B constant.
    pub async fn set_thermistor_b(&mut self, beta: u16) -> Result<(), Error<E>> {
        self.write_word(Register::ThermistorB, beta).await
    }
}
