//! I2C target support for STM32F0
//!
//! The firmware drives embassy's I2C peripheral in multimaster (target)
//! mode directly; this module maps the chip-agnostic configuration onto it
//! and flattens its errors.

use embassy_stm32::i2c::{Address, Error as I2cError, OwnAddresses, SlaveAddrConfig};
use octonix_hal::I2cTargetConfig;

/// Own-address setup for `I2c::into_slave_multimaster`
pub fn slave_addr_config(config: &I2cTargetConfig) -> SlaveAddrConfig {
    SlaveAddrConfig {
        addr: OwnAddresses::OA1(Address::SevenBit(config.address.get())),
        general_call: config.general_call,
    }
}

/// Error from target-mode transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cTargetError {
    /// Bus error (misplaced start or stop)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Master did not acknowledge a byte we sent
    Nack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cTargetError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cTargetError::Bus,
            I2cError::Arbitration => I2cTargetError::ArbitrationLost,
            I2cError::Nack => I2cTargetError::Nack,
            I2cError::Timeout => I2cTargetError::Timeout,
            I2cError::Overrun => I2cTargetError::Overrun,
            _ => I2cTargetError::Other,
        }
    }
}
