//! I2C target (slave) configuration
//!
//! The display is only ever addressed by a bus master; it never drives
//! transactions itself.

/// Lowest 7-bit address outside the reserved block
pub const MIN_ADDRESS: u8 = 0x08;
/// Highest 7-bit address outside the reserved block
pub const MAX_ADDRESS: u8 = 0x77;

/// Byte returned to a master that reads from the target
pub const READ_FILLER: u8 = 0x00;

/// A 7-bit address a target may answer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetAddress(u8);

impl TargetAddress {
    /// Validate a 7-bit address
    ///
    /// Addresses 0x00-0x07 and 0x78-0x7F are reserved by the I2C
    /// specification.
    pub const fn new(address: u8) -> Result<Self, AddressError> {
        if address > 0x7F {
            Err(AddressError::NotSevenBit(address))
        } else if address < MIN_ADDRESS || address > MAX_ADDRESS {
            Err(AddressError::Reserved(address))
        } else {
            Ok(Self(address))
        }
    }

    /// Raw 7-bit address
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Address rejected by [`TargetAddress::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Value does not fit in 7 bits
    NotSevenBit(u8),
    /// Value is in a reserved range
    Reserved(u8),
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::NotSevenBit(a) => write!(f, "0x{:02X} is not a 7-bit address", a),
            AddressError::Reserved(a) => write!(
                f,
                "0x{:02X} is reserved (use 0x{:02X}-0x{:02X})",
                a, MIN_ADDRESS, MAX_ADDRESS
            ),
        }
    }
}

/// Passive target configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cTargetConfig {
    /// Own address
    pub address: TargetAddress,
    /// Also answer the general call address (0x00)
    pub general_call: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_ranges() {
        assert_eq!(TargetAddress::new(0x2A).map(TargetAddress::get), Ok(0x2A));
        assert!(TargetAddress::new(MIN_ADDRESS).is_ok());
        assert!(TargetAddress::new(MAX_ADDRESS).is_ok());
        assert_eq!(TargetAddress::new(0x07), Err(AddressError::Reserved(0x07)));
        assert_eq!(TargetAddress::new(0x78), Err(AddressError::Reserved(0x78)));
        assert_eq!(TargetAddress::new(0x80), Err(AddressError::NotSevenBit(0x80)));
    }
}
