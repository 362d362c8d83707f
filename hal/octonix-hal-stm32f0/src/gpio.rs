//! GPIO adapters for STM32F0

use embassy_stm32::gpio::Output;
use octonix_hal::OutputPin;

/// Push-pull output usable by the chip-agnostic drivers
pub struct PinOutput<'d>(Output<'d>);

impl<'d> PinOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for PinOutput<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.0.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
