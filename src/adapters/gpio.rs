//! Raspberry Pi GPIO adapter.
//!
//! The only module that touches real hardware. Owns all four lines and
//! exposes them through [`InputPort`] and [`LedPort`]; electrical
//! polarity (both buttons are active-low) is folded away here so the
//! domain only sees logical booleans.
//!
//! Pin setup mirrors the deployment wiring in [`crate::pins`]: the alarm
//! line gets an internal pull-down (silent buzzer reads LOW), the TEST
//! button an internal pull-up, and START/RESET relies on the board's own
//! fixed pull-up on BCM 2.

use rppal::gpio::{Gpio, InputPin, OutputPin};

use crate::app::ports::{InputPort, LedPort};
use crate::machine::InputSample;
use crate::pins;

/// All four GPIO lines behind the two hardware-facing ports.
pub struct GpioLines {
    alarm: InputPin,
    reset: InputPin,
    test: InputPin,
    led: OutputPin,
    led_on: bool,
}

impl GpioLines {
    /// Claim and configure the lines. Any failure here is fatal at
    /// startup; there is no recovery path for hardware access errors.
    pub fn new() -> rppal::gpio::Result<Self> {
        let gpio = Gpio::new()?;
        let alarm = gpio.get(pins::ALARM_GPIO)?.into_input_pulldown();
        let reset = gpio.get(pins::RESET_GPIO)?.into_input();
        let test = gpio.get(pins::TEST_GPIO)?.into_input_pullup();
        let led = gpio.get(pins::LED_GPIO)?.into_output_low();
        Ok(Self {
            alarm,
            reset,
            test,
            led,
            led_on: false,
        })
    }
}

impl InputPort for GpioLines {
    fn sample(&mut self) -> InputSample {
        InputSample {
            alarm: self.alarm.is_high(),
            reset_pressed: self.reset.is_low(),
            test_pressed: self.test.is_low(),
        }
    }
}

impl LedPort for GpioLines {
    fn set(&mut self, on: bool) {
        if on {
            self.led.set_high();
        } else {
            self.led.set_low();
        }
        self.led_on = on;
    }

    fn is_on(&self) -> bool {
        self.led_on
    }
}
