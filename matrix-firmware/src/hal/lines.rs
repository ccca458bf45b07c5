// GPIO-Leitungen für Matrix, Buzzer und Taster
//
// Die Engine kennt nur "aktiv" und "inaktiv". Welcher Pegel das ist,
// wird hier pro Leitung beim Verdrahten festgelegt.

use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};
use matrix_core::{InputLine, OutputLine};

/// Ausgangsleitung mit fester Polarität
pub struct GpioLine {
    pin: Output<'static>,
    active_high: bool,
}

impl GpioLine {
    /// High-aktive Leitung (Matrix-Zeile, Buzzer), startet inaktiv
    pub fn active_high(pin: impl OutputPin + 'static) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
            active_high: true,
        }
    }

    /// Low-aktive Leitung (Matrix-Spalte), startet inaktiv (High = Vorladen)
    pub fn active_low(pin: impl OutputPin + 'static) -> Self {
        Self {
            pin: Output::new(pin, Level::High, OutputConfig::default()),
            active_high: false,
        }
    }
}

impl OutputLine for GpioLine {
    fn set_active(&mut self) {
        if self.active_high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn set_inactive(&mut self) {
        if self.active_high {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }
}

/// Taster-Eingang mit internem Pull-Up (gedrückt = Low)
pub struct GpioButton {
    pin: Input<'static>,
}

impl GpioButton {
    pub fn new(pin: impl InputPin + 'static) -> Self {
        Self {
            pin: Input::new(pin, InputConfig::default().with_pull(Pull::Up)),
        }
    }
}

impl InputLine for GpioButton {
    fn is_low(&self) -> bool {
        self.pin.is_low()
    }
}
