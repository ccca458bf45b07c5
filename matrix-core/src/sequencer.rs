//! Sequencer - Bildfolgen über die Zeit (Temperatur-Anzeige)
//!
//! Jedes Bild wird gesetzt, von einem eigenen Scanner mit einer
//! Deadline von `FRAME_MS` angezeigt, und erst danach kommt das nächste.

use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use crate::cancel::CancelToken;
use crate::device::Device;
use crate::glyphs::{DEGREE_C, digit_glyph};
use crate::logic::temperature_digits;
use crate::timing::{FRAME_MS, MAX_DIGITS};
use crate::traits::{Delay, InputLine, OutputLine, SensorError, TemperatureSensor};
use crate::types::Pattern;

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Zeigt ein Bild für höchstens `FRAME_MS` an
    ///
    /// Der Scanner bekommt ein eigenes Token, das nach `FRAME_MS` ausgelöst
    /// wird. Zurück geht es erst, wenn Scanner und Deadline beide fertig sind.
    pub async fn show_frame(&self, pattern: &Pattern) {
        self.set_matrix(pattern);

        let deadline = CancelToken::new();
        let mut delay = self.delay.clone();

        join(self.display(&deadline), async {
            delay.delay_ms(FRAME_MS).await;
            deadline.cancel();
        })
        .await;
    }
}

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
    T: TemperatureSensor,
{
    /// Roh-Messwert des Sensors in Milligrad Celsius
    pub fn read_temperature(&self) -> Result<i32, SensorError> {
        self.sensor
            .lock(|sensor| sensor.borrow_mut().read_millicelsius())
    }

    /// Zeigt die Temperatur in ganzen Grad Ziffer für Ziffer an, gefolgt von °C
    ///
    /// Wiederholt sich, bis `cancel` ausgelöst wurde. Abbruch wird vor jedem
    /// Bild geprüft. Werte <= 0 °C ergeben keine Ziffern, dann erscheint nur
    /// das °C-Zeichen. Ein Lesefehler wird geloggt und genauso behandelt.
    pub async fn display_temp(&self, cancel: &CancelToken) {
        info!("Sequencer: temperature display started");

        while !cancel.is_cancelled() {
            let digits: Vec<u8, MAX_DIGITS> = match self.read_temperature() {
                Ok(millicelsius) => {
                    debug!("Sequencer: reading {} mC", millicelsius);
                    temperature_digits(millicelsius)
                }
                Err(e) => {
                    warn!("Sequencer: sensor {}", e.as_str());
                    Vec::new()
                }
            };

            for &digit in digits.iter() {
                if cancel.is_cancelled() {
                    break;
                }
                if let Some(glyph) = digit_glyph(digit) {
                    self.show_frame(glyph).await;
                }
            }

            if cancel.is_cancelled() {
                break;
            }
            self.show_frame(&DEGREE_C).await;
        }

        info!("Sequencer: temperature display stopped");
    }
}
