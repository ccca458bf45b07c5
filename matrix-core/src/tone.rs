//! ToneGenerator - Rechteckschwingung auf der Buzzer-Leitung

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::cancel::CancelToken;
use crate::device::Device;
use crate::logic::tone_timing;
use crate::traits::{Delay, InputLine, OutputLine};

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Erzeugt einen Ton mit `frequency_hz` (50 % Tastverhältnis), bis `cancel` ausgelöst wurde
    ///
    /// Abbruch wird vor jeder vollen Periode geprüft, die Latenz ist also
    /// höchstens eine Periode (bei 1 Hz eine Sekunde). 0 Hz wird abgelehnt,
    /// ohne die Leitung anzufassen. Wartet ein zweiter Ton noch auf den
    /// Buzzer, beendet ihn sein Token ebenfalls sofort.
    pub async fn buzz(&self, cancel: &CancelToken, frequency_hz: u32) {
        let Some(timing) = tone_timing(frequency_hz) else {
            error!("Tone: frequency 0 Hz rejected");
            return;
        };

        let mut buzzer = match select(self.buzzer.lock(), cancel.cancelled()).await {
            Either::First(buzzer) => buzzer,
            Either::Second(()) => {
                debug!("Tone: cancelled while waiting for buzzer");
                return;
            }
        };
        let mut delay = self.delay.clone();

        info!(
            "Tone: {} Hz (half period {} ns)",
            frequency_hz, timing.half_period_ns
        );

        while !cancel.is_cancelled() {
            buzzer.set_active();
            delay.delay_ns(timing.half_period_ns).await;
            buzzer.set_inactive();
            delay.delay_ns(timing.half_period_ns).await;
        }

        buzzer.set_inactive();
        info!("Tone: stopped");
    }
}
