//! ButtonWatcher - Taster per Polling überwachen
//!
//! Die Taster sind Low-aktiv (Pull-Up). Abgefragt wird alle
//! `BUTTON_POLL_MS`, es gibt kein weiteres Entprellen: ein Prellen
//! kürzer als das Intervall kann je nach Phase verpasst werden.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::cancel::CancelToken;
use crate::device::Device;
use crate::timing::BUTTON_POLL_MS;
use crate::traits::{Delay, InputLine, OutputLine};
use crate::types::Buttons;

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Momentaner Zustand der gewählten Taster
    pub fn is_pressed(&self, buttons: Buttons) -> bool {
        match buttons {
            Buttons::A => self.button_a.is_low(),
            Buttons::B => self.button_b.is_low(),
            Buttons::Any => self.button_a.is_low() || self.button_b.is_low(),
        }
    }

    /// Fragt `buttons` ab, bis ein Druck erkannt wird, und löst dann `pressed` aus
    ///
    /// Kehrt auch zurück, wenn `pressed` vorher von jemand anderem
    /// ausgelöst wurde. Mehrere Watcher auf demselben Taster sind erlaubt.
    pub async fn on_press(&self, buttons: Buttons, pressed: &CancelToken) {
        let mut delay = self.delay.clone();
        loop {
            if pressed.is_cancelled() {
                return;
            }
            if self.is_pressed(buttons) {
                info!("Buttons: {} pressed", buttons.as_str());
                pressed.cancel();
                return;
            }
            trace!("Buttons: {} not pressed", buttons.as_str());
            delay.delay_ms(BUTTON_POLL_MS).await;
        }
    }

    /// Löst `pressed` aus, sobald Taster A gedrückt ist
    pub async fn on_button_a_press(&self, pressed: &CancelToken) {
        self.on_press(Buttons::A, pressed).await
    }

    /// Löst `pressed` aus, sobald Taster B gedrückt ist
    pub async fn on_button_b_press(&self, pressed: &CancelToken) {
        self.on_press(Buttons::B, pressed).await
    }

    /// Löst `pressed` beim ersten Druck auf A oder B aus
    pub async fn on_button_press(&self, pressed: &CancelToken) {
        self.on_press(Buttons::Any, pressed).await
    }
}
