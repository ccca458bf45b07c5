// Zeitbasis über embassy-time
//
// Auflösung ist der Tick des Time-Drivers (esp-rtos: 1 µs), kürzere
// Haltezeiten werden aufgerundet.

use embassy_time::{Duration, Timer};
use matrix_core::Delay;

/// Haltezeiten als Embassy-Timer: gibt die CPU an andere Tasks ab
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyDelay;

impl Delay for EmbassyDelay {
    async fn delay_ns(&mut self, ns: u64) {
        Timer::after(Duration::from_nanos(ns)).await
    }
}
