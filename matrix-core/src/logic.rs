//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use heapless::Vec;

use crate::timing::MAX_DIGITS;

/// Periodendauer einer Rechteckschwingung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneTiming {
    pub period_ns: u64,
    pub half_period_ns: u64,
}

/// Berechnet Periode und Halbperiode für eine Frequenz in Hz
///
/// Gibt `None` für 0 Hz zurück (keine gültige Schwingung).
///
/// # Beispiele
///
/// ```
/// # use matrix_core::tone_timing;
/// let timing = tone_timing(440).unwrap();
/// assert_eq!(timing.half_period_ns, 1_136_363);
/// ```
pub fn tone_timing(frequency_hz: u32) -> Option<ToneTiming> {
    if frequency_hz == 0 {
        return None;
    }
    let period_ns = 1_000_000_000u64 / u64::from(frequency_hz);
    Some(ToneTiming {
        period_ns,
        half_period_ns: period_ns / 2,
    })
}

/// Zerlegt einen Roh-Messwert (Milligrad) in Dezimalstellen, höchstwertige zuerst
///
/// - Ganze Grad durch Integer-Division durch 1000
/// - Nur Werte > 0 liefern Ziffern: 0 und negative Werte ergeben eine leere Folge
/// - Höchstens `MAX_DIGITS` Stellen, die höchstwertigen Reste werden verworfen.
///   Mit `i32` kommen höchstens 7 Stellen vor (`i32::MAX / 1000`), die Grenze
///   greift also nie und ist nur die Kapazität des `heapless::Vec`.
pub fn temperature_digits(millicelsius: i32) -> Vec<u8, MAX_DIGITS> {
    let mut value = millicelsius / 1000;
    let mut digits: Vec<u8, MAX_DIGITS> = Vec::new();

    // Niederwertigste Stelle zuerst
    while value > 0 {
        if digits.push((value % 10) as u8).is_err() {
            break;
        }
        value /= 10;
    }

    digits.reverse();
    digits
}
