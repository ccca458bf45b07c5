//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Capabilities, die der Device bei der
//! Konstruktion einmalig übergeben bekommt (Leitungen, Sensor, Zeitbasis).
//!
//! # Implementierungen
//! - **Production:** GPIO-Leitungen, On-Chip-Sensor und `embassy_time::Timer` (matrix-firmware)
//! - **Testing:** Mock-Leitungen mit Ereignis-Log und virtuelle Zeit (matrix-tests)

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Einmalige Initialisierung des Analog-Subsystems fehlgeschlagen
    InitFailed,
    /// Messwert konnte nicht gelesen werden
    ReadFailed,
}

impl SensorError {
    pub fn as_str(self) -> &'static str {
        match self {
            SensorError::InitFailed => "init failed",
            SensorError::ReadFailed => "read failed",
        }
    }
}

/// Digitale Ausgangsleitung (Matrix-Spalte, Matrix-Zeile, Buzzer)
///
/// "Aktiv" und "inaktiv" sind logische Pegel. Ob aktiv High oder Low
/// bedeutet, entscheidet die Implementierung.
pub trait OutputLine {
    fn set_active(&mut self);
    fn set_inactive(&mut self);
}

/// Digitale Eingangsleitung (Taster mit Pull-Up)
///
/// Lesen braucht nur `&self`, damit mehrere Watcher denselben Taster
/// abfragen können.
pub trait InputLine {
    /// `true` wenn die Leitung Low liest (Taster gedrückt)
    fn is_low(&self) -> bool;
}

/// Temperatur-Sensor (nur Variante 2)
pub trait TemperatureSensor {
    /// Einmalige Initialisierung, wird vom Device beim Anhängen aufgerufen
    fn init(&mut self) -> Result<(), SensorError>;

    /// Roh-Messwert in Milligrad Celsius
    fn read_millicelsius(&mut self) -> Result<i32, SensorError>;
}

/// Zeitbasis für alle Haltezeiten
///
/// Eine Haltezeit ist aus Sicht der Engine nicht unterbrechbar:
/// Abbruch wird erst nach dem `await` geprüft.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn delay_ns(&mut self, ns: u64);

    async fn delay_us(&mut self, us: u64) {
        self.delay_ns(us.saturating_mul(1_000)).await
    }

    async fn delay_ms(&mut self, ms: u64) {
        self.delay_ns(ms.saturating_mul(1_000_000)).await
    }
}
