//! Zeit-Konstanten der Anzeige-Engine

/// Anzahl Zeilen der LED-Matrix
pub const NUM_ROWS: usize = 5;

/// Anzahl Spalten der LED-Matrix
pub const NUM_COLS: usize = 5;

/// Leuchtdauer pro LED während des Multiplexings in Mikrosekunden
/// 25 × 500 µs = 12,5 ms pro Bild (≈ 80 Hz)
pub const DWELL_US: u64 = 500;

/// Abfrage-Intervall der Taster in Millisekunden
pub const BUTTON_POLL_MS: u64 = 250;

/// Anzeigedauer eines Sequencer-Bildes in Millisekunden
pub const FRAME_MS: u64 = 1_000;

/// Nachlaufzeit von `wait_settled` in Millisekunden
pub const SETTLE_MS: u64 = 500;

/// Maximale Anzahl Dezimalstellen einer Temperatur-Anzeige
pub const MAX_DIGITS: usize = 10;
