//! Core Types für die LED-Matrix
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::timing::{NUM_COLS, NUM_ROWS};

/// Extern vorgegebenes 5×5-Muster, Zeile für Zeile
///
/// Jeder Wert ungleich 0 bedeutet "an".
pub type Pattern = [[u8; NUM_COLS]; NUM_ROWS];

/// Frame-Buffer Inhalt: eine LED ist entweder an oder aus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    cells: [[bool; NUM_COLS]; NUM_ROWS],
}

impl Frame {
    /// Alle LEDs aus
    pub const EMPTY: Frame = Frame {
        cells: [[false; NUM_COLS]; NUM_ROWS],
    };

    /// Übernimmt ein Muster: Zelle = `pattern[r][c] != 0`
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let mut cells = [[false; NUM_COLS]; NUM_ROWS];
        for (row, values) in pattern.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = value != 0;
            }
        }
        Self { cells }
    }

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Setzt eine einzelne Zelle (für Tests und Bild-Rekonstruktion)
    pub fn set(&mut self, row: usize, col: usize, lit: bool) {
        self.cells[row][col] = lit;
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Zeilen als Bitmasken, Bit 4 = Spalte 0
    pub fn row_masks(&self) -> [u8; NUM_ROWS] {
        let mut masks = [0u8; NUM_ROWS];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &lit) in cells.iter().enumerate() {
                if lit {
                    masks[row] |= 1 << (NUM_COLS - 1 - col);
                }
            }
        }
        masks
    }
}

impl From<&Pattern> for Frame {
    fn from(pattern: &Pattern) -> Self {
        Frame::from_pattern(pattern)
    }
}

/// Auswahl der Taster für den ButtonWatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buttons {
    A,
    B,
    /// Feuert beim ersten der beiden Taster
    Any,
}

impl Buttons {
    pub fn as_str(self) -> &'static str {
        match self {
            Buttons::A => "A",
            Buttons::B => "B",
            Buttons::Any => "A|B",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Frame {{ rows: {}, lit: {} }}",
            self.row_masks(),
            self.lit_count()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Buttons {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Buttons({})", self.as_str())
    }
}
