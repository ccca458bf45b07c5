//! Scanner - Multiplext den Frame-Buffer auf die LED-Matrix
//!
//! Pro Durchlauf wird jede der 25 LEDs einzeln für `DWELL_US` angesteuert.
//! Schnell genug wiederholt sieht das Auge ein stehendes Bild.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::cancel::CancelToken;
use crate::device::{Device, MatrixLines};
use crate::timing::{DWELL_US, NUM_COLS, NUM_ROWS};
use crate::traits::{Delay, InputLine, OutputLine};
use crate::types::Frame;

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Zeigt den Frame-Buffer an, bis `cancel` ausgelöst wurde
    ///
    /// - Abbruch wird einmal pro Durchlauf (25 LEDs, 12,5 ms) geprüft
    /// - Der Frame-Buffer wird pro Durchlauf einmal unter dem Lock kopiert,
    ///   ein gleichzeitiges `set_matrix` erscheint also erst im nächsten Bild
    /// - Ein zweiter Scanner wartet auf die Matrix-Leitungen, bis der erste fertig ist.
    ///   Wird sein Token währenddessen ausgelöst, kehrt er sofort zurück.
    pub async fn display(&self, cancel: &CancelToken) {
        let mut lines = match select(self.matrix.lock(), cancel.cancelled()).await {
            Either::First(lines) => lines,
            Either::Second(()) => {
                debug!("Scanner: cancelled while waiting for matrix lines");
                return;
            }
        };
        let mut delay = self.delay.clone();

        debug!("Scanner: started");
        let mut passes: u32 = 0;

        while !cancel.is_cancelled() {
            let frame = self.frame();
            scan_pass(&mut lines, &frame, &mut delay).await;
            passes = passes.wrapping_add(1);
        }

        lines.release_all();
        debug!("Scanner: stopped after {} passes", passes);
    }
}

/// Ein kompletter Durchlauf über alle 25 LEDs
///
/// Spaltenweise: Spalte vorladen, dann Zeile für Zeile die LED kurz
/// durchschalten und danach Zeile und Spalte wieder inaktiv setzen.
async fn scan_pass<O: OutputLine, D: Delay>(
    lines: &mut MatrixLines<O>,
    frame: &Frame,
    delay: &mut D,
) {
    for col in 0..NUM_COLS {
        lines.cols[col].set_inactive();
        for row in 0..NUM_ROWS {
            if frame.is_lit(row, col) {
                lines.rows[row].set_active();
                lines.cols[col].set_active();
            }
            delay.delay_us(DWELL_US).await;
            lines.rows[row].set_inactive();
            lines.cols[col].set_inactive();
        }
    }
}
