//! Device: Frame-Buffer plus exklusive Hardware-Capabilities
//!
//! Der Device wird einmal beim Start gebaut und lebt bis zum Ende des
//! Programms. Die Anzeige-, Ton-, Taster- und Sequencer-Operationen sind
//! in eigenen Modulen als `impl Device` Blöcke implementiert.

use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use crate::cancel::CancelToken;
use crate::timing::{NUM_COLS, NUM_ROWS, SETTLE_MS};
use crate::traits::{Delay, InputLine, OutputLine, SensorError, TemperatureSensor};
use crate::types::{Frame, Pattern};

/// Die zehn Leitungen der LED-Matrix
///
/// Spalten: inaktiv = Vorladepegel, aktiv = Strompfad freigeben.
/// Zeilen: aktiv = LED-Zeile treiben.
pub struct MatrixLines<O> {
    pub cols: [O; NUM_COLS],
    pub rows: [O; NUM_ROWS],
}

impl<O: OutputLine> MatrixLines<O> {
    /// Setzt alle Zeilen und Spalten inaktiv
    pub fn release_all(&mut self) {
        for row in self.rows.iter_mut() {
            row.set_inactive();
        }
        for col in self.cols.iter_mut() {
            col.set_inactive();
        }
    }
}

/// Platzhalter für Variante 1 (Board ohne Temperatur-Sensor)
pub struct NoSensor;

/// Device mit Frame-Buffer und allen Leitungen
///
/// # Generische Parameter
/// - `M`: Raw-Mutex (CriticalSection in der Firmware, Noop in Host-Tests)
/// - `O`: Ausgangsleitung (Matrix, Buzzer)
/// - `I`: Eingangsleitung (Taster)
/// - `D`: Zeitbasis, wird pro Task geklont
/// - `T`: Temperatur-Sensor oder `NoSensor`
pub struct Device<M: RawMutex, O, I, D, T = NoSensor> {
    pub(crate) frame: BlockingMutex<M, Cell<Frame>>,
    pub(crate) matrix: Mutex<M, MatrixLines<O>>,
    pub(crate) buzzer: Mutex<M, O>,
    pub(crate) button_a: I,
    pub(crate) button_b: I,
    pub(crate) delay: D,
    pub(crate) sensor: BlockingMutex<M, RefCell<T>>,
}

impl<M, O, I, D> Device<M, O, I, D, NoSensor>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Baut den Device aus den bereits konfigurierten Leitungen
    ///
    /// Alle Ausgänge werden inaktiv gesetzt, der Frame-Buffer ist leer.
    pub fn new(mut matrix: MatrixLines<O>, mut buzzer: O, button_a: I, button_b: I, delay: D) -> Self {
        matrix.release_all();
        buzzer.set_inactive();

        info!("Device: initialized ({}x{} matrix)", NUM_ROWS, NUM_COLS);

        Self {
            frame: BlockingMutex::new(Cell::new(Frame::EMPTY)),
            matrix: Mutex::new(matrix),
            buzzer: Mutex::new(buzzer),
            button_a,
            button_b,
            delay,
            sensor: BlockingMutex::new(RefCell::new(NoSensor)),
        }
    }

    /// Hängt den Temperatur-Sensor an (Variante 2)
    ///
    /// Ruft `init()` genau einmal auf. Schlägt das fehl, gibt es keinen Device.
    pub fn with_temperature_sensor<T: TemperatureSensor>(
        self,
        mut sensor: T,
    ) -> Result<Device<M, O, I, D, T>, SensorError> {
        if let Err(e) = sensor.init() {
            error!("Device: temperature sensor init failed: {}", e.as_str());
            return Err(e);
        }
        info!("Device: temperature sensor attached");

        Ok(Device {
            frame: self.frame,
            matrix: self.matrix,
            buzzer: self.buzzer,
            button_a: self.button_a,
            button_b: self.button_b,
            delay: self.delay,
            sensor: BlockingMutex::new(RefCell::new(sensor)),
        })
    }
}

impl<M, O, I, D, T> Device<M, O, I, D, T>
where
    M: RawMutex,
    O: OutputLine,
    I: InputLine,
    D: Delay + Clone,
{
    /// Überschreibt den kompletten Frame-Buffer mit einem Muster
    ///
    /// Jeder Wert ungleich 0 wird zu "an". Gibt `&Self` für Verkettung zurück.
    pub fn set_matrix(&self, pattern: &Pattern) -> &Self {
        let frame = Frame::from_pattern(pattern);
        self.frame.lock(|cell| cell.set(frame));
        self
    }

    /// Schaltet alle LEDs im Frame-Buffer aus
    pub fn clear(&self) -> &Self {
        self.frame.lock(|cell| cell.set(Frame::EMPTY));
        self
    }

    /// Konsistente Kopie des Frame-Buffers
    pub fn frame(&self) -> Frame {
        self.frame.lock(|cell| cell.get())
    }

    /// Blockiert den aufrufenden Task bis `cancel` ausgelöst wurde
    pub async fn wait(&self, cancel: &CancelToken) {
        cancel.cancelled().await;
    }

    /// Wie `wait`, hält danach aber noch `SETTLE_MS` an,
    /// damit das zuletzt gezeigte Bild kurz stehen bleibt.
    pub async fn wait_settled(&self, cancel: &CancelToken) {
        cancel.cancelled().await;
        let mut delay = self.delay.clone();
        delay.delay_ms(SETTLE_MS).await;
    }
}
