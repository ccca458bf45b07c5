//! Gemeinsame Mocks für die Integration Tests
//!
//! Alle Mock-Leitungen und die Mock-Zeitbasis schreiben in ein gemeinsames
//! Ereignis-Log, damit sich Pegel und Haltezeiten zeitlich zuordnen lassen.
//! Die Haltezeiten laufen auf einer virtuellen Uhr: eine Haltezeit endet erst,
//! wenn keine andere früher fällig ist.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use embassy_futures::yield_now;
use log::{LevelFilter, Log, Metadata, Record};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use matrix_core::timing::{DWELL_US, NUM_COLS, NUM_ROWS};
use matrix_core::{
    CancelToken, Delay, Device, Frame, InputLine, MatrixLines, NoSensor, OutputLine, SensorError,
    TemperatureSensor,
};

// ============================================================================
// Ereignis-Log
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineId {
    Col(usize),
    Row(usize),
    Buzzer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Line { id: LineId, active: bool },
    Delay { ns: u64 },
}

/// Virtuelle Uhr mit allen laufenden Haltezeiten als (Weckzeit, Id)
#[derive(Default)]
struct Clock {
    now_ns: u64,
    next_id: u64,
    pending: Vec<(u64, u64)>,
}

#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
    clock: Arc<Mutex<Clock>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Alle Haltezeiten in Reihenfolge
    pub fn delays(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Delay { ns } => Some(ns),
                _ => None,
            })
            .collect()
    }

    pub fn count_delays(&self, ns: u64) -> usize {
        self.delays().into_iter().filter(|&d| d == ns).count()
    }

    /// Aktueller Stand der virtuellen Uhr
    pub fn elapsed_ns(&self) -> u64 {
        self.clock.lock().unwrap().now_ns
    }

    fn start_timer(&self, ns: u64) -> Timer {
        let mut clock = self.clock.lock().unwrap();
        let id = clock.next_id;
        clock.next_id += 1;
        let wake_ns = clock.now_ns + ns;
        clock.pending.push((wake_ns, id));
        Timer {
            id,
            recorder: self.clone(),
        }
    }

    /// Läuft `timer` ab, wenn er der früheste ist; die Uhr springt dann auf seine Weckzeit.
    /// Bei gleicher Weckzeit gewinnt der früher gestartete.
    fn try_expire(&self, timer: &Timer) -> bool {
        let mut clock = self.clock.lock().unwrap();
        let Some(&(wake_ns, id)) = clock.pending.iter().min() else {
            return false;
        };
        if id != timer.id {
            return false;
        }
        clock.now_ns = wake_ns;
        clock.pending.retain(|&(_, pending)| pending != id);
        true
    }
}

/// Eine laufende Haltezeit. Wird der Future vorher verworfen (z.B. in `select`),
/// verschwindet sie wieder aus der Uhr.
struct Timer {
    id: u64,
    recorder: Recorder,
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Ok(mut clock) = self.recorder.clock.lock() {
            clock.pending.retain(|&(_, pending)| pending != self.id);
        }
    }
}

// ============================================================================
// Mock Leitungen
// ============================================================================

pub struct MockLine {
    id: LineId,
    active: bool,
    recorder: Recorder,
}

impl MockLine {
    pub fn new(id: LineId, recorder: &Recorder) -> Self {
        Self {
            id,
            active: false,
            recorder: recorder.clone(),
        }
    }
}

impl OutputLine for MockLine {
    fn set_active(&mut self) {
        self.active = true;
        self.recorder.push(Event::Line {
            id: self.id,
            active: true,
        });
    }

    fn set_inactive(&mut self) {
        self.active = false;
        self.recorder.push(Event::Line {
            id: self.id,
            active: false,
        });
    }
}

/// Taster, dessen Zustand der Test von außen setzt
#[derive(Clone, Default)]
pub struct MockButton {
    pressed: Arc<AtomicBool>,
}

impl MockButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.pressed.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.pressed.store(false, Ordering::SeqCst);
    }
}

impl InputLine for MockButton {
    fn is_low(&self) -> bool {
        self.pressed.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Mock Zeitbasis
// ============================================================================

/// Zeichnet jede Haltezeit beim Start auf und gibt dann die CPU ab, bis sie
/// auf der virtuellen Uhr die früheste fällige ist.
///
/// `block_on` pollt alle Futures eines `join`/`select` reihum, dadurch
/// laufen parallele Haltezeiten in der richtigen zeitlichen Reihenfolge ab.
#[derive(Clone)]
pub struct MockDelay {
    recorder: Recorder,
}

impl MockDelay {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl Delay for MockDelay {
    async fn delay_ns(&mut self, ns: u64) {
        self.recorder.push(Event::Delay { ns });
        let timer = self.recorder.start_timer(ns);
        loop {
            yield_now().await;
            if self.recorder.try_expire(&timer) {
                return;
            }
        }
    }
}

// ============================================================================
// Test-Logger
// ============================================================================

/// Sammelt alle Log-Zeilen von `matrix-core` und gibt sie auf der Konsole aus
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static LOG_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!("[{}] {}", record.level(), record.args());
        println!("{}", line);
        if let Ok(mut lines) = LOG_LINES.lock() {
            lines.push(line);
        }
    }

    fn flush(&self) {}
}

/// Installiert den Logger (mehrfacher Aufruf ist harmlos)
pub fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Wurde irgendwo im Testprozess eine Zeile mit `needle` geloggt?
pub fn logged(needle: &str) -> bool {
    LOG_LINES
        .lock()
        .map(|lines| lines.iter().any(|line| line.contains(needle)))
        .unwrap_or(false)
}

// ============================================================================
// Mock Sensor
// ============================================================================

/// Liefert vorgegebene Messwerte. Sind alle verbraucht, löst er `stop` aus
/// und meldet einen Lesefehler.
pub struct MockSensor {
    readings: VecDeque<Result<i32, SensorError>>,
    stop: Arc<CancelToken>,
    pub init_calls: usize,
    pub fail_init: bool,
}

impl MockSensor {
    pub fn new(readings: &[Result<i32, SensorError>], stop: &Arc<CancelToken>) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
            stop: stop.clone(),
            init_calls: 0,
            fail_init: false,
        }
    }
}

impl TemperatureSensor for MockSensor {
    fn init(&mut self) -> Result<(), SensorError> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(SensorError::InitFailed);
        }
        Ok(())
    }

    fn read_millicelsius(&mut self) -> Result<i32, SensorError> {
        match self.readings.pop_front() {
            Some(reading) => reading,
            None => {
                self.stop.cancel();
                Err(SensorError::ReadFailed)
            }
        }
    }
}

// ============================================================================
// Test-Board
// ============================================================================

pub type TestDevice<T = NoSensor> = Device<NoopRawMutex, MockLine, MockButton, MockDelay, T>;

pub struct TestBoard {
    pub recorder: Recorder,
    pub button_a: MockButton,
    pub button_b: MockButton,
    pub device: TestDevice,
}

impl TestBoard {
    /// Baut einen Device mit Mock-Leitungen; das Log startet leer
    pub fn new() -> Self {
        init_logger();
        let recorder = Recorder::new();
        let matrix = MatrixLines {
            cols: core::array::from_fn(|c| MockLine::new(LineId::Col(c), &recorder)),
            rows: core::array::from_fn(|r| MockLine::new(LineId::Row(r), &recorder)),
        };
        let buzzer = MockLine::new(LineId::Buzzer, &recorder);
        let button_a = MockButton::new();
        let button_b = MockButton::new();

        let device = Device::new(
            matrix,
            buzzer,
            button_a.clone(),
            button_b.clone(),
            MockDelay::new(&recorder),
        );
        recorder.clear();

        Self {
            recorder,
            button_a,
            button_b,
            device,
        }
    }
}

// ============================================================================
// Auswertung
// ============================================================================

pub const DWELL_NS: u64 = DWELL_US * 1_000;

/// Rekonstruiert aus dem Log, welche LEDs pro Scanner-Durchlauf geleuchtet haben
///
/// Eine LED leuchtet während einer Haltezeit, wenn ihre Zeile und Spalte
/// gleichzeitig aktiv sind. 25 Haltezeiten von `DWELL_NS` ergeben ein Bild.
pub fn scanned_frames(events: &[Event]) -> Vec<Frame> {
    let mut cols = [false; NUM_COLS];
    let mut rows = [false; NUM_ROWS];
    let mut frames = Vec::new();
    let mut current = Frame::EMPTY;
    let mut dwells = 0;

    for event in events {
        match *event {
            Event::Line { id, active } => match id {
                LineId::Col(c) => cols[c] = active,
                LineId::Row(r) => rows[r] = active,
                LineId::Buzzer => {}
            },
            Event::Delay { ns } if ns == DWELL_NS => {
                for (r, &row_on) in rows.iter().enumerate() {
                    for (c, &col_on) in cols.iter().enumerate() {
                        if row_on && col_on {
                            current.set(r, c, true);
                        }
                    }
                }
                dwells += 1;
                if dwells == NUM_ROWS * NUM_COLS {
                    frames.push(current);
                    current = Frame::EMPTY;
                    dwells = 0;
                }
            }
            Event::Delay { .. } => {}
        }
    }

    frames
}

/// Fasst aufeinanderfolgende gleiche Bilder zusammen
pub fn distinct_frames(frames: &[Frame]) -> Vec<Frame> {
    let mut result: Vec<Frame> = Vec::new();
    for frame in frames {
        if result.last() != Some(frame) {
            result.push(*frame);
        }
    }
    result
}

/// Wartet (kooperativ), bis das Log mindestens `count` Haltezeiten von `ns` enthält
pub async fn wait_for_delays(recorder: &Recorder, ns: u64, count: usize) {
    while recorder.count_delays(ns) < count {
        yield_now().await;
    }
}
