//! Matrix Core - Platform-agnostic Display Engine and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Capability-Traits, den Frame-Buffer, die Glyphen und
//! die Engine (Scanner, ToneGenerator, ButtonWatcher, Sequencer).

#![no_std]

// Muss zuerst kommen, damit die Makros in allen Modulen sichtbar sind
mod fmt;

pub mod buttons;
pub mod cancel;
pub mod device;
pub mod glyphs;
pub mod logic;
pub mod scanner;
pub mod sequencer;
pub mod timing;
pub mod tone;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cancel::CancelToken;
pub use device::{Device, MatrixLines, NoSensor};
pub use glyphs::digit_glyph;
pub use logic::{ToneTiming, temperature_digits, tone_timing};
pub use traits::{Delay, InputLine, OutputLine, SensorError, TemperatureSensor};
pub use types::{Buttons, Frame, Pattern};
