// Library-Root: Hardware-Anbindung und Tasks für die LED-Matrix
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von matrix-core
pub use matrix_core::{CancelToken, Device, MatrixLines, glyphs};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::hal::{ChipTemperature, EmbassyDelay, GpioButton, GpioLine};

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Statt:  Device<CriticalSectionRawMutex, GpioLine, GpioButton, EmbassyDelay, ChipTemperature>
// Nutze:  BoardDevice

/// Der komplette Device dieses Boards (Variante 2, mit Temperatur-Sensor)
pub type BoardDevice =
    Device<CriticalSectionRawMutex, GpioLine, GpioButton, EmbassyDelay, ChipTemperature>;
