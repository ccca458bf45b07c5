// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Capability-Traits aus matrix-core auf ESP32-C6 Hardware.

pub mod delay;
pub mod lines;
pub mod temperature;

pub use delay::EmbassyDelay;
pub use lines::{GpioButton, GpioLine};
pub use temperature::ChipTemperature;
