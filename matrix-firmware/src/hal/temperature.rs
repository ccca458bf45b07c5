// On-Chip Temperatur-Sensor (TSENS) des ESP32-C6

use esp_hal::peripherals::TSENS;
use esp_hal::tsens::{Config as TsensConfig, TemperatureSensor as Tsens};
use matrix_core::{SensorError, TemperatureSensor};

/// Temperatur-Sensor Capability
///
/// Das Peripheral wird erst in `init()` konfiguriert, das der Device
/// beim Anhängen des Sensors genau einmal aufruft.
pub struct ChipTemperature {
    peripheral: Option<TSENS<'static>>,
    sensor: Option<Tsens<'static>>,
}

impl ChipTemperature {
    pub fn new(peripheral: TSENS<'static>) -> Self {
        Self {
            peripheral: Some(peripheral),
            sensor: None,
        }
    }
}

impl TemperatureSensor for ChipTemperature {
    fn init(&mut self) -> Result<(), SensorError> {
        let peripheral = self.peripheral.take().ok_or(SensorError::InitFailed)?;
        let sensor =
            Tsens::new(peripheral, TsensConfig::default()).map_err(|_| SensorError::InitFailed)?;
        self.sensor = Some(sensor);
        Ok(())
    }

    fn read_millicelsius(&mut self) -> Result<i32, SensorError> {
        let sensor = self.sensor.as_ref().ok_or(SensorError::ReadFailed)?;
        let celsius = sensor.get_temperature().to_celsius();
        Ok((celsius * 1000.0) as i32)
    }
}
