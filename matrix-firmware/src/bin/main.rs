// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_matrix::config::MAIN_IDLE_SECS;
use esp_matrix::hal::{ChipTemperature, EmbassyDelay, GpioButton, GpioLine};
use esp_matrix::tasks::matrix_app_task;
use esp_matrix::{BoardDevice, Device, MatrixLines};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, verdrahtet den Device einmalig und spawnt den
/// Matrix-Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Pin-Zuordnung siehe config.rs
    let matrix = MatrixLines {
        cols: [
            GpioLine::active_low(peripherals.GPIO0),
            GpioLine::active_low(peripherals.GPIO1),
            GpioLine::active_low(peripherals.GPIO2),
            GpioLine::active_low(peripherals.GPIO3),
            GpioLine::active_low(peripherals.GPIO4),
        ],
        rows: [
            GpioLine::active_high(peripherals.GPIO5),
            GpioLine::active_high(peripherals.GPIO6),
            GpioLine::active_high(peripherals.GPIO7),
            GpioLine::active_high(peripherals.GPIO20),
            GpioLine::active_high(peripherals.GPIO21),
        ],
    };
    let buzzer = GpioLine::active_high(peripherals.GPIO22);
    let button_a = GpioButton::new(peripherals.GPIO9);
    let button_b = GpioButton::new(peripherals.GPIO23);

    // Device bauen (Variante 2: mit Temperatur-Sensor)
    // Device muss 'static sein für Tasks
    static DEVICE: static_cell::StaticCell<BoardDevice> = static_cell::StaticCell::new();
    let device = &*DEVICE.init(
        Device::new(matrix, buzzer, button_a, button_b, EmbassyDelay)
            .with_temperature_sensor(ChipTemperature::new(peripherals.TSENS))
            .expect("Failed to initialize temperature sensor"),
    );

    // Spawn Matrix Task
    spawner.spawn(matrix_app_task(device)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(MAIN_IDLE_SECS)).await;
    }
}
