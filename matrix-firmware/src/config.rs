// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED-Matrix Konfiguration
// ============================================================================

/// GPIO-Pins der Matrix-Spalten (Spalte 0-4)
/// Spalten sind Low-aktiv: High = Vorladepegel, Low = Strompfad frei
pub const MATRIX_COL_PINS: [u8; 5] = [0, 1, 2, 3, 4];

/// GPIO-Pins der Matrix-Zeilen (Zeile 0-4)
/// Zeilen sind High-aktiv
pub const MATRIX_ROW_PINS: [u8; 5] = [5, 6, 7, 20, 21];

// ============================================================================
// Buzzer Konfiguration
// ============================================================================

/// GPIO-Pin für den Piezo-Buzzer (High-aktiv)
pub const BUZZER_GPIO_PIN: u8 = 22;

/// Ton-Frequenz für den Start-Alarm in Hz (Kammerton A)
pub const ALERT_TONE_HZ: u32 = 440;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für Taster A (BOOT-Taster, Pull-Up, Low-aktiv)
pub const BUTTON_A_GPIO_PIN: u8 = 9;

/// GPIO-Pin für Taster B (Pull-Up, Low-aktiv)
pub const BUTTON_B_GPIO_PIN: u8 = 23;

// ============================================================================
// Ablauf Konfiguration
// ============================================================================

/// Wartezeit in Sekunden für den Idle-Loop in main()
pub const MAIN_IDLE_SECS: u64 = 3600;
