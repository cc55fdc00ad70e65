// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED-Matrix Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung der WS2812-Matrix
pub const MATRIX_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing (800 kHz Bitrate)
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Refresh-Intervall der Anzeige in Millisekunden
/// Design-Konstante, kein Performance-Tuning-Wert
pub const REFRESH_INTERVAL_MS: u64 = 100;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (rot)
pub const STATUS_LED_GPIO_PIN: u8 = 3;

/// Halbe Blink-Periode in Millisekunden (an 100ms, aus 100ms)
pub const BLINK_INTERVAL_MS: u64 = 100;

// ============================================================================
// Tasten Konfiguration
// ============================================================================

/// GPIO-Pin für Taste A (Zähler +1)
pub const BTN_INCREMENT_GPIO_PIN: u8 = 4;

/// GPIO-Pin für Taste B (Zähler -1)
pub const BTN_DECREMENT_GPIO_PIN: u8 = 5;

/// Kapazität des Tasten-Event-Channels
/// Klein gehalten: der Input-Task verarbeitet Events sofort
pub const BUTTON_EVENT_QUEUE_SIZE: usize = 4;
