// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Button, ButtonEvent, DigitCounter, Frame, LedError, MatrixWriter, PIXEL_COUNT, color, glyph,
    render_frame,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::BUTTON_EVENT_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, ButtonEvent, 4>
// Nutze:  ButtonEventSender

/// Channel für Tasten-Events (Watcher-Tasks → Input-Task)
///
/// Beide Watcher senden in denselben Channel; der Input-Task ist der
/// einzige Empfänger und matcht auf den Button-Tag im Event.
pub type ButtonEventChannel = Channel<NoopRawMutex, ButtonEvent, BUTTON_EVENT_QUEUE_SIZE>;

/// Sender für Tasten-Events (je Watcher-Task einer)
pub type ButtonEventSender =
    Sender<'static, NoopRawMutex, ButtonEvent, BUTTON_EVENT_QUEUE_SIZE>;

/// Receiver für Tasten-Events (Input-Task empfängt)
pub type ButtonEventReceiver =
    Receiver<'static, NoopRawMutex, ButtonEvent, BUTTON_EVENT_QUEUE_SIZE>;
