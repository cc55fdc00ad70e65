//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::Frame;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für den Matrix-Writer
///
/// Abstrahiert den Zugriff auf die WS2812-Matrix (25 Pixel).
///
/// # Implementierungen
/// - **Production:** RmtMatrixWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockMatrixWriter (in-memory Mock)
pub trait MatrixWriter: Send {
    /// Überträgt einen kompletten Frame an die Matrix
    ///
    /// Blockiert, bis der Übertragungspuffer den Frame angenommen hat -
    /// natürliche Gegendruck-Bremse gegen zu schnelles Refresh.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, frame: &Frame) -> Result<(), LedError>;
}
