//! Core Types für die Ziffernanzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::sync::atomic::{AtomicU8, Ordering};

use rgb::RGB8;

/// Seitenlänge der LED-Matrix (5x5)
pub const MATRIX_SIDE: usize = 5;

/// Anzahl der Pixel in der Matrix
pub const PIXEL_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Anzahl der darstellbaren Ziffern (0-9)
pub const DIGIT_COUNT: u8 = 10;

/// Gepacktes Protokoll-Wort für ein WS2812-Pixel
///
/// Kanal-Reihenfolge auf dem Draht ist Grün-Rot-Blau:
/// Grün in Bits 23..16, Rot in Bits 15..8, Blau in Bits 7..0.
/// Das Wort wird pro Pixel MSB-first übertragen; der 8-Bit-Linksshift
/// auf die Übertragungsbreite passiert erst an der Hardware-Grenze
/// (im RMT-Adapter), nicht hier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWord(u32);

impl PixelWord {
    /// Das Null-Wort: Pixel aus
    pub const OFF: Self = Self(0);

    /// Packt eine RGB-Farbe in die Grün-Rot-Blau Wire-Reihenfolge
    pub const fn pack(color: RGB8) -> Self {
        Self(((color.g as u32) << 16) | ((color.r as u32) << 8) | (color.b as u32))
    }

    /// Roher 24-Bit-Wert des Protokoll-Worts
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Entpackt das Wort zurück in eine RGB-Farbe
    ///
    /// Wird an der Adapter-Grenze gebraucht: der SmartLED-Adapter
    /// nimmt RGB8 entgegen und erledigt die GRB-Bitcodierung selbst.
    pub const fn to_rgb8(self) -> RGB8 {
        RGB8 {
            r: ((self.0 >> 8) & 0xFF) as u8,
            g: ((self.0 >> 16) & 0xFF) as u8,
            b: (self.0 & 0xFF) as u8,
        }
    }
}

/// Ein gerenderter Frame: ein Protokoll-Wort pro Matrix-Position,
/// in Glyphen-Indexreihenfolge (zeilenweise, links nach rechts)
pub type Frame = [PixelWord; PIXEL_COUNT];

/// Logische Taste - das Event trägt den Tag, welche Taste gefeuert hat
///
/// Tagged Dispatch statt Pin-Nummern: ein einzelner Handler matcht
/// auf diesen Tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Taste A: Zähler +1 (modulo 10)
    Increment,
    /// Taste B: Zähler -1 (modulo 10)
    Decrement,
}

/// Ein Flanken-Event einer Taste
///
/// Der Zeitstempel wird im Watcher-Kontext bei der Flanke genommen,
/// damit der Entprell-Filter gegen die echte Flankenzeit prüft und
/// nicht gegen die Verarbeitungszeit.
#[derive(Debug, Clone, Copy)]
pub struct ButtonEvent {
    pub button: Button,
    /// Monotoner Zeitstempel der Flanke in Mikrosekunden
    pub at_us: u64,
}

/// Geteilter Ziffern-Zähler, Wertebereich [0,9]
///
/// Das einzige geteilte Zustandsstück im System: der Input-Task
/// schreibt, der Display-Task liest. Ein einzelnes ausgerichtetes
/// Byte mit atomarer Sichtbarkeit - kein Lock nötig, da nur EIN
/// Kontext read-modify-write ausführt (Single-Writer).
pub struct DigitCounter(AtomicU8);

impl DigitCounter {
    /// Erstellt einen Zähler mit Startziffer 0
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Snapshot-Lese der aktuellen Ziffer
    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    /// Zähler +1, wrappt von 9 auf 0
    ///
    /// Nur vom Input-Task aufrufen (Single-Writer-Invariante).
    pub fn increment(&self) {
        let next = (self.0.load(Ordering::Relaxed) + 1) % DIGIT_COUNT;
        self.0.store(next, Ordering::Relaxed);
    }

    /// Zähler -1, wrappt von 0 auf 9
    ///
    /// Nur vom Input-Task aufrufen (Single-Writer-Invariante).
    pub fn decrement(&self) {
        let next = (self.0.load(Ordering::Relaxed) + DIGIT_COUNT - 1) % DIGIT_COUNT;
        self.0.store(next, Ordering::Relaxed);
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Button {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Button::Increment => defmt::write!(fmt, "Increment"),
            Button::Decrement => defmt::write!(fmt, "Decrement"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonEvent {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ButtonEvent {{ button: {}, at_us: {} }}",
            self.button,
            self.at_us
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
