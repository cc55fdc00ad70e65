//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::glyphs::Glyph;
use crate::types::{Button, ButtonEvent, DigitCounter, Frame, PIXEL_COUNT, PixelWord};

/// Helligkeits-Dämpfung in Prozent
///
/// Begrenzt Helligkeit und Stromaufnahme der Matrix.
pub const BRIGHTNESS_PERCENT: u16 = 20;

/// Entprell-Fenster in Mikrosekunden
///
/// Mindestabstand zweier Flanken derselben Taste, damit beide als
/// eigenständige Tastendrücke gelten.
pub const DEBOUNCE_WINDOW_US: u64 = 30_000;

/// Skaliert jeden Farbkanal auf 20% des Eingangswerts
///
/// Integer-Trunkierung: `c * 20 / 100`.
/// Pur und damit idempotent bei gleichen Eingaben.
pub fn scale_brightness(color: RGB8) -> RGB8 {
    RGB8 {
        r: (u16::from(color.r) * BRIGHTNESS_PERCENT / 100) as u8,
        g: (u16::from(color.g) * BRIGHTNESS_PERCENT / 100) as u8,
        b: (u16::from(color.b) * BRIGHTNESS_PERCENT / 100) as u8,
    }
}

/// Rendert eine Glyphe mit einer Farbe in einen Frame
///
/// Wendet die Helligkeits-Dämpfung an, packt EIN Protokoll-Wort und
/// setzt es an jeder erleuchteten Position; dunkle Positionen bekommen
/// das Null-Wort (LED aus). Reihenfolge ist die Glyphen-Indexreihenfolge
/// (zeilenweise, links nach rechts).
pub fn render_frame(glyph: &Glyph, color: RGB8) -> Frame {
    let lit = PixelWord::pack(scale_brightness(color));

    let mut frame = [PixelWord::OFF; PIXEL_COUNT];
    for (index, word) in frame.iter_mut().enumerate() {
        if glyph.is_lit(index) {
            *word = lit;
        }
    }
    frame
}

/// Zeitstempel-basierter Entprell-Filter für EINE Taste
///
/// Kein echter Zustandsautomat: eine Flanke wird akzeptiert, wenn seit
/// der letzten akzeptierten Flanke mehr als das Fenster vergangen ist,
/// sonst verworfen. Der "Zustand" ist nur der rollende Zeitstempel.
pub struct DebounceFilter {
    last_accepted_us: u64,
}

impl DebounceFilter {
    pub const fn new() -> Self {
        Self { last_accepted_us: 0 }
    }

    /// Prüft eine Flanke zum Zeitpunkt `now_us` (monoton, Mikrosekunden)
    ///
    /// Akzeptiert (und merkt sich den Zeitstempel), wenn die Flanke
    /// außerhalb des Entprell-Fensters liegt; verwirft sonst still,
    /// ohne den gemerkten Zeitstempel anzufassen.
    pub fn accept(&mut self, now_us: u64) -> bool {
        if now_us - self.last_accepted_us > DEBOUNCE_WINDOW_US {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Eingabe-Filter für beide Tasten
///
/// Ein Handler für alle Tasten-Events: matcht auf den Button-Tag,
/// entprellt gegen den Zeitstempel DIESER Taste und mutiert bei
/// akzeptierter Flanke den geteilten Zähler. Die Filter sind
/// unabhängig - nahezu gleichzeitige Flanken auf beiden Tasten
/// dürfen beide innerhalb desselben Fensters durchkommen.
pub struct InputFilter {
    increment: DebounceFilter,
    decrement: DebounceFilter,
}

impl InputFilter {
    pub const fn new() -> Self {
        Self {
            increment: DebounceFilter::new(),
            decrement: DebounceFilter::new(),
        }
    }

    /// Verarbeitet ein Tasten-Event; liefert true wenn akzeptiert
    pub fn handle(&mut self, event: ButtonEvent, counter: &DigitCounter) -> bool {
        let filter = match event.button {
            Button::Increment => &mut self.increment,
            Button::Decrement => &mut self.decrement,
        };

        if !filter.accept(event.at_us) {
            return false; // Preller: still verwerfen
        }

        match event.button {
            Button::Increment => counter.increment(),
            Button::Decrement => counter.decrement(),
        }
        true
    }
}

impl Default for InputFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::glyph;

    #[test]
    fn test_scale_brightness_truncates() {
        let scaled = scale_brightness(RGB8 { r: 5, g: 4, b: 255 });
        // 5*20/100 = 1, 4*20/100 = 0, 255*20/100 = 51
        assert_eq!(scaled, RGB8 { r: 1, g: 0, b: 51 });
    }

    #[test]
    fn test_scale_brightness_zero_stays_zero() {
        let scaled = scale_brightness(RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(scaled, RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_render_frame_lit_and_off_words() {
        let frame = render_frame(glyph(0), RGB8 { r: 5, g: 0, b: 0 });
        let expected = PixelWord::pack(RGB8 { r: 1, g: 0, b: 0 });

        for (index, word) in frame.iter().enumerate() {
            if glyph(0).is_lit(index) {
                assert_eq!(*word, expected, "Position {index} muss leuchten");
            } else {
                assert_eq!(*word, PixelWord::OFF, "Position {index} muss aus sein");
            }
        }
    }

    #[test]
    fn test_render_frame_idempotent() {
        let a = render_frame(glyph(7), RGB8 { r: 5, g: 2, b: 0 });
        let b = render_frame(glyph(7), RGB8 { r: 5, g: 2, b: 0 });
        assert_eq!(a, b);
    }

    #[test]
    fn test_debounce_rejects_within_window() {
        let mut filter = DebounceFilter::new();
        assert!(filter.accept(100_000));
        assert!(!filter.accept(100_000 + DEBOUNCE_WINDOW_US)); // exakt am Rand: verworfen
        assert!(!filter.accept(129_999));
    }

    #[test]
    fn test_debounce_accepts_after_window() {
        let mut filter = DebounceFilter::new();
        assert!(filter.accept(100_000));
        assert!(filter.accept(100_000 + DEBOUNCE_WINDOW_US + 1));
    }

    #[test]
    fn test_debounce_rejected_edge_keeps_timestamp() {
        let mut filter = DebounceFilter::new();
        assert!(filter.accept(100_000));
        assert!(!filter.accept(120_000));
        // Das Fenster zählt weiter ab der AKZEPTIERTEN Flanke
        assert!(filter.accept(130_001));
    }

    #[test]
    fn test_input_filter_buttons_are_independent() {
        let mut filter = InputFilter::new();
        let counter = DigitCounter::new();

        // Beide Tasten innerhalb desselben Fensters: beide akzeptiert
        let inc = ButtonEvent {
            button: Button::Increment,
            at_us: 100_000,
        };
        let dec = ButtonEvent {
            button: Button::Decrement,
            at_us: 101_000,
        };
        assert!(filter.handle(inc, &counter));
        assert!(filter.handle(dec, &counter));
        assert_eq!(counter.get(), 0); // +1 dann -1
    }

    #[test]
    fn test_input_filter_rejected_leaves_counter() {
        let mut filter = InputFilter::new();
        let counter = DigitCounter::new();

        let press = ButtonEvent {
            button: Button::Increment,
            at_us: 100_000,
        };
        let bounce = ButtonEvent {
            button: Button::Increment,
            at_us: 110_000,
        };
        assert!(filter.handle(press, &counter));
        assert!(!filter.handle(bounce, &counter));
        assert_eq!(counter.get(), 1);
    }
}
