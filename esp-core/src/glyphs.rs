//! Glyphen- und Farbtabellen für die Ziffern 0-9
//!
//! Reine Daten, zur Build-Zeit festgelegt, unveränderlich für die
//! Prozess-Lebensdauer. Aufrufer übergeben nur gültige Ziffern [0,9]
//! (Vorbedingung; die Zähler-Invariante garantiert den Bereich).

use rgb::RGB8;

use crate::types::{MATRIX_SIDE, PIXEL_COUNT};

/// Leucht-Muster einer Ziffer über alle 25 Matrix-Positionen
///
/// Gespeichert als 5 Zeilen-Bitmasken: Bit 4 ist die linke Spalte,
/// Bit 0 die rechte. Index-Reihenfolge bei `is_lit` ist zeilenweise
/// von links nach rechts (row-major), passend zur Frame-Reihenfolge.
pub struct Glyph {
    rows: [u8; MATRIX_SIDE],
}

impl Glyph {
    const fn new(rows: [u8; MATRIX_SIDE]) -> Self {
        Self { rows }
    }

    /// Ist die Matrix-Position `index` (0..25, row-major) erleuchtet?
    pub const fn is_lit(&self, index: usize) -> bool {
        let row = index / MATRIX_SIDE;
        let col = index % MATRIX_SIDE;
        (self.rows[row] >> (MATRIX_SIDE - 1 - col)) & 1 == 1
    }

    /// Anzahl der erleuchteten Positionen
    pub fn lit_count(&self) -> usize {
        let mut count = 0;
        for i in 0..PIXEL_COUNT {
            if self.is_lit(i) {
                count += 1;
            }
        }
        count
    }
}

/// Glyphen-Tabelle: ein Muster pro Ziffer
///
/// Die Binär-Literale zeigen das Muster direkt (1 = Pixel an).
pub const GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::new([0b01110, 0b01010, 0b01010, 0b01010, 0b01110]),
    // 1
    Glyph::new([0b01110, 0b00100, 0b00100, 0b01100, 0b00100]),
    // 2
    Glyph::new([0b01110, 0b01000, 0b01110, 0b00010, 0b01110]),
    // 3
    Glyph::new([0b01110, 0b00010, 0b01110, 0b00010, 0b01110]),
    // 4
    Glyph::new([0b01000, 0b00010, 0b01110, 0b01010, 0b01010]),
    // 5
    Glyph::new([0b01110, 0b00010, 0b01110, 0b01000, 0b01110]),
    // 6
    Glyph::new([0b01110, 0b01010, 0b01110, 0b01000, 0b01110]),
    // 7
    Glyph::new([0b01000, 0b00010, 0b01000, 0b00010, 0b01110]),
    // 8
    Glyph::new([0b01110, 0b01010, 0b01110, 0b01010, 0b01110]),
    // 9
    Glyph::new([0b01110, 0b00010, 0b01110, 0b01010, 0b01110]),
];

/// Farbtabelle: eine RGB-Farbe pro Ziffer
pub const COLORS: [RGB8; 10] = [
    RGB8 { r: 5, g: 0, b: 0 }, // Rot für 0
    RGB8 { r: 0, g: 5, b: 0 }, // Grün für 1
    RGB8 { r: 0, g: 0, b: 5 }, // Blau für 2
    RGB8 { r: 5, g: 5, b: 0 }, // Gelb für 3
    RGB8 { r: 0, g: 5, b: 5 }, // Cyan für 4
    RGB8 { r: 5, g: 0, b: 5 }, // Magenta für 5
    RGB8 { r: 2, g: 0, b: 5 }, // Lila für 6
    RGB8 { r: 5, g: 2, b: 0 }, // Orange für 7
    RGB8 { r: 2, g: 0, b: 5 }, // Lila für 8
    RGB8 { r: 0, g: 2, b: 5 }, // Hellblau für 9
];

/// Liefert das Leucht-Muster für eine Ziffer in [0,9]
pub fn glyph(digit: u8) -> &'static Glyph {
    &GLYPHS[digit as usize]
}

/// Liefert die Farbe für eine Ziffer in [0,9]
pub fn color(digit: u8) -> RGB8 {
    COLORS[digit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_zero_is_ring() {
        // Ziffer 0: Rahmen in den Spalten 1-3, Mitte dunkel
        let zero = glyph(0);
        assert!(zero.is_lit(1)); // Zeile 0, Spalte 1
        assert!(zero.is_lit(2));
        assert!(zero.is_lit(3));
        assert!(!zero.is_lit(0)); // linke Randspalte bleibt dunkel
        assert!(!zero.is_lit(4));
        assert!(!zero.is_lit(7)); // Zeile 1, Spalte 2: Loch in der Mitte
        assert_eq!(zero.lit_count(), 12);
    }

    #[test]
    fn test_every_glyph_has_lit_pixels() {
        for digit in 0..10 {
            let lit = glyph(digit).lit_count();
            assert!(lit > 0, "Glyph {digit} ist leer");
            assert!(lit <= PIXEL_COUNT);
        }
    }

    #[test]
    fn test_outer_columns_always_dark() {
        // Alle Muster nutzen nur die inneren Spalten 1-3
        for digit in 0..10 {
            let g = glyph(digit);
            for row in 0..MATRIX_SIDE {
                assert!(!g.is_lit(row * MATRIX_SIDE));
                assert!(!g.is_lit(row * MATRIX_SIDE + MATRIX_SIDE - 1));
            }
        }
    }

    #[test]
    fn test_color_table() {
        assert_eq!(color(0), RGB8 { r: 5, g: 0, b: 0 });
        assert_eq!(color(1), RGB8 { r: 0, g: 5, b: 0 });
        assert_eq!(color(2), RGB8 { r: 0, g: 0, b: 5 });
        assert_eq!(color(9), RGB8 { r: 0, g: 2, b: 5 });
    }
}
