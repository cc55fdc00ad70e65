// Matrix-Writer Implementierungen für den MatrixWriter Trait
//
// Der Trait selbst lebt in esp-core (hardwarefrei); hier stehen die
// ESP32-Implementierung und der Test-Mock.

use esp_core::{Frame, LedError, MatrixWriter, PIXEL_COUNT};

/// Buffer-Größe für die Matrix (Pixel * 3 Farben * 8 Bits + 1 Reset)
pub const MATRIX_BUFFER_SIZE: usize = PIXEL_COUNT * 24 + 1;

// ============================================================================
// Real Hardware Implementation (nur für ESP32-Target)
// ============================================================================

#[cfg(not(test))]
mod real_impl {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::rmt::Rmt;
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use smart_leds_trait::SmartLedsWrite;

    /// Real Hardware Matrix Writer
    ///
    /// Nutzt das ESP32 RMT Peripheral um die WS2812-Matrix anzusteuern.
    /// Der Adapter erledigt die GRB-Bitcodierung und das 800-kHz-Timing;
    /// der 8-Bit-Shift auf die Übertragungsbreite passiert dort.
    ///
    /// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
    /// und als Parameter übergeben statt im Constructor allokiert.
    pub struct RmtMatrixWriter<'a> {
        matrix: SmartLedsAdapter<'a, MATRIX_BUFFER_SIZE>,
    }

    impl<'a> RmtMatrixWriter<'a> {
        /// Erstellt einen neuen RmtMatrixWriter
        ///
        /// # Parameter
        /// - `gpio8`: GPIO8 Peripheral für die Matrix-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(25) Macro)
        pub fn new(
            gpio8: esp_hal::peripherals::GPIO8<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            buffer: &'a mut [esp_hal::rmt::PulseCode; MATRIX_BUFFER_SIZE],
        ) -> Self {
            // RMT initialisieren
            let rmt: Rmt<'a, Blocking> =
                Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

            // SmartLED Adapter erstellen
            let matrix = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

            Self { matrix }
        }
    }

    impl<'a> MatrixWriter for RmtMatrixWriter<'a> {
        fn write(&mut self, frame: &Frame) -> Result<(), LedError> {
            // Protokoll-Worte an der Adapter-Grenze zurück in RGB8 entpacken
            self.matrix
                .write(frame.iter().map(|word| word.to_rgb8()))
                .map_err(|_| LedError::WriteFailed)
        }
    }
}

#[cfg(not(test))]
pub use real_impl::RmtMatrixWriter;

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

#[cfg(test)]
pub struct MockMatrixWriter {
    /// Zuletzt geschriebener Frame (für Assertions in Tests)
    pub last_frame: Option<Frame>,
    /// Anzahl der write() Aufrufe
    pub write_count: usize,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
}

#[cfg(test)]
impl MockMatrixWriter {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            write_count: 0,
            fail_next_write: false,
        }
    }
}

#[cfg(test)]
impl MatrixWriter for MockMatrixWriter {
    fn write(&mut self, frame: &Frame) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_frame = Some(*frame);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use esp_core::PixelWord;
    use rgb::RGB8;

    #[test]
    fn test_mock_matrix_writer_write() {
        let mut mock = MockMatrixWriter::new();
        let frame = [PixelWord::pack(RGB8 { r: 1, g: 0, b: 0 }); PIXEL_COUNT];

        assert_eq!(mock.write_count, 0);
        assert!(mock.last_frame.is_none());

        mock.write(&frame).unwrap();

        assert_eq!(mock.write_count, 1);
        assert_eq!(mock.last_frame, Some(frame));
    }

    #[test]
    fn test_mock_matrix_writer_fail() {
        let mut mock = MockMatrixWriter::new();
        mock.fail_next_write = true;

        let frame = [PixelWord::OFF; PIXEL_COUNT];
        let result = mock.write(&frame);
        assert_eq!(result, Err(LedError::WriteFailed));
        assert_eq!(mock.write_count, 0);
        assert!(mock.last_frame.is_none());
    }
}
