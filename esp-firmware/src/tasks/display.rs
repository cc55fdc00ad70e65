// Display Task - Rendert die aktuelle Ziffer auf die WS2812-Matrix
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_core::{DigitCounter, MatrixWriter, color, glyph, render_frame};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{REFRESH_INTERVAL_MS, RMT_CLOCK_MHZ};
use crate::hal::RmtMatrixWriter;

/// Display Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Die Hauptschleife des Systems:
/// 1. Zähler lesen (ein atomarer Snapshot, kein Lock)
/// 2. Glyphe und Farbe für die Ziffer nachschlagen
/// 3. Frame rendern und an die Matrix schreiben
/// 4. 100ms schlafen (kooperativer Yield-Punkt)
///
/// Die Schleife ist total und endet nie; Schreibfehler werden geloggt
/// und der nächste Durchlauf versucht es erneut.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: MatrixWriter` ermöglicht:
/// - Real Hardware (RmtMatrixWriter) im Production-Code
/// - Mock Implementation (MockMatrixWriter) in Tests
pub async fn display_logic<W: MatrixWriter>(mut matrix: W, counter: &'static DigitCounter) {
    let mut last_digit: Option<u8> = None;

    loop {
        // Snapshot des geteilten Zählers (Single-Word, atomare Sichtbarkeit)
        let digit = counter.get();

        if last_digit != Some(digit) {
            info!("Displaying digit {}", digit);
            last_digit = Some(digit);
        }

        let frame = render_frame(glyph(digit), color(digit));

        // Frame an die Matrix senden (via Trait - Hardware oder Mock)
        if let Err(_e) = matrix.write(&frame) {
            error!("Failed to write LED matrix");
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
    }
}

/// Display Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `display_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Matrix-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `counter`: Handle auf den geteilten Ziffern-Zähler (nur lesen)
#[embassy_executor::task]
pub async fn display_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    counter: &'static DigitCounter,
) {
    // Buffer für SmartLED Daten erstellen (25 LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(25);

    // Hardware initialisieren: RmtMatrixWriter kapselt RMT + SmartLED
    let matrix = RmtMatrixWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    // Business Logic aufrufen (testbar!)
    display_logic(matrix, counter).await;
}
