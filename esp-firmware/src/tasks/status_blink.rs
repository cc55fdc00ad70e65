// Status Blink Task - Lässt die rote Status-LED dauerhaft blinken
//
// Vollständig entkoppelt vom Rest des Systems: kein Channel, kein
// geteilter Zustand, nur der exklusiv besessene Ausgangspin. Läuft
// als eigener Task mit unabhängigem Fortschritt auf dem Executor.
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;

use crate::config::BLINK_INTERVAL_MS;

/// Status Blink Task - an 100ms, aus 100ms, für immer
///
/// # Parameter
/// - `led`: Ausgangspin der Status-LED (exklusiv besessen)
#[embassy_executor::task]
pub async fn status_blink_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(BLINK_INTERVAL_MS)).await;
        led.set_low();
        Timer::after(Duration::from_millis(BLINK_INTERVAL_MS)).await;
    }
}
