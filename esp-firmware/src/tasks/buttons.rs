// Tasten-Tasks - Flanken-Erkennung und entprellte Zähler-Mutation
//
// Zwei Watcher-Tasks (einer pro Taste) warten interrupt-getrieben auf
// steigende Flanken und stempeln sie; ein einzelner Input-Task matcht
// auf den Button-Tag, entprellt und mutiert den geteilten Zähler.
use defmt::info;
use embassy_time::Instant;
use esp_core::{Button, ButtonEvent, DigitCounter, InputFilter};
use esp_hal::gpio::Input;

use crate::{ButtonEventReceiver, ButtonEventSender};

/// Button Watcher Task - wartet auf steigende Flanken EINER Taste
///
/// Läuft zweimal (pool_size = 2): einmal für Increment, einmal für
/// Decrement. Der Wait ist interrupt-getrieben; der Task tut zwischen
/// Flanken nichts. Der Zeitstempel wird direkt an der Flanke genommen,
/// nicht erst bei der Verarbeitung im Input-Task.
///
/// # Parameter
/// - `input`: GPIO Input der Taste (Pull-Up, Taste schaltet gegen GND)
/// - `button`: Tag, welche logische Taste dieser Watcher bedient
/// - `events`: Sender in den gemeinsamen Event-Channel
#[embassy_executor::task(pool_size = 2)]
pub async fn button_watcher_task(
    mut input: Input<'static>,
    button: Button,
    events: ButtonEventSender,
) {
    loop {
        input.wait_for_rising_edge().await;

        let event = ButtonEvent {
            button,
            at_us: Instant::now().as_micros(),
        };
        events.send(event).await;
    }
}

/// Input Task - der eine Handler für beide Tasten
///
/// Besitzt den InputFilter (beide Entprell-Zeitstempel) exklusiv und
/// ist der einzige Schreiber des Zählers. Akzeptierte Tastendrücke
/// werden geloggt; Preller werden still verworfen.
///
/// # Parameter
/// - `events`: Receiver des gemeinsamen Event-Channels
/// - `counter`: Handle auf den geteilten Ziffern-Zähler (schreiben)
#[embassy_executor::task]
pub async fn input_task(events: ButtonEventReceiver, counter: &'static DigitCounter) {
    let mut filter = InputFilter::new();

    loop {
        let event = events.receive().await;

        if filter.handle(event, counter) {
            info!("Button {} accepted -> digit {}", event.button, counter.get());
        }
        // Verworfene Flanken: weder gemeldet noch geloggt
    }
}
