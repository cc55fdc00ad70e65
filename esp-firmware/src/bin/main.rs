// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use esp_ziffernanzeige::tasks::{
    button_watcher_task, display_task, input_task, status_blink_task,
};
use esp_ziffernanzeige::{Button, ButtonEventChannel, DigitCounter};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Geteilter Ziffern-Zähler: Input-Task schreibt, Display-Task liest.
    // Explizites Handle statt globaler Variable - wird beiden Tasks
    // bei der Initialisierung mitgegeben.
    static COUNTER: static_cell::StaticCell<DigitCounter> = static_cell::StaticCell::new();
    let counter = &*COUNTER.init(DigitCounter::new());

    // Event-Channel erstellen (Watcher-Tasks → Input-Task)
    static BUTTON_EVENTS: static_cell::StaticCell<ButtonEventChannel> =
        static_cell::StaticCell::new();
    let button_events = BUTTON_EVENTS.init(ButtonEventChannel::new());

    // Tasten-Eingänge: Pull-Up, Taste schaltet gegen GND,
    // Erkennung auf der steigenden Flanke
    let input_config = InputConfig::default().with_pull(Pull::Up);
    let btn_increment = Input::new(peripherals.GPIO4, input_config);
    let btn_decrement = Input::new(peripherals.GPIO5, input_config);

    // Status-LED: startet aus
    let status_led = Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default());

    // Spawn Display Task (liest den Zähler, rendert die Matrix)
    spawner
        .spawn(display_task(peripherals.GPIO8, peripherals.RMT, counter))
        .unwrap();

    // Spawn Tasten-Watcher (einer pro Taste, gleicher Task-Pool)
    spawner
        .spawn(button_watcher_task(
            btn_increment,
            Button::Increment,
            button_events.sender(),
        ))
        .unwrap();
    spawner
        .spawn(button_watcher_task(
            btn_decrement,
            Button::Decrement,
            button_events.sender(),
        ))
        .unwrap();

    // Spawn Input Task (der eine Handler, entprellt und mutiert den Zähler)
    spawner
        .spawn(input_task(button_events.receiver(), counter))
        .unwrap();

    // Spawn Status Blinker (vollständig isoliert)
    spawner.spawn(status_blink_task(status_led)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
