// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Tasten-Watcher und
// Input-Task kommunizieren über einen Embassy Channel; der Zähler
// selbst ist ein atomares Byte (Input-Task schreibt, Display-Task
// liest). Der Status-Blinker teilt sich mit niemandem etwas.

pub mod buttons;
pub mod display;
pub mod status_blink;

// Re-export Tasks für einfachen Import
pub use buttons::{button_watcher_task, input_task};
pub use display::display_task;
pub use status_blink::status_blink_task;
