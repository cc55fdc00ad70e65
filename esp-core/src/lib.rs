//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Glyphen- und Farbtabellen, den Pixel-Renderer,
//! den Entprell-Filter und den geteilten Ziffern-Zähler.

#![no_std]

pub mod glyphs;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use glyphs::{Glyph, color, glyph};
pub use logic::{DEBOUNCE_WINDOW_US, DebounceFilter, InputFilter, render_frame, scale_brightness};
pub use traits::{LedError, MatrixWriter};
pub use types::{Button, ButtonEvent, DigitCounter, Frame, PIXEL_COUNT, PixelWord};
