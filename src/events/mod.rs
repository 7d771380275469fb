//! Event handling for the application.
//!
//! Terminal input is polled with a fixed tick so the application wakes up
//! regularly even while the user is idle; the customers panel uses those
//! ticks to check its debounce deadline.

mod handler;

pub use handler::EventHandler;

use crossterm::event::KeyEvent;

/// An application-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// No terminal event arrived within the tick rate.
    Tick,
}
