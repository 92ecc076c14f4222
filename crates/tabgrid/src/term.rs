//! Terminal width detection.

use terminal_size::{terminal_size, Width};

/// Default view width when no terminal is attached and none is configured.
pub const DEFAULT_VIEW_WIDTH: usize = 80;

/// Source of the view-width budget, probed once at table construction.
/// Implement this to supply deterministic widths in tests.
pub trait WidthProbe {
    /// Terminal column count, or `None` when unavailable.
    fn columns(&self) -> Option<usize>;
}

/// Probe backed by the real terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TtyProbe;

impl WidthProbe for TtyProbe {
    fn columns(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}
