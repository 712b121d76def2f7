//! Output verbosity mode.

/// Output verbosity mode.
///
/// Quiet keeps the data rows; everything decorative (headers, spinners,
/// hints, status chatter) is gated on the richer modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full pages plus per-stack detail (install commands, links).
    Verbose,
    /// Standard pages with headers and result summaries.
    #[default]
    Normal,
    /// Data rows only, without headers, spinners, or hints.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status output (headers, hints, summaries).
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode expands entries into full cards.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
