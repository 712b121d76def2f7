//! Version-change classification for the detail view.

/// Magnitude of the change between a stack's previous and latest version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Classify the step from `previous` to `latest`.
    ///
    /// Components are compared in order: a larger major wins, then minor,
    /// then patch. Missing or non-numeric components read as zero. Returns
    /// `None` when nothing increased.
    pub fn between(latest: &str, previous: &str) -> Option<VersionBump> {
        let latest = parse_components(latest);
        let previous = parse_components(previous);

        if latest[0] > previous[0] {
            return Some(Self::Major);
        }
        if latest[1] > previous[1] {
            return Some(Self::Minor);
        }
        if latest[2] > previous[2] {
            return Some(Self::Patch);
        }
        None
    }

    /// Status line label, e.g. `major update`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Major => "major update",
            Self::Minor => "minor update",
            Self::Patch => "patch update",
        }
    }
}

/// First three dot-separated components, zero-filled.
fn parse_components(version: &str) -> [u64; 3] {
    let mut components = [0u64; 3];
    for (slot, part) in components
        .iter_mut()
        .zip(version.trim_start_matches('v').split('.'))
    {
        *slot = part.parse().unwrap_or(0);
    }
    components
}
