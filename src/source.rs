//! # Display sources
//!
//! A `DisplaySource` is a read-only snapshot of one display output as the
//! platform reported it. Snapshots are rebuilt from scratch on every
//! invocation; the `id` is only meaningful against the snapshot it came from.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DisplaySource {
    /// Assigned in enumeration order, unique within one snapshot.
    /// Not stable across runs or topology changes.
    pub id: u32,
    /// Platform output name, e.g. `eDP-1`. Also how the backends address
    /// the output when applying changes.
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// DPI scaling percentage, 100 = unscaled.
    pub scaling_percent: u32,
    /// Inactive outputs are listed but skipped by `--all`.
    pub is_active: bool,
}

impl fmt::Display for DisplaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Example: [id:0] eDP-1 — 2560x1440 @ 150%
        write!(
            f,
            "[id:{}] {} — {}x{} @ {}%",
            self.id, self.name, self.width, self.height, self.scaling_percent
        )?;
        if !self.is_active {
            write!(f, " (inactive)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_row_rendering() {
        let source = DisplaySource {
            id: 3,
            name: "DP-2".into(),
            width: 1920,
            height: 1080,
            scaling_percent: 125,
            is_active: true,
        };
        assert_eq!(source.to_string(), "[id:3] DP-2 — 1920x1080 @ 125%");
    }

    #[test]
    fn inactive_row_is_marked() {
        let source = DisplaySource {
            id: 1,
            name: "HDMI-A-1".into(),
            width: 3840,
            height: 2160,
            scaling_percent: 100,
            is_active: false,
        };
        assert!(source.to_string().ends_with("(inactive)"));
    }
}
