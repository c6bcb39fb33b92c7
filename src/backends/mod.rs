//! Display backends.
//!
//! Everything platform-specific sits behind `DisplayBackend`: one query to
//! read the current topology, one call to push a change to a single output.
//! The engine never sees a display server, only this trait, which keeps it
//! testable against the dummy backend.

use std::env;

use crate::error::{Error, Result};
use crate::source::DisplaySource;

pub mod dummy;
pub mod sway;
pub mod xorg;

/// Raw per-output state as the platform reports it, before the inventory
/// assigns source ids.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputState {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub scaling_percent: u32,
    pub active: bool,
}

/// The validated delta applied to one output. Unset fields are left
/// untouched on that output.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigChange {
    pub resolution: Option<(u32, u32)>,
    pub scaling_percent: Option<u32>,
}

pub trait DisplayBackend {
    /// Query the platform for the current set of outputs, in the platform's
    /// native enumeration order.
    fn query_outputs(&mut self) -> Result<Vec<OutputState>>;

    /// Push a configuration change to a single output.
    fn set_configuration(&mut self, source: &DisplaySource, change: &ConfigChange) -> Result<()>;
}

/// Look up a backend by the `--backend` flag value.
pub fn by_name(name: &str) -> Result<Box<dyn DisplayBackend>> {
    match name {
        "sway" => Ok(Box::new(sway::SwayBackend::new())),
        "xorg" => Ok(Box::new(xorg::XorgBackend::new())),
        _ => Err(Error::PlatformQuery(format!("unknown backend \"{}\"", name))),
    }
}

/// Pick a backend from the session environment: sway/wlroots sessions are
/// recognized by SWAYSOCK or WAYLAND_DISPLAY, X11 sessions by DISPLAY.
pub fn detect() -> Result<Box<dyn DisplayBackend>> {
    if env::var("SWAYSOCK").is_ok() || env::var("WAYLAND_DISPLAY").is_ok() {
        return Ok(Box::new(sway::SwayBackend::new()));
    }
    if env::var("DISPLAY").is_ok() {
        return Ok(Box::new(xorg::XorgBackend::new()));
    }
    Err(Error::PlatformQuery(
        "no supported display server detected (set --backend to override)".to_string(),
    ))
}
