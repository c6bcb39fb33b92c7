use std::process::Command;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::source::DisplaySource;

use super::{ConfigChange, DisplayBackend, OutputState};

lazy_static! {
    // "eDP-1 connected primary 2560x1440+0+0 (...)"; a connected output
    // without a current mode has no geometry field.
    static ref XRANDR_CONNECTED: Regex =
        Regex::new(r"(?m)^(\S+) connected (?:primary )?(?:(\d+)x(\d+)\+\d+\+\d+)?").unwrap();
}

/// Backend for X11, driven through `xrandr`.
///
/// xrandr does not expose a DPI scaling percentage, so queried outputs
/// report 100%. A scaling change is still applied, as an output transform
/// via `--scale`.
pub struct XorgBackend {}

impl XorgBackend {
    pub fn new() -> XorgBackend {
        XorgBackend {}
    }
}

impl DisplayBackend for XorgBackend {
    fn query_outputs(&mut self) -> Result<Vec<OutputState>> {
        let output = Command::new("xrandr")
            .arg("--query")
            .output()
            .map_err(|e| Error::PlatformQuery(format!("failed to run xrandr: {}", e)))?;
        if !output.status.success() {
            return Err(Error::PlatformQuery(format!(
                "xrandr --query failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        let raw_xrandr = String::from_utf8_lossy(&output.stdout).to_string();

        let mut outputs = Vec::new();
        for cap in XRANDR_CONNECTED.captures_iter(&raw_xrandr) {
            let name = String::from(&cap[1]);
            let geometry = cap.get(2).zip(cap.get(3)).map(|(w, h)| {
                (
                    w.as_str().parse::<u32>().unwrap_or(0),
                    h.as_str().parse::<u32>().unwrap_or(0),
                )
            });
            let (width, height) = geometry.unwrap_or((0, 0));
            debug!("xrandr output {}: {}x{}", name, width, height);
            outputs.push(OutputState {
                name,
                width,
                height,
                scaling_percent: 100,
                active: geometry.is_some(),
            });
        }
        Ok(outputs)
    }

    fn set_configuration(&mut self, source: &DisplaySource, change: &ConfigChange) -> Result<()> {
        let mut args = vec!["--output".to_string(), source.name.clone()];
        if let Some((width, height)) = change.resolution {
            args.push("--mode".to_string());
            args.push(format!("{}x{}", width, height));
        }
        if let Some(scaling) = change.scaling_percent {
            let factor = f64::from(scaling) / 100.0;
            args.push("--scale".to_string());
            args.push(format!("{}x{}", factor, factor));
        }

        let output = Command::new("xrandr").args(&args).output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::PlatformSet(format!(
                "xrandr {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_line_parsing() {
        let raw = "\
Screen 0: minimum 320 x 200, current 2560 x 1440, maximum 16384 x 16384
eDP-1 connected primary 2560x1440+0+0 (normal left inverted right x axis y axis) 309mm x 174mm
DP-1 connected (normal left inverted right x axis y axis)
HDMI-1 disconnected (normal left inverted right x axis y axis)
";
        let caps: Vec<_> = XRANDR_CONNECTED.captures_iter(raw).collect();
        assert_eq!(caps.len(), 2);
        assert_eq!(&caps[0][1], "eDP-1");
        assert_eq!(&caps[0][2], "2560");
        assert_eq!(&caps[0][3], "1440");
        assert_eq!(&caps[1][1], "DP-1");
        assert!(caps[1].get(2).is_none());
    }
}
