use std::process::Command;

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::source::DisplaySource;

use super::{ConfigChange, DisplayBackend, OutputState};

/// Backend for sway, driven through `swaymsg`.
pub struct SwayBackend {}

impl SwayBackend {
    pub fn new() -> SwayBackend {
        SwayBackend {}
    }

    fn run_output_command(&self, name: &str, args: &[String]) -> Result<()> {
        let output = Command::new("swaymsg")
            .arg("output")
            .arg(name)
            .args(args)
            .output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::PlatformSet(format!(
                "swaymsg output {} {} failed: {}",
                name,
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

impl DisplayBackend for SwayBackend {
    fn query_outputs(&mut self) -> Result<Vec<OutputState>> {
        let output = Command::new("swaymsg")
            .arg("-t")
            .arg("get_outputs")
            .arg("--raw")
            .output()
            .map_err(|e| Error::PlatformQuery(format!("failed to run swaymsg: {}", e)))?;
        if !output.status.success() {
            return Err(Error::PlatformQuery(format!(
                "swaymsg get_outputs failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let deserialized: Vec<Value> = serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::PlatformQuery(format!("unparseable swaymsg JSON output: {}", e)))?;

        let mut outputs = Vec::new();
        for entry in deserialized {
            let name = match entry["name"].as_str() {
                Some(name) => name.to_string(),
                None => {
                    return Err(Error::PlatformQuery(
                        "swaymsg output entry without a name".to_string(),
                    ))
                }
            };
            let active = entry["active"].as_bool().unwrap_or(false);
            // Inactive outputs have no current_mode; fall back to the rect.
            let (width, height) = match &entry["current_mode"] {
                Value::Object(mode) => (
                    mode["width"].as_u64().unwrap_or(0) as u32,
                    mode["height"].as_u64().unwrap_or(0) as u32,
                ),
                _ => (
                    entry["rect"]["width"].as_u64().unwrap_or(0) as u32,
                    entry["rect"]["height"].as_u64().unwrap_or(0) as u32,
                ),
            };
            let scaling_percent = (entry["scale"].as_f64().unwrap_or(1.0) * 100.0).round() as u32;
            debug!("swaymsg output {}: {}x{} @ {}%", name, width, height, scaling_percent);
            outputs.push(OutputState {
                name,
                width,
                height,
                scaling_percent,
                active,
            });
        }
        Ok(outputs)
    }

    fn set_configuration(&mut self, source: &DisplaySource, change: &ConfigChange) -> Result<()> {
        if let Some((width, height)) = change.resolution {
            self.run_output_command(
                &source.name,
                &["mode".to_string(), format!("{}x{}", width, height)],
            )?;
        }
        if let Some(scaling) = change.scaling_percent {
            self.run_output_command(
                &source.name,
                &["scale".to_string(), format!("{}", f64::from(scaling) / 100.0)],
            )?;
        }
        Ok(())
    }
}
