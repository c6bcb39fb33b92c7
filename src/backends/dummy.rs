//! Dummy backend.
//!
//! This is purely for testing or debugging.
//! It keeps its outputs in memory, records every set call, and can be
//! scripted to reject calls for named outputs.

use log::debug;

use crate::error::{Error, Result};
use crate::source::DisplaySource;

use super::{ConfigChange, DisplayBackend, OutputState};

pub struct DummyBackend {
    outputs: Vec<OutputState>,
    reject: Vec<String>,
    /// Every accepted or rejected set call, in order: (output name, change).
    pub set_calls: Vec<(String, ConfigChange)>,
}

impl DummyBackend {
    pub fn new(outputs: Vec<OutputState>) -> DummyBackend {
        DummyBackend {
            outputs,
            reject: Vec::new(),
            set_calls: Vec::new(),
        }
    }

    /// Convenience constructor: `count` active 1920x1080 outputs at 100%.
    pub fn with_active_outputs(count: usize) -> DummyBackend {
        let outputs = (0..count)
            .map(|n| OutputState {
                name: format!("DUMMY-{}", n),
                width: 1920,
                height: 1080,
                scaling_percent: 100,
                active: true,
            })
            .collect();
        DummyBackend::new(outputs)
    }

    /// Script the backend to reject set calls for the named output.
    pub fn reject_output(mut self, name: &str) -> DummyBackend {
        self.reject.push(name.to_string());
        self
    }

    pub fn output(&self, name: &str) -> Option<&OutputState> {
        self.outputs.iter().find(|o| o.name == name)
    }
}

impl DisplayBackend for DummyBackend {
    fn query_outputs(&mut self) -> Result<Vec<OutputState>> {
        Ok(self.outputs.clone())
    }

    fn set_configuration(&mut self, source: &DisplaySource, change: &ConfigChange) -> Result<()> {
        self.set_calls.push((source.name.clone(), change.clone()));

        if self.reject.iter().any(|name| *name == source.name) {
            return Err(Error::PlatformSet(format!(
                "dummy backend rejected change for {}",
                source.name
            )));
        }

        let output = self
            .outputs
            .iter_mut()
            .find(|o| o.name == source.name)
            .ok_or(Error::UnknownSourceId(source.id))?;
        if let Some((width, height)) = change.resolution {
            output.width = width;
            output.height = height;
        }
        if let Some(scaling) = change.scaling_percent {
            output.scaling_percent = scaling;
        }
        debug!("dummy backend applied {:?} to {}", change, source.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_for(backend: &DummyBackend, id: u32, name: &str) -> DisplaySource {
        let output = backend.output(name).unwrap();
        DisplaySource {
            id,
            name: output.name.clone(),
            width: output.width,
            height: output.height,
            scaling_percent: output.scaling_percent,
            is_active: output.active,
        }
    }

    #[test]
    fn accepted_changes_mutate_state() -> Result<()> {
        let mut backend = DummyBackend::with_active_outputs(2);
        let source = source_for(&backend, 1, "DUMMY-1");

        backend.set_configuration(
            &source,
            &ConfigChange {
                resolution: Some((2560, 1440)),
                scaling_percent: None,
            },
        )?;

        let output = backend.output("DUMMY-1").unwrap();
        assert_eq!((output.width, output.height), (2560, 1440));
        // Scaling was not part of the change.
        assert_eq!(output.scaling_percent, 100);
        assert_eq!(backend.set_calls.len(), 1);
        Ok(())
    }

    #[test]
    fn rejected_changes_are_recorded_but_not_applied() {
        let mut backend = DummyBackend::with_active_outputs(1).reject_output("DUMMY-0");
        let source = source_for(&backend, 0, "DUMMY-0");

        let result = backend.set_configuration(
            &source,
            &ConfigChange {
                resolution: None,
                scaling_percent: Some(150),
            },
        );

        assert!(matches!(result, Err(Error::PlatformSet(_))));
        assert_eq!(backend.set_calls.len(), 1);
        assert_eq!(backend.output("DUMMY-0").unwrap().scaling_percent, 100);
    }
}
