//! # Display inventory
//!
//! One query per invocation. The backend's native enumeration order is
//! preserved so the ids printed by `list` are the ids `set --id` resolves
//! against, and ids are assigned in that order, so they are unique within
//! the snapshot.

use log::{debug, warn};

use crate::backends::DisplayBackend;
use crate::error::Result;
use crate::source::DisplaySource;

pub fn enumerate(backend: &mut dyn DisplayBackend) -> Result<Vec<DisplaySource>> {
    let outputs = backend.query_outputs()?;
    if outputs.is_empty() {
        // A successful query with nothing in it is not the same as a failed
        // query; keep it non-fatal but never silent.
        warn!("platform reported zero display sources");
    }

    let sources = outputs
        .into_iter()
        .enumerate()
        .map(|(index, output)| DisplaySource {
            id: index as u32,
            name: output.name,
            width: output.width,
            height: output.height,
            scaling_percent: output.scaling_percent,
            is_active: output.active,
        })
        .collect::<Vec<_>>();
    debug!("enumerated {} display source(s)", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::dummy::DummyBackend;
    use crate::backends::OutputState;

    #[test]
    fn ids_follow_enumeration_order() -> Result<()> {
        let mut backend = DummyBackend::with_active_outputs(3);
        let sources = enumerate(&mut backend)?;

        assert_eq!(sources.len(), 3);
        for (index, source) in sources.iter().enumerate() {
            assert_eq!(source.id, index as u32);
            assert_eq!(source.name, format!("DUMMY-{}", index));
        }
        Ok(())
    }

    #[test]
    fn inactive_outputs_are_still_listed() -> Result<()> {
        let mut backend = DummyBackend::new(vec![
            OutputState {
                name: "DUMMY-0".into(),
                width: 1920,
                height: 1080,
                scaling_percent: 100,
                active: true,
            },
            OutputState {
                name: "DUMMY-1".into(),
                width: 1280,
                height: 720,
                scaling_percent: 100,
                active: false,
            },
        ]);

        let sources = enumerate(&mut backend)?;
        assert_eq!(sources.len(), 2);
        assert!(!sources[1].is_active);
        Ok(())
    }

    #[test]
    fn empty_topology_is_not_an_error() -> Result<()> {
        let mut backend = DummyBackend::new(vec![]);
        assert!(enumerate(&mut backend)?.is_empty());
        Ok(())
    }
}
