//! # Configuration applier
//!
//! Pure decisions first, side effects last: `validate` and `resolve_targets`
//! never touch the platform, so a malformed request or an unknown id fails
//! before any display changes. The apply loop itself is sequential in
//! inventory order and collects one result per resolved target; a platform
//! rejection for one target never aborts the rest of the batch.

use log::{debug, warn};

use crate::backends::{ConfigChange, DisplayBackend};
use crate::error::{Error, Result};
use crate::request::{ChangeRequest, TargetSelector};
use crate::source::DisplaySource;

/// Outcome for one targeted source.
#[derive(Clone, Debug)]
pub struct ApplyResult {
    pub source_id: u32,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

/// Outcome of one apply invocation. `defaulted_to_all` is set when the
/// request carried no target selector and the scope was widened to all
/// active displays; the caller is expected to surface that.
#[derive(Clone, Debug)]
pub struct ApplyOutcome {
    pub results: Vec<ApplyResult>,
    pub defaulted_to_all: bool,
}

impl ApplyOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }
}

/// Resolve the request's target selector against an inventory snapshot.
///
/// Returns the targeted sources in inventory order plus whether the scope
/// was defaulted from "unspecified" to all active displays.
pub fn resolve_targets<'a>(
    request: &ChangeRequest,
    inventory: &'a [DisplaySource],
) -> Result<(Vec<&'a DisplaySource>, bool)> {
    match request.target {
        Some(TargetSelector::BySourceId(id)) => {
            let source = inventory
                .iter()
                .find(|source| source.id == id)
                .ok_or(Error::UnknownSourceId(id))?;
            Ok((vec![source], false))
        }
        Some(TargetSelector::All) => Ok((active_sources(inventory), false)),
        None => Ok((active_sources(inventory), true)),
    }
}

fn active_sources(inventory: &[DisplaySource]) -> Vec<&DisplaySource> {
    inventory.iter().filter(|source| source.is_active).collect()
}

/// Apply a validated change to every resolved target, sequentially.
pub fn apply(
    request: &ChangeRequest,
    inventory: &[DisplaySource],
    backend: &mut dyn DisplayBackend,
) -> Result<ApplyOutcome> {
    request.validate()?;

    let (targets, defaulted_to_all) = resolve_targets(request, inventory)?;
    if defaulted_to_all {
        warn!("neither --id nor --all given; applying to all active displays");
    }

    // Only the fields the request names; anything else stays untouched.
    let change = ConfigChange {
        resolution: request.width.zip(request.height),
        scaling_percent: request.scaling_percent,
    };

    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        debug!("applying {:?} to {}", change, target.name);
        let result = match backend.set_configuration(target, &change) {
            Ok(()) => ApplyResult {
                source_id: target.id,
                succeeded: true,
                error_detail: None,
            },
            Err(e) => {
                warn!("applying to {} failed: {}", target.name, e);
                ApplyResult {
                    source_id: target.id,
                    succeeded: false,
                    error_detail: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }

    Ok(ApplyOutcome {
        results,
        defaulted_to_all,
    })
}
