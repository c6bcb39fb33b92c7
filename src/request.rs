//! # Change requests
//!
//! We separate the raw flags the user typed from a validated request so that
//! a malformed invocation can never reach the platform. Validation lives
//! here rather than in the argument parser on purpose: the parser only has
//! to deliver values, the engine owns the contract.

use crate::error::{Error, Result};

/// Which display source(s) a `set` command applies to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TargetSelector {
    BySourceId(u32),
    All,
}

/// The user's desired mutation, built once per invocation.
///
/// `target == None` means neither `--id` nor `--all` was supplied; the
/// applier widens that to every active display and warns about it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeRequest {
    pub target: Option<TargetSelector>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scaling_percent: Option<u32>,
    pub scaling_only: bool,
}

impl ChangeRequest {
    /// Build a request from raw flag values.
    ///
    /// `--id` and `--all` are mutually exclusive; that rule is enforced
    /// here, not left to the parser.
    pub fn from_flags(
        id: Option<u32>,
        all: bool,
        width: Option<u32>,
        height: Option<u32>,
        scaling_percent: Option<u32>,
        scaling_only: bool,
    ) -> Result<ChangeRequest> {
        let target = match (id, all) {
            (Some(_), true) => {
                return Err(Error::InvalidRequest("--id and --all are mutually exclusive"))
            }
            (Some(id), false) => Some(TargetSelector::BySourceId(id)),
            (None, true) => Some(TargetSelector::All),
            (None, false) => None,
        };
        Ok(ChangeRequest {
            target,
            width,
            height,
            scaling_percent,
            scaling_only,
        })
    }

    pub fn wants_resolution(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Check the request against the engine contract. Runs before target
    /// resolution so a malformed request fails without touching any display.
    pub fn validate(&self) -> Result<()> {
        if self.scaling_only && self.wants_resolution() {
            return Err(Error::InvalidRequest("scaling-only with resolution"));
        }
        if self.wants_resolution() {
            match (self.width, self.height) {
                (Some(w), Some(h)) if w > 0 && h > 0 => {}
                _ => return Err(Error::InvalidRequest("incomplete resolution")),
            }
        }
        if let Some(scaling) = self.scaling_percent {
            if scaling == 0 {
                return Err(Error::InvalidRequest("invalid scaling value"));
            }
        }
        if !self.wants_resolution() && self.scaling_percent.is_none() {
            return Err(Error::InvalidRequest("empty change"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        width: Option<u32>,
        height: Option<u32>,
        scaling: Option<u32>,
        scaling_only: bool,
    ) -> ChangeRequest {
        ChangeRequest {
            target: Some(TargetSelector::All),
            width,
            height,
            scaling_percent: scaling,
            scaling_only,
        }
    }

    #[test]
    fn id_and_all_are_mutually_exclusive() {
        let result = ChangeRequest::from_flags(Some(1), true, None, None, Some(150), false);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn omitted_selector_becomes_none() -> Result<()> {
        let request = ChangeRequest::from_flags(None, false, None, None, Some(150), false)?;
        assert_eq!(request.target, None);

        let request = ChangeRequest::from_flags(Some(2), false, None, None, Some(150), false)?;
        assert_eq!(request.target, Some(TargetSelector::BySourceId(2)));
        Ok(())
    }

    #[test]
    fn scaling_only_rejects_resolution() {
        let result = request(Some(1920), Some(1080), Some(150), true).validate();
        assert!(matches!(result, Err(Error::InvalidRequest("scaling-only with resolution"))));

        // One lone dimension is still "with resolution".
        let result = request(Some(1920), None, Some(150), true).validate();
        assert!(matches!(result, Err(Error::InvalidRequest("scaling-only with resolution"))));
    }

    #[test]
    fn resolution_needs_both_dimensions_positive() {
        for (w, h) in [(Some(1920), None), (None, Some(1080)), (Some(0), Some(1080))] {
            let result = request(w, h, None, false).validate();
            assert!(matches!(result, Err(Error::InvalidRequest("incomplete resolution"))));
        }
        assert!(request(Some(1920), Some(1080), None, false).validate().is_ok());
    }

    #[test]
    fn zero_scaling_is_rejected() {
        let result = request(None, None, Some(0), false).validate();
        assert!(matches!(result, Err(Error::InvalidRequest("invalid scaling value"))));
    }

    #[test]
    fn empty_change_is_rejected() {
        let result = request(None, None, None, false).validate();
        assert!(matches!(result, Err(Error::InvalidRequest("empty change"))));

        let result = request(None, None, None, true).validate();
        assert!(matches!(result, Err(Error::InvalidRequest("empty change"))));
    }

    #[test]
    fn scaling_without_flag_is_valid() {
        assert!(request(None, None, Some(175), false).validate().is_ok());
        assert!(request(None, None, Some(175), true).validate().is_ok());
        assert!(request(Some(2560), Some(1440), Some(125), false).validate().is_ok());
    }
}
