use serde::{Deserialize, Serialize};

use crate::deposits::{DepositId, SpaceObjectId};
use crate::feedback::FeedbackCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchVerb {
    Deploy,
    Retrieve,
}

/// What became of one dispatch request. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Accepted,
    Rejected,
    /// The target's item is not in the current pass; nothing was sent.
    StaleTarget,
}

impl DispatchOutcome {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            DispatchOutcome::Accepted
        } else {
            DispatchOutcome::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        self == DispatchOutcome::Accepted
    }

    /// Cue to play, if any. Stale targets stay silent.
    pub fn cue(self) -> Option<FeedbackCue> {
        match self {
            DispatchOutcome::StaleTarget => None,
            outcome => Some(FeedbackCue::for_accepted(outcome.is_accepted())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub verb: DispatchVerb,
    pub deposit: DepositId,
    pub object: SpaceObjectId,
    pub outcome: DispatchOutcome,
}
