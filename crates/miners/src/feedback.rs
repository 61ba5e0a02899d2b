use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fire-and-forget cue played after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackCue {
    /// The mission subsystem accepted the order.
    Confirm,
    /// The order was rejected (capacity exceeded, already in progress, ...).
    Cancel,
}

impl FeedbackCue {
    pub fn for_accepted(accepted: bool) -> Self {
        if accepted {
            FeedbackCue::Confirm
        } else {
            FeedbackCue::Cancel
        }
    }
}

/// Sent when a cue should play. The host maps it to an audio/visual asset.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCueEvent {
    pub cue: FeedbackCue,
}
