//! Events exchanged with the host: refresh/click requests in, navigation and
//! surface requests out. Cues live in [`crate::feedback`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::deposits::{DepositId, IconId, SpaceObjectId};
use crate::presentation::{ItemAction, Surface};

/// Ask for both listings to be rebuilt from current host state.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshMinersEvent;

/// The player clicked something; `action` is the one bound to it.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemClickEvent {
    pub action: ItemAction,
}

impl ItemClickEvent {
    pub fn new(action: ItemAction) -> Self {
        Self { action }
    }
}

/// Center the host's map view on a body.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusObjectEvent {
    pub deposit: DepositId,
    pub object: SpaceObjectId,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ShowPopupEvent {
    pub icon: IconId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceRequest {
    Open(Surface),
    Close(Surface),
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRequestEvent(pub SurfaceRequest);
