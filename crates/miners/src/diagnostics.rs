// ---------------------------------------------------------------------------
// Click failures: unexpected host state met while handling a click
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::*;

use crate::backend::MiningBackend;
use crate::deposits::{DepositId, LocationId, SpaceObjectId};
use crate::presentation::{ItemAction, ItemTable};

/// Host state that went missing between building a listing and clicking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickFailure {
    /// The deposit is gone from the deposit table.
    DepositVanished(DepositId),
    /// The deposit is still there but its body is not in the universe.
    ObjectVanished(DepositId),
}

impl fmt::Display for ClickFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickFailure::DepositVanished(id) => {
                write!(f, "deposit {} is no longer in the deposit table", id.0)
            }
            ClickFailure::ObjectVanished(id) => {
                write!(f, "deposit {} has no body in the universe", id.0)
            }
        }
    }
}

impl std::error::Error for ClickFailure {}

/// Everything worth knowing about the world when a click fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickSnapshot {
    pub generation: u64,
    pub player_location: Option<LocationId>,
    pub action: ItemAction,
    pub deposit: Option<DepositId>,
    pub resource_type: Option<String>,
    pub object: Option<SpaceObjectId>,
}

impl ClickSnapshot {
    pub fn capture<B: MiningBackend + ?Sized>(
        backend: &B,
        table: &ItemTable,
        action: &ItemAction,
    ) -> Self {
        let deposit = action_deposit(action);
        let resource_type = deposit
            .and_then(|id| backend.try_get_deposit(id.0))
            .map(|d| backend.resource_type(d.resource_type).name.clone());
        let object = deposit.and_then(|id| backend.find(id)).map(|o| o.id);
        Self {
            generation: table.generation(),
            player_location: backend.player_location(),
            action: action.clone(),
            deposit,
            resource_type,
            object,
        }
    }
}

fn action_deposit(action: &ItemAction) -> Option<DepositId> {
    match action {
        ItemAction::Deploy(target) | ItemAction::Retrieve(target) => Some(target.handle.deposit),
        ItemAction::Focus { deposit, .. } => Some(*deposit),
        ItemAction::ShowPopup { .. }
        | ItemAction::OpenSurface(_)
        | ItemAction::CloseSurface(_) => None,
    }
}

/// Log a failed click with its snapshot. The click itself is dropped.
pub fn log_click_failure(failure: &ClickFailure, snapshot: &ClickSnapshot) {
    error!(
        "Failed when clicking miners item: {}. Pass: {}. Player location: {:?}. Action: {:?}. Deposit: {:?}. Resource: {:?}. Body: {:?}",
        failure,
        snapshot.generation,
        snapshot.player_location,
        snapshot.action,
        snapshot.deposit,
        snapshot.resource_type,
        snapshot.object
    );
}
