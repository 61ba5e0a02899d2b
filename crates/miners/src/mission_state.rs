//! Maps the mission subsystem's view of a deposit to what the player sees.

use serde::{Deserialize, Serialize};

use crate::backend::MissionSystem;
use crate::deposits::{DepositId, MissionKind};

/// Logical extraction state of one deposit, derived fresh every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayAction {
    /// Not mined, nothing in flight.
    Idle,
    /// Mined, nothing in flight.
    MinedNoMission,
    /// A drill rig is on its way.
    Deploying,
    /// A drill rig is being brought back.
    Retrieving,
    /// A mission kind with no label yet.
    Unknown,
}

impl DisplayAction {
    pub fn resolve(is_auto_mined: bool, mission: Option<MissionKind>) -> Self {
        match mission {
            None if is_auto_mined => DisplayAction::MinedNoMission,
            None => DisplayAction::Idle,
            Some(MissionKind::DeployMiner) => DisplayAction::Deploying,
            Some(MissionKind::RetrieveMiner) => DisplayAction::Retrieving,
            Some(MissionKind::Other(_)) => DisplayAction::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayAction::Idle => "Send Miner",
            DisplayAction::MinedNoMission => "Retrieve Miner",
            DisplayAction::Deploying => "Sent Miner",
            DisplayAction::Retrieving => "Miner In Progress",
            DisplayAction::Unknown => "UNKNOWN",
        }
    }
}

/// Look up the deposit's mission and resolve its display state.
/// A missing record means "no mission", never an error.
pub fn resolve_mission_label<M: MissionSystem + ?Sized>(
    is_auto_mined: bool,
    deposit: DepositId,
    missions: &M,
) -> DisplayAction {
    DisplayAction::resolve(is_auto_mined, missions.mission_kind_for(deposit))
}
