//! Read-only records owned by the host game: deposits, resource types,
//! spatial objects and mission kinds.

use serde::{Deserialize, Serialize};

/// Dense index of a deposit in the host's deposit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepositId(pub u32);

/// Code used to look up a [`ResourceType`] in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceTypeCode(pub u16);

/// A body (planet, moon, asteroid) in the host universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceObjectId(pub u64);

/// A parent location (star system / sector) that space objects live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u64);

/// Icon reference, resolved to an asset by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A minable resource location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: DepositId,
    pub resource_type: ResourceTypeCode,
    /// Current auto-mine rate. A floating accumulator; may carry tiny residuals.
    pub auto_mine_rate: f32,
    /// Mined but not yet retrieved.
    pub unretrieved: f32,
    pub unretrieved_max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceType {
    /// Display name, already translated by the host.
    pub name: String,
    pub icon: IconId,
    /// Linear RGBA tint for the icon.
    pub tint: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObject {
    pub id: SpaceObjectId,
    pub parent: Option<LocationId>,
    /// Human-readable path of parents, e.g. `"Sol > Jupiter"`.
    pub parent_path: String,
}

/// Kind of an in-flight mission tracked by the host's mission subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    DeployMiner,
    RetrieveMiner,
    /// Any mission kind this crate has no label for (transport, salvage, ...).
    Other(u16),
}
