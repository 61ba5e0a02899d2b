//! Narrow interfaces onto the host game.
//!
//! The miners core never owns game state. Every refresh reads it back through
//! these traits; a host implements all of them on one type and inserts it as
//! [`MiningBackendRes`].

use bevy::prelude::*;

use crate::deposits::{
    Deposit, DepositId, LocationId, MissionKind, ResourceType, ResourceTypeCode, SpaceObject,
    SpaceObjectId,
};

pub trait DepositTable {
    /// Deposit at `index`, or `None` for a gap in the table.
    fn try_get_deposit(&self, index: u32) -> Option<Deposit>;

    /// One past the highest index ever handed out.
    fn max_deposit_index(&self) -> u32;

    /// Amount mined per day, as shown next to the deposit name.
    fn mining_rate(&self, deposit: &Deposit) -> f32 {
        deposit.auto_mine_rate
    }
}

pub trait ResourceTypeRegistry {
    /// Total for every code that appears on a live deposit.
    fn resource_type(&self, code: ResourceTypeCode) -> &ResourceType;
}

pub trait MissionSystem {
    fn mission_kind_for(&self, deposit: DepositId) -> Option<MissionKind>;

    /// Returns whether the order was accepted.
    fn try_order_deployment_to(&mut self, target: SpaceObjectId) -> bool;

    /// Returns whether the order was accepted.
    fn try_order_retrieval_from(&mut self, target: SpaceObjectId) -> bool;
}

pub trait SpatialDirectory {
    /// The body a deposit sits on.
    fn find(&self, deposit: DepositId) -> Option<SpaceObject>;

    /// Location the player is currently viewing.
    fn player_location(&self) -> Option<LocationId>;
}

pub trait CapabilityGate {
    fn is_unlocked(&self, capability: &str) -> bool;
}

pub trait TooltipFormatter {
    fn tooltip_for(&self, deposit: &Deposit, resource_type: &ResourceType) -> String;
}

/// Everything the miners core needs from the host.
pub trait MiningBackend:
    DepositTable
    + ResourceTypeRegistry
    + MissionSystem
    + SpatialDirectory
    + CapabilityGate
    + TooltipFormatter
    + Send
    + Sync
{
}

impl<T> MiningBackend for T where
    T: DepositTable
        + ResourceTypeRegistry
        + MissionSystem
        + SpatialDirectory
        + CapabilityGate
        + TooltipFormatter
        + Send
        + Sync
{
}

/// The host's backend, owned by the Bevy world.
#[derive(Resource)]
pub struct MiningBackendRes(pub Box<dyn MiningBackend>);

impl MiningBackendRes {
    pub fn new(backend: impl MiningBackend + 'static) -> Self {
        Self(Box::new(backend))
    }
}
