//! In-memory host galaxy implementing every backend trait.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::backend::{
    CapabilityGate, DepositTable, MissionSystem, ResourceTypeRegistry, SpatialDirectory,
    TooltipFormatter,
};
use crate::config::MINING_AUTOMATION_CAPABILITY;
use crate::deposits::{
    Deposit, DepositId, IconId, LocationId, MissionKind, ResourceType, ResourceTypeCode,
    SpaceObject, SpaceObjectId,
};
use crate::dispatch::DispatchVerb;

/// Location the player starts in.
pub const HOME: LocationId = LocationId(1);
/// Some other star system.
pub const ELSEWHERE: LocationId = LocationId(2);

/// Body id the galaxy assigns to a deposit's planet.
pub fn object_for(deposit: u32) -> SpaceObjectId {
    SpaceObjectId(1000 + u64::from(deposit))
}

/// One order the mission subsystem received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub verb: DispatchVerb,
    pub target: SpaceObjectId,
    pub accepted: bool,
}

/// Orders shared between a galaxy and whoever inspects it after it has been
/// moved into the Bevy world.
#[derive(Debug, Clone, Default)]
pub struct OrderLog(Arc<Mutex<Vec<Order>>>);

impl OrderLog {
    fn push(&self, order: Order) {
        if let Ok(mut orders) = self.0.lock() {
            orders.push(order);
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.0.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

/// Builder for one deposit in a [`TestGalaxy`].
#[derive(Debug, Clone)]
pub struct TestDeposit {
    id: u32,
    resource: String,
    rate: f32,
    unretrieved: f32,
    unretrieved_max: f32,
    location: Option<LocationId>,
}

impl TestDeposit {
    /// Unmined deposit of `resource` at [`HOME`].
    pub fn new(id: u32, resource: &str) -> Self {
        Self {
            id,
            resource: resource.to_string(),
            rate: 0.0,
            unretrieved: 0.0,
            unretrieved_max: 100.0,
            location: Some(HOME),
        }
    }

    pub fn rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn unretrieved(mut self, amount: f32, max: f32) -> Self {
        self.unretrieved = amount;
        self.unretrieved_max = max;
        self
    }

    pub fn at(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    /// Body with no parent location at all.
    pub fn adrift(mut self) -> Self {
        self.location = None;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TestGalaxy {
    deposits: Vec<Option<Deposit>>,
    resource_types: HashMap<ResourceTypeCode, ResourceType>,
    resource_codes: HashMap<String, ResourceTypeCode>,
    objects: HashMap<DepositId, SpaceObject>,
    missions: HashMap<DepositId, MissionKind>,
    unlocked: HashSet<String>,
    player_location: Option<LocationId>,
    accept_orders: bool,
    orders: OrderLog,
}

impl Default for TestGalaxy {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGalaxy {
    /// Empty galaxy, player at [`HOME`], mining research unlocked, orders accepted.
    pub fn new() -> Self {
        let mut unlocked = HashSet::new();
        unlocked.insert(MINING_AUTOMATION_CAPABILITY.to_string());
        Self {
            deposits: Vec::new(),
            resource_types: HashMap::new(),
            resource_codes: HashMap::new(),
            objects: HashMap::new(),
            missions: HashMap::new(),
            unlocked,
            player_location: Some(HOME),
            accept_orders: true,
            orders: OrderLog::default(),
        }
    }

    pub fn with_deposit(mut self, deposit: TestDeposit) -> Self {
        let code = self.resource_code(&deposit.resource);
        let index = deposit.id as usize;
        if self.deposits.len() <= index {
            self.deposits.resize(index + 1, None);
        }
        let id = DepositId(deposit.id);
        self.deposits[index] = Some(Deposit {
            id,
            resource_type: code,
            auto_mine_rate: deposit.rate,
            unretrieved: deposit.unretrieved,
            unretrieved_max: deposit.unretrieved_max,
        });
        let system = match deposit.location {
            Some(HOME) => "Sol",
            Some(_) => "Kepler",
            None => "Deep Space",
        };
        self.objects.insert(
            id,
            SpaceObject {
                id: object_for(deposit.id),
                parent: deposit.location,
                parent_path: format!("{system} > Body {}", deposit.id),
            },
        );
        self
    }

    pub fn with_mission(mut self, deposit: u32, kind: MissionKind) -> Self {
        self.missions.insert(DepositId(deposit), kind);
        self
    }

    pub fn with_research_locked(mut self) -> Self {
        self.unlocked.clear();
        self
    }

    pub fn rejecting_orders(mut self) -> Self {
        self.accept_orders = false;
        self
    }

    pub fn with_player_at(mut self, location: Option<LocationId>) -> Self {
        self.player_location = location;
        self
    }

    /// Turn a deposit slot into a gap.
    pub fn remove_deposit(&mut self, deposit: u32) {
        if let Some(slot) = self.deposits.get_mut(deposit as usize) {
            *slot = None;
        }
    }

    /// Drop the body a deposit sits on.
    pub fn remove_object(&mut self, deposit: u32) {
        self.objects.remove(&DepositId(deposit));
    }

    pub fn order_log(&self) -> OrderLog {
        self.orders.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.orders()
    }

    fn resource_code(&mut self, name: &str) -> ResourceTypeCode {
        if let Some(code) = self.resource_codes.get(name) {
            return *code;
        }
        let code = ResourceTypeCode(self.resource_codes.len() as u16);
        self.resource_codes.insert(name.to_string(), code);
        self.resource_types.insert(
            code,
            ResourceType {
                name: name.to_string(),
                icon: IconId::new(format!("icon.{}", name.to_lowercase().replace(' ', "_"))),
                tint: [1.0, 1.0, 1.0, 1.0],
            },
        );
        code
    }

    fn deposit_on(&self, target: SpaceObjectId) -> Option<DepositId> {
        self.objects
            .iter()
            .find(|(_, object)| object.id == target)
            .map(|(id, _)| *id)
    }

    fn order(&mut self, verb: DispatchVerb, target: SpaceObjectId, kind: MissionKind) -> bool {
        let accepted = self.accept_orders;
        self.orders.push(Order {
            verb,
            target,
            accepted,
        });
        if accepted {
            if let Some(deposit) = self.deposit_on(target) {
                self.missions.insert(deposit, kind);
            }
        }
        accepted
    }
}

impl DepositTable for TestGalaxy {
    fn try_get_deposit(&self, index: u32) -> Option<Deposit> {
        self.deposits.get(index as usize).cloned().flatten()
    }

    fn max_deposit_index(&self) -> u32 {
        self.deposits.len() as u32
    }
}

impl ResourceTypeRegistry for TestGalaxy {
    fn resource_type(&self, code: ResourceTypeCode) -> &ResourceType {
        &self.resource_types[&code]
    }
}

impl MissionSystem for TestGalaxy {
    fn mission_kind_for(&self, deposit: DepositId) -> Option<MissionKind> {
        self.missions.get(&deposit).copied()
    }

    fn try_order_deployment_to(&mut self, target: SpaceObjectId) -> bool {
        self.order(DispatchVerb::Deploy, target, MissionKind::DeployMiner)
    }

    fn try_order_retrieval_from(&mut self, target: SpaceObjectId) -> bool {
        self.order(DispatchVerb::Retrieve, target, MissionKind::RetrieveMiner)
    }
}

impl SpatialDirectory for TestGalaxy {
    fn find(&self, deposit: DepositId) -> Option<SpaceObject> {
        self.objects.get(&deposit).cloned()
    }

    fn player_location(&self) -> Option<LocationId> {
        self.player_location
    }
}

impl CapabilityGate for TestGalaxy {
    fn is_unlocked(&self, capability: &str) -> bool {
        self.unlocked.contains(capability)
    }
}

impl TooltipFormatter for TestGalaxy {
    fn tooltip_for(&self, deposit: &Deposit, resource_type: &ResourceType) -> String {
        format!(
            "{}\n{:.0}/{:.0}",
            resource_type.name, deposit.unretrieved, deposit.unretrieved_max
        )
    }
}
