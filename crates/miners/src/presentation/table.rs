use std::collections::HashMap;

use bevy::prelude::*;

use crate::deposits::DepositId;

use super::types::{ItemHandle, PresentationItem};

/// Compact items of the current aggregation pass, keyed by deposit.
///
/// Every pass bumps the generation and clears the map, so handles captured
/// from an earlier pass stop resolving.
#[derive(Resource, Debug, Default)]
pub struct ItemTable {
    generation: u64,
    items: HashMap<DepositId, PresentationItem>,
}

impl ItemTable {
    /// Start a new pass; returns the generation its handles must carry.
    pub fn begin_pass(&mut self) -> u64 {
        self.items.clear();
        self.generation += 1;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle for `deposit` in the current pass.
    pub fn handle_for(&self, deposit: DepositId) -> ItemHandle {
        ItemHandle {
            generation: self.generation,
            deposit,
        }
    }

    pub fn insert(&mut self, deposit: DepositId, item: PresentationItem) {
        self.items.insert(deposit, item);
    }

    /// The item behind `handle`, if it belongs to the current pass.
    pub fn get(&self, handle: ItemHandle) -> Option<&PresentationItem> {
        if handle.generation != self.generation {
            return None;
        }
        self.items.get(&handle.deposit)
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
