//! Presentation aggregation: turns deposits and mission state into ordered,
//! declarative items for the host to draw.
//!
//! Two surfaces are built:
//! - **Compact**: summary of all drills, a separator, then one row per deposit
//!   in the player's current location (gated on mining research).
//! - **Catalog**: header plus every mined deposit in the universe.

mod catalog;
mod compact;
mod format;
mod labels;
mod table;
mod types;


pub use catalog::{build_catalog_listing, catalog_header};
pub use compact::{build_compact_listing, summary_item, CompactOutcome};
pub use format::{format_mined_label, format_rate, format_unmined_label};
pub use labels::*;
pub use table::ItemTable;
pub use types::{
    DispatchTarget, ItemAction, ItemHandle, ItemKind, ItemStyle, PresentationItem, ProgressRange,
    Surface,
};

use bevy::prelude::*;

use crate::backend::MiningBackend;
use crate::deposits::Deposit;

/// Output of the latest rebuild, one list per surface.
#[derive(Resource, Debug, Default, Clone)]
pub struct MinerListings {
    pub compact: Vec<PresentationItem>,
    pub catalog: Vec<PresentationItem>,
    pub last_compact_outcome: Option<CompactOutcome>,
}

impl MinerListings {
    pub fn items(&self, surface: Surface) -> &[PresentationItem] {
        match surface {
            Surface::Compact => &self.compact,
            Surface::Catalog => &self.catalog,
        }
    }

    /// Deposit rows of a surface, skipping header/summary/separator.
    pub fn deposit_items(&self, surface: Surface) -> impl Iterator<Item = &PresentationItem> {
        self.items(surface)
            .iter()
            .filter(|item| item.kind == ItemKind::Deposit)
    }
}

/// Stable ascending sort by resource display name, ignoring case; ties keep
/// discovery order.
fn sort_by_resource_name<B, T>(backend: &B, items: &mut [T], deposit_of: impl Fn(&T) -> &Deposit)
where
    B: MiningBackend + ?Sized,
{
    items.sort_by_cached_key(|item| {
        backend
            .resource_type(deposit_of(item).resource_type)
            .name
            .to_lowercase()
    });
}
