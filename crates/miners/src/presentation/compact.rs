//! Compact in-sector block: a summary of every mined deposit plus one
//! actionable row per deposit in the player's current location.

use bevy::prelude::*;

use crate::backend::MiningBackend;
use crate::classifier::classify;
use crate::config::MinersConfig;
use crate::deposits::{Deposit, IconId, SpaceObject};
use crate::mission_state::resolve_mission_label;

use super::format::{format_mined_label, format_unmined_label};
use super::labels::{IN_SECTOR, KNOWN_DRILLS, PICKAXE_ICON, SHOW_DRILLS};
use super::sort_by_resource_name;
use super::table::ItemTable;
use super::types::{
    DispatchTarget, ItemAction, ItemHandle, ItemKind, ItemStyle, PresentationItem, Surface,
};

/// Result of one compact pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactOutcome {
    /// The mining automation research is still locked.
    Locked,
    /// No deposit anywhere is being mined.
    NothingMined,
    Shown {
        /// Mined deposits across the whole universe.
        mined_total: usize,
        /// Deposit rows emitted for the current location.
        in_scope: usize,
    },
}

struct InScopeDeposit {
    deposit: Deposit,
    object: SpaceObject,
    is_auto_mined: bool,
}

/// Rebuild `table` and append the compact block to `out`.
///
/// The mined tally counts every deposit; the rows only cover the current
/// location, so the two numbers may differ.
pub fn build_compact_listing<B: MiningBackend + ?Sized>(
    backend: &B,
    config: &MinersConfig,
    table: &mut ItemTable,
    out: &mut Vec<PresentationItem>,
) -> CompactOutcome {
    table.begin_pass();

    if !backend.is_unlocked(&config.gate_capability) {
        debug!(
            "Miners compact listing: '{}' is locked, not showing",
            config.gate_capability
        );
        return CompactOutcome::Locked;
    }

    let player = backend.player_location();
    let mut in_scope = Vec::new();
    let mut mined_total = 0;

    for index in (0..backend.max_deposit_index()).rev() {
        let Some(deposit) = backend.try_get_deposit(index) else {
            continue;
        };
        let object = backend.find(deposit.id);
        let class = classify(
            &deposit,
            object.as_ref(),
            player,
            config.automine_threshold,
        );

        if class.is_auto_mined {
            mined_total += 1;
        }
        if let (true, Some(object)) = (class.is_in_scope, object) {
            in_scope.push(InScopeDeposit {
                deposit,
                object,
                is_auto_mined: class.is_auto_mined,
            });
        }
    }

    if mined_total == 0 {
        debug!("Miners compact listing: no drills anywhere, not showing");
        return CompactOutcome::NothingMined;
    }

    out.push(summary_item(mined_total));
    out.push(PresentationItem::new(
        ItemKind::Separator,
        ItemStyle::Label,
        IN_SECTOR,
    ));

    sort_by_resource_name(backend, &mut in_scope, |entry| &entry.deposit);
    for entry in &in_scope {
        let handle = table.handle_for(entry.deposit.id);
        let item = compact_item(backend, config, entry, handle);
        table.insert(entry.deposit.id, item.clone());
        out.push(item);
    }

    CompactOutcome::Shown {
        mined_total,
        in_scope: in_scope.len(),
    }
}

pub fn summary_item(mined_total: usize) -> PresentationItem {
    PresentationItem::new(
        ItemKind::Summary,
        ItemStyle::TextButton,
        format!("{KNOWN_DRILLS}: {mined_total}"),
    )
    .with_icon(IconId::new(PICKAXE_ICON))
    .with_secondary_label(SHOW_DRILLS)
    .with_click(ItemAction::OpenSurface(Surface::Catalog))
}

fn compact_item<B: MiningBackend + ?Sized>(
    backend: &B,
    config: &MinersConfig,
    entry: &InScopeDeposit,
    handle: ItemHandle,
) -> PresentationItem {
    let deposit = &entry.deposit;
    let resource_type = backend.resource_type(deposit.resource_type);
    let target = DispatchTarget {
        handle,
        object: entry.object.id,
    };

    let (label, style, click) = if entry.is_auto_mined {
        (
            format_mined_label(
                &resource_type.name,
                backend.mining_rate(deposit),
                config.compact_label_width,
            ),
            ItemStyle::ProgressButtonThin,
            ItemAction::Retrieve(target),
        )
    } else {
        (
            format_unmined_label(&resource_type.name, config.unmined_label_width),
            ItemStyle::TextButtonThin,
            ItemAction::Deploy(target),
        )
    };

    let mut item = PresentationItem::new(ItemKind::Deposit, style, label)
        .with_deposit(deposit.id)
        .with_icon(resource_type.icon.clone())
        .with_icon_tint(resource_type.tint)
        .with_icon_click(ItemAction::Focus {
            deposit: deposit.id,
            object: entry.object.id,
        })
        .with_click(click);

    if entry.is_auto_mined {
        item = item.with_range(deposit.unretrieved_max, deposit.unretrieved);
    }

    let state = resolve_mission_label(entry.is_auto_mined, deposit.id, backend);
    item.with_secondary_label(state.label())
        .with_tooltip(backend.tooltip_for(deposit, resource_type))
}
