//! Full catalog of every mined deposit, shown in the context menu.
//!
//! No spatial filter and no research gate: once the menu is open, every
//! deposit with a drill rig on it is listed.

use bevy::prelude::*;

use crate::backend::MiningBackend;
use crate::classifier::{is_auto_mined, is_in_scope};
use crate::config::MinersConfig;
use crate::deposits::{Deposit, IconId, LocationId};

use super::format::format_mined_label;
use super::labels::{CATALOG_TITLE, DRILL_ICON, LOCATION, SHOW};
use super::sort_by_resource_name;
use super::types::{ItemAction, ItemKind, ItemStyle, PresentationItem, Surface};

/// Append the header and one progress item per mined deposit to `out`.
pub fn build_catalog_listing<B: MiningBackend + ?Sized>(
    backend: &B,
    config: &MinersConfig,
    out: &mut Vec<PresentationItem>,
) {
    out.push(catalog_header());

    let mut mined: Vec<Deposit> = (0..backend.max_deposit_index())
        .rev()
        .filter_map(|index| backend.try_get_deposit(index))
        .filter(|deposit| is_auto_mined(deposit, config.automine_threshold))
        .collect();
    sort_by_resource_name(backend, &mut mined, |deposit| deposit);

    let player = backend.player_location();
    out.extend(
        mined
            .iter()
            .map(|deposit| catalog_item(backend, config, deposit, player)),
    );
}

pub fn catalog_header() -> PresentationItem {
    PresentationItem::new(ItemKind::Header, ItemStyle::HeaderText, CATALOG_TITLE)
        .with_icon(IconId::new(DRILL_ICON))
        .with_secondary_click(ItemAction::CloseSurface(Surface::Catalog))
}

fn catalog_item<B: MiningBackend + ?Sized>(
    backend: &B,
    config: &MinersConfig,
    deposit: &Deposit,
    player: Option<LocationId>,
) -> PresentationItem {
    let resource_type = backend.resource_type(deposit.resource_type);
    let label = format_mined_label(
        &resource_type.name,
        backend.mining_rate(deposit),
        config.catalog_label_width,
    );
    let mut tooltip = backend.tooltip_for(deposit, resource_type);

    let mut item = PresentationItem::new(ItemKind::Deposit, ItemStyle::ProgressButton, &label)
        .with_deposit(deposit.id)
        .with_icon(resource_type.icon.clone())
        .with_icon_tint(resource_type.tint)
        .with_secondary_label(SHOW)
        .with_range(deposit.unretrieved_max, deposit.unretrieved);

    match backend.find(deposit.id) {
        Some(object) => {
            let location = format!("{LOCATION}: {}", object.parent_path);
            tooltip = format!("{tooltip}\n\n{location}");
            let action = if is_in_scope(Some(&object), player) {
                ItemAction::Focus {
                    deposit: deposit.id,
                    object: object.id,
                }
            } else {
                ItemAction::ShowPopup {
                    icon: resource_type.icon.clone(),
                    title: label,
                    text: location,
                }
            };
            item = item.with_click(action);
        }
        None => {
            debug!(
                "Miners catalog: deposit {:?} has no body in the universe, listing without click",
                deposit.id
            );
        }
    }

    item.with_tooltip(tooltip)
}
