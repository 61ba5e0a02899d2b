//! Drill-rig reconciliation for player territories.
//!
//! Reads deposits and missions from the host game, classifies each deposit,
//! builds declarative listings for two UI surfaces, and turns clicks on those
//! listings into deploy/retrieve orders on the host's mission subsystem.

use bevy::prelude::*;

pub mod backend;
pub mod classifier;
pub mod clicks;
pub mod config;
pub mod deposits;
pub mod diagnostics;
pub mod dispatch;
pub mod events;
pub mod feedback;
pub mod mission_state;
pub mod presentation;
pub mod systems;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "demo"))]
pub mod test_harness;

use config::MinersConfig;
use dispatch::DispatchLog;
use events::{
    FocusObjectEvent, ItemClickEvent, RefreshMinersEvent, ShowPopupEvent, SurfaceRequestEvent,
};
use feedback::PlayCueEvent;
use presentation::{ItemTable, MinerListings};
use systems::{handle_item_clicks, rebuild_listings, tick_refresh_timer, RefreshTimer};

/// Ordering within a frame: clicks are validated against the pass that
/// produced them, before any rebuild replaces it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinersSet {
    Input,
    Dispatch,
    Rebuild,
}

/// Registers the miners resources, events and systems.
///
/// The host must insert a [`backend::MiningBackendRes`]; it may insert its own
/// [`MinersConfig`] before adding the plugin.
pub struct MinersPlugin;

impl Plugin for MinersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MinersConfig>()
            .init_resource::<ItemTable>()
            .init_resource::<MinerListings>()
            .init_resource::<DispatchLog>()
            .init_resource::<RefreshTimer>()
            .add_event::<RefreshMinersEvent>()
            .add_event::<ItemClickEvent>()
            .add_event::<PlayCueEvent>()
            .add_event::<FocusObjectEvent>()
            .add_event::<ShowPopupEvent>()
            .add_event::<SurfaceRequestEvent>()
            .configure_sets(
                Update,
                (MinersSet::Input, MinersSet::Dispatch, MinersSet::Rebuild).chain(),
            )
            .add_systems(
                Update,
                (
                    tick_refresh_timer.in_set(MinersSet::Input),
                    handle_item_clicks.in_set(MinersSet::Dispatch),
                    rebuild_listings.in_set(MinersSet::Rebuild),
                ),
            );
    }
}
