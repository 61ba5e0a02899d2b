use std::time::Duration;

use bevy::prelude::*;

use crate::backend::MiningBackendRes;
use crate::clicks::{execute_click, ClickEffect};
use crate::config::MinersConfig;
use crate::diagnostics::{log_click_failure, ClickSnapshot};
use crate::dispatch::DispatchLog;
use crate::events::{
    FocusObjectEvent, ItemClickEvent, RefreshMinersEvent, ShowPopupEvent, SurfaceRequest,
    SurfaceRequestEvent,
};
use crate::feedback::PlayCueEvent;
use crate::presentation::{
    build_catalog_listing, build_compact_listing, ItemTable, MinerListings, Surface,
};

/// Drives periodic refreshes; `None` while they are disabled.
#[derive(Resource, Default)]
pub struct RefreshTimer(pub Option<Timer>);

pub fn tick_refresh_timer(
    time: Res<Time>,
    config: Res<MinersConfig>,
    mut timer: ResMut<RefreshTimer>,
    mut refresh: EventWriter<RefreshMinersEvent>,
    mut warned: Local<bool>,
) {
    if config.refresh_interval_secs <= 0.0 {
        timer.0 = None;
        return;
    }

    // NaN and values past Duration::MAX land here.
    let Ok(interval) = Duration::try_from_secs_f32(config.refresh_interval_secs) else {
        if !*warned {
            warn!(
                "Miners: refresh_interval_secs {} is not a usable duration, periodic refresh disabled",
                config.refresh_interval_secs
            );
            *warned = true;
        }
        timer.0 = None;
        return;
    };
    *warned = false;
    let timer = timer
        .0
        .get_or_insert_with(|| Timer::new(interval, TimerMode::Repeating));
    if timer.duration() != interval {
        timer.set_duration(interval);
    }
    if timer.tick(time.delta()).just_finished() {
        refresh.send(RefreshMinersEvent);
    }
}

/// Execute every clicked action against the current pass.
#[allow(clippy::too_many_arguments)]
pub fn handle_item_clicks(
    mut clicks: EventReader<ItemClickEvent>,
    backend: Option<ResMut<MiningBackendRes>>,
    table: Res<ItemTable>,
    mut log: ResMut<DispatchLog>,
    mut cues: EventWriter<PlayCueEvent>,
    mut focus: EventWriter<FocusObjectEvent>,
    mut popups: EventWriter<ShowPopupEvent>,
    mut surfaces: EventWriter<SurfaceRequestEvent>,
    mut refresh: EventWriter<RefreshMinersEvent>,
) {
    let Some(mut backend) = backend else {
        if !clicks.is_empty() {
            warn!("Miners: clicks received but no MiningBackendRes is installed");
            clicks.clear();
        }
        return;
    };

    for click in clicks.read() {
        match execute_click(&click.action, &mut *backend.0, &table) {
            Ok(ClickEffect::Dispatched(record)) => {
                if let Some(cue) = record.outcome.cue() {
                    cues.send(PlayCueEvent { cue });
                }
                log.push(record);
            }
            Ok(ClickEffect::Focus { deposit, object }) => {
                focus.send(FocusObjectEvent { deposit, object });
            }
            Ok(ClickEffect::Popup { icon, title, text }) => {
                popups.send(ShowPopupEvent { icon, title, text });
            }
            Ok(ClickEffect::Surface(request)) => {
                if request == SurfaceRequest::Open(Surface::Catalog) {
                    refresh.send(RefreshMinersEvent);
                }
                surfaces.send(SurfaceRequestEvent(request));
            }
            Err(failure) => {
                let snapshot = ClickSnapshot::capture(&*backend.0, &table, &click.action);
                log_click_failure(&failure, &snapshot);
            }
        }
    }
}

/// Rebuild both listings when a refresh was requested this frame.
pub fn rebuild_listings(
    mut refresh: EventReader<RefreshMinersEvent>,
    backend: Option<Res<MiningBackendRes>>,
    config: Res<MinersConfig>,
    mut table: ResMut<ItemTable>,
    mut listings: ResMut<MinerListings>,
) {
    if refresh.is_empty() {
        return;
    }
    refresh.clear();

    let Some(backend) = backend else {
        warn!("Miners: refresh requested but no MiningBackendRes is installed");
        return;
    };
    let backend = &*backend.0;
    let listings = &mut *listings;

    listings.compact.clear();
    let outcome = build_compact_listing(backend, &config, &mut table, &mut listings.compact);
    listings.last_compact_outcome = Some(outcome);

    listings.catalog.clear();
    build_catalog_listing(backend, &config, &mut listings.catalog);
}
