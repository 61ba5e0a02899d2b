//! Headless demo: builds a small galaxy, runs the miners plugin against it
//! and logs both listings before and after one click.
//!
//! `SHOW_MINERS_CONFIG` may point at a JSON config file. Pass `--json` to
//! print the listings to stdout instead of logging them.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use miners::backend::MiningBackendRes;
use miners::config::MinersConfig;
use miners::deposits::MissionKind;
use miners::dispatch::DispatchLog;
use miners::events::{ItemClickEvent, RefreshMinersEvent};
use miners::presentation::{MinerListings, PresentationItem, Surface};
use miners::test_harness::{TestDeposit, TestGalaxy, ELSEWHERE};
use miners::MinersPlugin;

const CONFIG_ENV: &str = "SHOW_MINERS_CONFIG";

fn main() {
    let as_json = std::env::args().any(|a| a == "--json");

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.insert_resource(load_config());
    app.insert_resource(MiningBackendRes::new(demo_galaxy()));
    app.add_plugins(MinersPlugin);

    app.world_mut().send_event(RefreshMinersEvent);
    app.update();
    report(&app, "initial pass", as_json);

    let first_action = app
        .world()
        .resource::<MinerListings>()
        .deposit_items(Surface::Compact)
        .find_map(|item| item.click.clone());
    let Some(action) = first_action else {
        info!("show_miners: compact listing has nothing to click");
        return;
    };

    info!("show_miners: clicking {:?}", action);
    app.world_mut().send_event(ItemClickEvent::new(action));
    app.update();
    if let Some(record) = app.world().resource::<DispatchLog>().last() {
        info!(
            "show_miners: {:?} on deposit {:?} -> {:?}",
            record.verb, record.deposit, record.outcome
        );
    }
    app.world_mut().send_event(RefreshMinersEvent);
    app.update();
    report(&app, "after click", as_json);
}

fn load_config() -> MinersConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return MinersConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => MinersConfig::from_json_or_default(&json),
        Err(e) => {
            warn!("show_miners: could not read {} ({}), using defaults", path, e);
            MinersConfig::default()
        }
    }
}

fn demo_galaxy() -> TestGalaxy {
    TestGalaxy::new()
        .with_deposit(TestDeposit::new(0, "Iron Ore").rate(3.25).unretrieved(40.0, 200.0))
        .with_deposit(TestDeposit::new(1, "Helium").rate(0.5).unretrieved(10.0, 50.0))
        .with_deposit(TestDeposit::new(2, "Nickel"))
        .with_deposit(TestDeposit::new(3, "Water Ice"))
        .with_deposit(
            TestDeposit::new(4, "Cobalt")
                .rate(0.2)
                .at(ELSEWHERE),
        )
        .with_mission(2, MissionKind::DeployMiner)
}

fn report(app: &App, stage: &str, as_json: bool) {
    let listings = app.world().resource::<MinerListings>();
    for surface in [Surface::Compact, Surface::Catalog] {
        let items = listings.items(surface);
        if as_json {
            match serde_json::to_string_pretty(items) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("show_miners: failed to encode {:?} listing: {}", surface, e),
            }
            continue;
        }
        info!("show_miners: {} / {:?} ({} items)", stage, surface, items.len());
        for item in items {
            info!("  {}", describe(item));
        }
    }
}

fn describe(item: &PresentationItem) -> String {
    let mut line = format!("[{:?}] {}", item.style, item.label);
    if let Some(secondary) = &item.secondary_label {
        line.push_str(&format!(" | {secondary}"));
    }
    if let Some(range) = item.range {
        line.push_str(&format!(" ({:.0}/{:.0})", range.value, range.max));
    }
    line
}
