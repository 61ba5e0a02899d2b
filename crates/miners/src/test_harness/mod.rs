//! # TestApp: headless harness for the miners plugin
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`MinersPlugin`] and an
//! in-memory [`TestGalaxy`], so listings and clicks can be driven frame by
//! frame without a window or renderer.

mod galaxy;

pub use galaxy::{object_for, Order, OrderLog, TestDeposit, TestGalaxy, ELSEWHERE, HOME};

use bevy::app::App;
use bevy::prelude::*;

use crate::backend::MiningBackendRes;
use crate::config::MinersConfig;
use crate::dispatch::DispatchLog;
use crate::events::{
    FocusObjectEvent, ItemClickEvent, RefreshMinersEvent, ShowPopupEvent, SurfaceRequest,
    SurfaceRequestEvent,
};
use crate::feedback::{FeedbackCue, PlayCueEvent};
use crate::presentation::{ItemTable, MinerListings, PresentationItem, Surface};
use crate::MinersPlugin;

/// Every event of type `E` sent since the app was built.
#[derive(Resource)]
pub struct Collected<E: Event>(pub Vec<E>);

impl<E: Event> Default for Collected<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn collect_events<E: Event + Clone>(mut reader: EventReader<E>, mut collected: ResMut<Collected<E>>) {
    collected.0.extend(reader.read().cloned());
}

pub struct TestApp {
    app: App,
    orders: OrderLog,
}

impl TestApp {
    /// Periodic refresh is disabled so every pass is explicit.
    pub fn new(galaxy: TestGalaxy) -> Self {
        Self::with_config(
            galaxy,
            MinersConfig {
                refresh_interval_secs: 0.0,
                ..Default::default()
            },
        )
    }

    pub fn with_config(galaxy: TestGalaxy, config: MinersConfig) -> Self {
        let orders = galaxy.order_log();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.insert_resource(MiningBackendRes::new(galaxy));
        app.add_plugins(MinersPlugin);

        app.init_resource::<Collected<PlayCueEvent>>()
            .init_resource::<Collected<FocusObjectEvent>>()
            .init_resource::<Collected<ShowPopupEvent>>()
            .init_resource::<Collected<SurfaceRequestEvent>>()
            .add_systems(
                PostUpdate,
                (
                    collect_events::<PlayCueEvent>,
                    collect_events::<FocusObjectEvent>,
                    collect_events::<ShowPopupEvent>,
                    collect_events::<SurfaceRequestEvent>,
                ),
            );

        app.update();
        Self { app, orders }
    }

    /// Swap in a new galaxy, e.g. after the host's state moved on.
    pub fn replace_galaxy(&mut self, galaxy: TestGalaxy) -> &mut Self {
        self.orders = galaxy.order_log();
        self.app.insert_resource(MiningBackendRes::new(galaxy));
        self
    }

    /// Request a rebuild and run one frame.
    pub fn refresh(&mut self) -> &mut Self {
        self.app.world_mut().send_event(RefreshMinersEvent);
        self.app.update();
        self
    }

    /// Click `action` and run one frame.
    pub fn click(&mut self, action: crate::presentation::ItemAction) -> &mut Self {
        self.app.world_mut().send_event(ItemClickEvent::new(action));
        self.app.update();
        self
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn listings(&self) -> &MinerListings {
        self.app.world().resource::<MinerListings>()
    }

    pub fn compact(&self) -> &[PresentationItem] {
        self.listings().items(Surface::Compact)
    }

    pub fn catalog(&self) -> &[PresentationItem] {
        self.listings().items(Surface::Catalog)
    }

    pub fn table(&self) -> &ItemTable {
        self.app.world().resource::<ItemTable>()
    }

    pub fn dispatch_log(&self) -> &DispatchLog {
        self.app.world().resource::<DispatchLog>()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.orders()
    }

    pub fn cues(&self) -> Vec<FeedbackCue> {
        self.collected::<PlayCueEvent>()
            .iter()
            .map(|e| e.cue)
            .collect()
    }

    pub fn focus_events(&self) -> &[FocusObjectEvent] {
        self.collected::<FocusObjectEvent>()
    }

    pub fn popups(&self) -> &[ShowPopupEvent] {
        self.collected::<ShowPopupEvent>()
    }

    pub fn surface_requests(&self) -> Vec<SurfaceRequest> {
        self.collected::<SurfaceRequestEvent>()
            .iter()
            .map(|e| e.0)
            .collect()
    }

    fn collected<E: Event>(&self) -> &[E] {
        &self.app.world().resource::<Collected<E>>().0
    }
}
