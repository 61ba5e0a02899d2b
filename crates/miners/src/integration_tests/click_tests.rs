use crate::deposits::{DepositId, IconId};
use crate::dispatch::{DispatchOutcome, DispatchVerb, OutcomeTally};
use crate::events::SurfaceRequest;
use crate::feedback::FeedbackCue;
use crate::presentation::{ItemAction, PresentationItem, Surface};
use crate::test_harness::{object_for, Order, TestApp, TestDeposit, TestGalaxy, ELSEWHERE};

fn galaxy() -> TestGalaxy {
    TestGalaxy::new()
        .with_deposit(
            TestDeposit::new(5, "Helium")
                .rate(0.5)
                .unretrieved(10.0, 50.0),
        )
        .with_deposit(TestDeposit::new(3, "Iron Ore"))
        .with_deposit(TestDeposit::new(1, "Cobalt").rate(0.2).at(ELSEWHERE))
}

fn row(items: &[PresentationItem], deposit: u32) -> &PresentationItem {
    items
        .iter()
        .find(|i| i.deposit == Some(DepositId(deposit)))
        .unwrap_or_else(|| panic!("no row for deposit {deposit}"))
}

fn click_of(items: &[PresentationItem], deposit: u32) -> ItemAction {
    row(items, deposit)
        .click
        .clone()
        .unwrap_or_else(|| panic!("deposit {deposit} has no click action"))
}

#[test]
fn test_deploy_click_orders_and_confirms() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let deploy = click_of(app.compact(), 3);
    app.click(deploy);

    assert_eq!(
        app.orders(),
        vec![Order {
            verb: DispatchVerb::Deploy,
            target: object_for(3),
            accepted: true,
        }]
    );
    assert_eq!(app.cues(), vec![FeedbackCue::Confirm]);
    let record = app.dispatch_log().last().copied();
    assert_eq!(record.map(|r| r.outcome), Some(DispatchOutcome::Accepted));

    // The listing only moves on at the next pass.
    assert_eq!(
        row(app.compact(), 3).secondary_label.as_deref(),
        Some("Send Miner")
    );
    app.refresh();
    assert_eq!(
        row(app.compact(), 3).secondary_label.as_deref(),
        Some("Sent Miner")
    );
}

#[test]
fn test_rejected_retrieve_plays_cancel() {
    let mut app = TestApp::new(galaxy().rejecting_orders());
    app.refresh();
    let retrieve = click_of(app.compact(), 5);
    app.click(retrieve);

    assert_eq!(
        app.orders(),
        vec![Order {
            verb: DispatchVerb::Retrieve,
            target: object_for(5),
            accepted: false,
        }]
    );
    assert_eq!(app.cues(), vec![FeedbackCue::Cancel]);

    app.refresh();
    assert_eq!(
        row(app.compact(), 5).secondary_label.as_deref(),
        Some("Retrieve Miner")
    );
}

#[test]
fn test_rejected_deploy_plays_cancel_and_keeps_label() {
    let mut app = TestApp::new(galaxy().rejecting_orders());
    app.refresh();
    let deploy = click_of(app.compact(), 3);
    app.click(deploy);

    assert_eq!(
        app.orders(),
        vec![Order {
            verb: DispatchVerb::Deploy,
            target: object_for(3),
            accepted: false,
        }]
    );
    assert_eq!(app.cues(), vec![FeedbackCue::Cancel]);
    assert_eq!(
        app.dispatch_log().tally(),
        OutcomeTally {
            accepted: 0,
            rejected: 1,
            stale: 0,
        }
    );
    assert_eq!(
        row(app.compact(), 3).secondary_label.as_deref(),
        Some("Send Miner")
    );

    // A rejected order records no mission, so the next pass is unchanged too.
    app.refresh();
    assert_eq!(
        row(app.compact(), 3).secondary_label.as_deref(),
        Some("Send Miner")
    );
    assert!(matches!(
        row(app.compact(), 3).click,
        Some(ItemAction::Deploy(_))
    ));
}

#[test]
fn test_click_from_previous_pass_is_ignored() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let stale = click_of(app.compact(), 3);
    app.refresh();
    app.click(stale);

    assert!(app.orders().is_empty());
    assert!(app.cues().is_empty());
    let record = app.dispatch_log().latest_for(DepositId(3)).copied();
    assert_eq!(record.map(|r| r.outcome), Some(DispatchOutcome::StaleTarget));
    assert_eq!(app.dispatch_log().tally().stale, 1);
}

#[test]
fn test_icon_click_focuses_body() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let focus = row(app.compact(), 5).icon_click.clone();
    app.click(focus.unwrap_or_else(|| panic!("row has no icon click")));

    assert_eq!(app.focus_events().len(), 1);
    assert_eq!(app.focus_events()[0].deposit, DepositId(5));
    assert_eq!(app.focus_events()[0].object, object_for(5));
    assert!(app.orders().is_empty());
}

#[test]
fn test_focus_on_vanished_body_is_swallowed() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let focus = click_of(app.catalog(), 5);

    let mut moved_on = galaxy();
    moved_on.remove_object(5);
    app.replace_galaxy(moved_on);
    app.click(focus);

    assert!(app.focus_events().is_empty());
    assert!(app.cues().is_empty());
}

#[test]
fn test_focus_on_vanished_deposit_is_swallowed() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let focus = click_of(app.catalog(), 5);

    let mut moved_on = galaxy();
    moved_on.remove_deposit(5);
    app.replace_galaxy(moved_on);
    app.click(focus);

    assert!(app.focus_events().is_empty());
}

#[test]
fn test_catalog_click_elsewhere_shows_popup() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let popup = click_of(app.catalog(), 1);
    app.click(popup);

    assert!(app.focus_events().is_empty());
    assert_eq!(app.popups().len(), 1);
    let shown = &app.popups()[0];
    assert_eq!(shown.icon, IconId::new("icon.cobalt"));
    assert_eq!(shown.title, row(app.catalog(), 1).label);
    assert_eq!(shown.text, "Location: Kepler > Body 1");
}

#[test]
fn test_summary_opens_catalog_and_refreshes() {
    let mut app = TestApp::new(galaxy());
    app.refresh();
    let generation = app.table().generation();
    let open = app.compact()[0]
        .click
        .clone()
        .unwrap_or_else(|| panic!("summary has no click"));
    app.click(open);
    // Refresh requested during Dispatch is read by Rebuild in the same frame.
    assert_eq!(
        app.surface_requests(),
        vec![SurfaceRequest::Open(Surface::Catalog)]
    );
    assert_eq!(app.table().generation(), generation + 1);

    let close = app.catalog()[0]
        .secondary_click
        .clone()
        .unwrap_or_else(|| panic!("header has no close action"));
    app.click(close);
    assert_eq!(
        app.surface_requests(),
        vec![
            SurfaceRequest::Open(Surface::Catalog),
            SurfaceRequest::Close(Surface::Catalog),
        ]
    );
    assert_eq!(app.table().generation(), generation + 1);
}
