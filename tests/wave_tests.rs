mod support;

use stockwave::application::CycleKind;
use stockwave::domain::{AvailabilityResult, Notification};
use stockwave::error::{CatalogError, Error};
use stockwave::testkit::availability::ScriptedChecker;
use stockwave::testkit::catalog::ScriptedCatalog;
use stockwave::testkit::notifier::{Delivery, RecordingNotifier};

use support::harness::{items, snapshot, Harness};

fn wave_checker() -> ScriptedChecker {
    ScriptedChecker::new()
        .unavailable("A")
        .available("B")
        .with("C", AvailabilityResult::available(None))
        .with("D", AvailabilityResult::unknown())
}

#[tokio::test]
async fn wave_announces_total_then_only_new_items() {
    let h = Harness::new(
        snapshot(100, &["A", "B"]),
        ScriptedCatalog::single_page(105, items(&["A", "B", "C", "D"])),
        wave_checker(),
    );
    let prior = h.store.current();

    let outcome = h.engine.run_cycle(&prior).await.unwrap();

    assert_eq!(
        outcome.kind,
        CycleKind::Wave {
            previous: 100,
            current: 105
        }
    );
    assert_eq!(outcome.notifications.len(), 2);
    assert_eq!(
        outcome.notifications[0],
        Notification::StockIncreased {
            previous: 100,
            current: 105
        }
    );
    assert_eq!(outcome.notifications[1].item_id(), Some("C"));

    let deliveries = h.notifier.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries[0].body().contains("+5"));
    assert!(deliveries[1].body().contains("Item C"));
    assert!(deliveries[1].body().contains("COD: ?"));

    assert_eq!(h.store.current(), outcome.snapshot);
    assert_eq!(outcome.snapshot.last_total_count, 105);
    let ids: Vec<&str> = outcome
        .snapshot
        .available_identifiers
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(ids, vec!["B", "C"]);
    assert_eq!(outcome.stats.checked, 4);
    assert_eq!(outcome.stats.available, 2);
    assert_eq!(outcome.stats.unavailable, 1);
    assert_eq!(outcome.stats.unknown, 1);
}

#[tokio::test]
async fn equal_total_is_idle() {
    let prior = snapshot(50, &["A"]);
    let h = Harness::new(
        prior.clone(),
        ScriptedCatalog::single_page(50, items(&["A", "B"])),
        ScriptedChecker::new().available("B"),
    );

    let outcome = h.engine.run_cycle(&prior).await.unwrap();

    assert_eq!(outcome.kind, CycleKind::Idle { total: 50 });
    assert_eq!(h.checker.calls(), 0);
    assert_eq!(h.catalog.calls(), 1);
    assert_eq!(h.store.writes(), 0);
    assert_eq!(h.store.current(), prior);
    assert!(h.notifier.is_empty());
    assert!(outcome.notifications.is_empty());
}

#[tokio::test]
async fn shrink_refreshes_quietly_and_drops_stale_ids() {
    let h = Harness::new(
        snapshot(80, &["X"]),
        ScriptedCatalog::single_page(75, items(&["X"])),
        ScriptedChecker::new().unavailable("X"),
    );
    let prior = h.store.current();

    let outcome = h.engine.run_cycle(&prior).await.unwrap();

    assert_eq!(
        outcome.kind,
        CycleKind::Shrink {
            previous: 80,
            current: 75
        }
    );
    assert!(h.notifier.is_empty());
    assert_eq!(h.store.current().last_total_count, 75);
    assert!(h.store.current().available_identifiers.is_empty());
}

#[tokio::test]
async fn shrink_still_announces_newly_available_items() {
    let h = Harness::new(
        snapshot(80, &[]),
        ScriptedCatalog::single_page(75, items(&["Y"])),
        ScriptedChecker::new().available("Y"),
    );
    let prior = h.store.current();

    let outcome = h.engine.run_cycle(&prior).await.unwrap();

    assert_eq!(h.notifier.len(), 1);
    assert_eq!(outcome.notifications[0].item_id(), Some("Y"));
}

#[tokio::test]
async fn repeated_total_never_announces_twice() {
    let h = Harness::new(
        snapshot(100, &[]),
        ScriptedCatalog::single_page(105, items(&["C"])),
        ScriptedChecker::new().available("C"),
    );

    let first = h.engine.run_cycle(&h.store.current()).await.unwrap();
    let second = h.engine.run_cycle(&h.store.current()).await.unwrap();

    assert!(first.kind.is_wave());
    assert_eq!(second.kind, CycleKind::Idle { total: 105 });
    assert_eq!(h.notifier.len(), 2);
}

#[tokio::test]
async fn item_available_in_consecutive_cycles_is_announced_once() {
    let h = Harness::new(
        snapshot(100, &[]),
        ScriptedCatalog::single_page(105, items(&["C"])),
        ScriptedChecker::new().available("C"),
    );
    h.engine.run_cycle(&h.store.current()).await.unwrap();

    // A later shrink re-scans the catalog; C is still available.
    let mut shrunk = h.store.current();
    shrunk.last_total_count = 110;
    let outcome = h.engine.run_cycle(&shrunk).await.unwrap();

    assert!(matches!(outcome.kind, CycleKind::Shrink { .. }));
    assert!(outcome.notifications.is_empty());
    let item_alerts = h
        .notifier
        .deliveries()
        .iter()
        .filter(|d| d.body().contains("IN STOCK"))
        .count();
    assert_eq!(item_alerts, 1);
}

#[tokio::test]
async fn snapshot_is_replaced_not_accumulated() {
    let h = Harness::new(
        snapshot(10, &["OLD1", "OLD2"]),
        ScriptedCatalog::single_page(12, items(&["OLD1", "NEW"])),
        ScriptedChecker::new().unavailable("OLD1").available("NEW"),
    );
    let prior = h.store.current();

    let outcome = h.engine.run_cycle(&prior).await.unwrap();

    let ids: Vec<&str> = outcome
        .snapshot
        .available_identifiers
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(ids, vec!["NEW"]);
}

#[tokio::test]
async fn total_is_persisted_before_first_notification() {
    let h = Harness::new(
        snapshot(100, &[]),
        ScriptedCatalog::single_page(105, items(&["C"])),
        ScriptedChecker::new().available("C"),
    );
    let prior = h.store.current();

    h.engine.run_cycle(&prior).await.unwrap();

    let entries = h.journal.entries();
    let first_save = h.journal.position("save:105").unwrap();
    let first_notify = h.journal.position("notify:").unwrap();
    assert!(first_save < first_notify, "journal: {entries:?}");
    assert_eq!(entries.iter().filter(|e| e.starts_with("save:")).count(), 2);
}

#[tokio::test]
async fn unknown_availability_keeps_item_eligible() {
    let h = Harness::new(
        snapshot(100, &[]),
        ScriptedCatalog::single_page(105, items(&["D"])),
        ScriptedChecker::new().with("D", AvailabilityResult::unknown()),
    );
    let outcome = h.engine.run_cycle(&h.store.current()).await.unwrap();
    assert!(outcome.snapshot.available_identifiers.is_empty());
    assert_eq!(h.notifier.len(), 1);

    // Next wave, D resolves available and is announced.
    let h = Harness::new(
        outcome.snapshot.clone(),
        ScriptedCatalog::single_page(110, items(&["D"])),
        ScriptedChecker::new().available("D"),
    );
    let outcome = h.engine.run_cycle(&h.store.current()).await.unwrap();
    assert_eq!(outcome.notifications[1].item_id(), Some("D"));
}

#[tokio::test]
async fn item_with_image_is_sent_as_photo() {
    let catalog = vec![stockwave::domain::CatalogItem::new("P")
        .with_name("Photo item")
        .with_image("https://img.example/p.jpg")];
    let h = Harness::new(
        snapshot(1, &[]),
        ScriptedCatalog::single_page(2, catalog),
        ScriptedChecker::new().available("P"),
    );

    h.engine.run_cycle(&h.store.current()).await.unwrap();

    let deliveries = h.notifier.deliveries();
    assert!(matches!(deliveries[0], Delivery::Text(_)));
    assert!(matches!(
        &deliveries[1],
        Delivery::Image { url, .. } if url == "https://img.example/p.jpg"
    ));
}

#[tokio::test]
async fn failing_transport_does_not_fail_cycle() {
    let h = Harness::with_notifier(
        snapshot(1, &[]),
        ScriptedCatalog::single_page(3, items(&["C"])),
        ScriptedChecker::new().available("C"),
        RecordingNotifier::new().failing(),
    );

    let outcome = h.engine.run_cycle(&h.store.current()).await.unwrap();

    assert_eq!(outcome.stats.delivery_failures, 2);
    assert_eq!(h.store.current().last_total_count, 3);
}

#[tokio::test]
async fn first_page_failure_aborts_without_writes() {
    let catalog = ScriptedCatalog::new(105).with_failure(0, CatalogError::AccessDenied { page: 0 });
    let h = Harness::new(snapshot(100, &[]), catalog, ScriptedChecker::new());

    let err = h.engine.run_cycle(&h.store.current()).await.unwrap_err();

    assert!(matches!(err, Error::Catalog(CatalogError::AccessDenied { page: 0 })));
    assert_eq!(h.store.writes(), 0);
    assert!(h.notifier.is_empty());
}

#[tokio::test]
async fn failed_later_pages_are_skipped() {
    let catalog = ScriptedCatalog::new(105)
        .with_total_pages(2)
        .with_page(0, items(&["A"]))
        .with_failure(
            1,
            CatalogError::Transient {
                page: 1,
                reason: "timeout".into(),
            },
        )
        .with_page(2, items(&["B"]));
    let h = Harness::new(
        snapshot(100, &[]),
        catalog,
        ScriptedChecker::new().available("A").available("B"),
    );

    let outcome = h.engine.run_cycle(&h.store.current()).await.unwrap();

    assert_eq!(outcome.stats.failed_pages, 1);
    assert_eq!(outcome.stats.fetched, 2);
    assert_eq!(outcome.snapshot.available_identifiers.len(), 2);
}
