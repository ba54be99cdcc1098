//! Configuration reloads and change notifications
//!
//! A session outlives the graph it was first queried against: the owner of
//! the store reloads the file and forwards the notification, and the next
//! query rebuilds from the new graph with the user overrides intact.

use dal_core::Session;
use dal_model::{ConfigObserver, GraphStore};
use dal_test_utils::GraphFixture;

fn fixture(disabled: &[&str]) -> GraphFixture {
    GraphFixture::new()
        .session("s", &["seg"], &[], disabled)
        .segment("seg", &[], &["app"], &["and"])
        .daq_application("app", &["mod"])
        .module("mod")
        .and_set("and", &["x", "y"])
        .resources(&["x", "y"])
}

#[test]
fn test_reload_picks_up_new_disabled_list() {
    let file = fixture(&["x"]).write_toml();
    let store = GraphStore::new();

    let graph = store.load(file.path()).unwrap();
    let mut session = Session::new("s");
    session.set_disabled(["app"]);

    assert!(!session.is_disabled(&graph, &"and".into()));
    assert!(session.is_disabled(&graph, &"mod".into()));

    file.rewrite(&fixture(&["x", "y"]).to_toml());
    let reloaded = store.load(file.path()).unwrap();
    session.on_update(&"s".into(), "disabled");

    assert!(!session.is_computed());
    assert!(session.is_disabled(&reloaded, &"and".into()));
    // user override survived the notification
    assert!(session.is_disabled(&reloaded, &"mod".into()));
}

#[test]
fn test_unload_then_load_rebuilds() {
    let file = fixture(&["y"]).write_yaml();
    let store = GraphStore::new();
    let graph = store.load(file.path()).unwrap();

    let mut session = Session::new("s");
    session.set_enabled(["y"]);
    assert!(!session.is_disabled(&graph, &"y".into()));

    session.on_unload();
    session.on_load();
    assert!(!session.is_computed());
    assert_eq!(session.disabled_count(), 1);

    session.set_enabled(Vec::<&str>::new());
    assert!(session.is_disabled(&graph, &"y".into()));
}

#[test]
fn test_cached_answer_is_stable_until_notified() {
    let first = fixture(&["x"]).build();
    let second = fixture(&[]).build();
    let mut session = Session::new("s");

    assert!(session.is_disabled(&first, &"x".into()));
    // without a notification the cache from the first graph is reused
    assert!(session.is_disabled(&second, &"x".into()));

    session.on_load();
    assert!(!session.is_disabled(&second, &"x".into()));
}
