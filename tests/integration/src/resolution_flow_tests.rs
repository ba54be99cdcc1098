//! End-to-end resolution over a graph file
//!
//! This test exercises the complete flow: file loading -> disabled-state
//! resolution -> parent enumeration -> application listing.

use dal_core::{Error, Session};
use dal_model::{ComponentGraph, GraphStore, InMemoryGraph};
use dal_test_utils::{GraphFile, uids};
use pretty_assertions::assert_eq;

const DETECTOR: &str = r#"
[resolver]
max_iterations = 50

[[sessions]]
uid = "physics"
segments = ["detector"]
applications = ["run-control"]
disabled = ["hv-east"]

[[components]]
uid = "run-control"
kind = "application"

[[components]]
uid = "detector"
kind = "segment"
segments = ["readout"]
resources = ["high-voltage", "crates"]
controller = "detector-ctrl"

[[components]]
uid = "detector-ctrl"
kind = "application"

[[components]]
uid = "readout"
kind = "segment"
applications = ["reader-1", "reader-2"]

[[components]]
uid = "reader-1"
kind = "application"
contains = ["link-1", "link-2"]

[[components]]
uid = "reader-2"
kind = "application"
contains = ["link-3"]

[[components]]
uid = "high-voltage"
kind = "resource-set-or"
contains = ["hv-east", "hv-west"]

[[components]]
uid = "crates"
kind = "resource-set-and"
contains = ["crate-1", "crate-2"]

[[components]]
uid = "crate-1"
kind = "resource-set"
contains = ["link-1"]

[[components]]
uid = "crate-2"
kind = "resource-set"
contains = ["link-3"]

[[components]]
uid = "hv-east"
kind = "resource"

[[components]]
uid = "hv-west"
kind = "resource"

[[components]]
uid = "link-1"
kind = "module"

[[components]]
uid = "link-2"
kind = "module"

[[components]]
uid = "link-3"
kind = "module"
"#;

fn load() -> (GraphFile, InMemoryGraph) {
    let file = GraphFile::with_content("detector.toml", DETECTOR);
    let graph = GraphStore::new().load(file.path()).unwrap();
    (file, graph)
}

#[test]
fn test_load_carries_settings() {
    let (_file, graph) = load();
    assert_eq!(graph.settings().max_iterations, 50);
    assert_eq!(graph.settings().fuse_depth, 64);
    assert_eq!(graph.len(), 15);
}

#[test]
fn test_configured_disable_propagates_through_or_set() {
    let (_file, graph) = load();
    let mut session = Session::new("physics");

    assert!(session.is_disabled(&graph, &"hv-east".into()));
    assert!(session.is_disabled(&graph, &"high-voltage".into()));
    assert!(!session.is_disabled(&graph, &"hv-west".into()));
    assert!(!session.is_disabled(&graph, &"detector".into()));
}

#[test]
fn test_disabling_both_crates_disables_and_set() {
    let (_file, graph) = load();
    let mut session = Session::new("physics");

    session.set_disabled(["crate-1"]);
    assert!(!session.is_disabled(&graph, &"crates".into()));
    assert!(session.is_disabled(&graph, &"link-1".into()));

    session.set_disabled(["crate-1", "crate-2"]);
    assert!(session.is_disabled(&graph, &"crates".into()));
    assert!(session.is_disabled(&graph, &"link-3".into()));
    assert!(!session.is_disabled(&graph, &"link-2".into()));
}

#[test]
fn test_disabled_controller_leaves_segment_running() {
    let (_file, graph) = load();
    let mut session = Session::new("physics");
    session.set_disabled(["detector-ctrl"]);

    assert!(session.is_disabled(&graph, &"detector-ctrl".into()));
    for uid in ["detector", "readout", "reader-1"] {
        assert!(!session.is_disabled(&graph, &uid.into()), "{uid} should be enabled");
    }
}

#[test]
fn test_disabled_segment_disables_subtree() {
    let (_file, graph) = load();
    let mut session = Session::new("physics");
    session.set_disabled(["detector"]);

    for uid in ["readout", "reader-1", "link-2", "crates", "crate-2", "hv-west", "detector-ctrl"] {
        assert!(session.is_disabled(&graph, &uid.into()), "{uid} should be disabled");
    }
    assert!(!session.is_disabled(&graph, &"run-control".into()));
}

#[test]
fn test_parents_of_shared_module() {
    let (_file, graph) = load();
    let session = Session::new("physics");

    let report = session.parents(&graph, &"link-1".into());
    assert!(report.is_clean());
    assert_eq!(
        report.value,
        vec![
            uids(&["detector", "readout", "reader-1"]),
            uids(&["detector", "crates", "crate-1"]),
        ]
    );
}

#[test]
fn test_all_applications() {
    let (_file, graph) = load();
    let session = Session::new("physics");

    let report = session.all_applications(&graph);
    assert!(report.is_clean());
    assert_eq!(report.value, uids(&["run-control", "reader-1", "reader-2"]));
}

#[test]
fn test_unknown_session_is_reported_everywhere() {
    let (_file, graph) = load();
    let mut session = Session::new("cosmics");

    let disabled = session.check_disabled(&graph, &"hv-east".into());
    let parents = session.parents(&graph, &"hv-east".into());
    let apps = session.all_applications(&graph);

    for warnings in [&disabled.warnings, &parents.warnings, &apps.warnings] {
        assert!(matches!(warnings.as_slice(), [Error::UnknownSession { .. }]));
    }
    assert!(!disabled.value);
    assert!(parents.value.is_empty());
    assert!(apps.value.is_empty());
}
