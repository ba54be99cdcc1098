use std::collections::HashSet;

use dal_core::Session;
use dal_model::{Component, ComponentGraph, InMemoryGraph, SetLogic, Uid};
use dal_test_utils::GraphFixture;
use proptest::prelude::*;
use proptest::sample::Index;

/// A random acyclic AND/OR layer over a handful of resources.
#[derive(Debug, Clone)]
struct Scenario {
    resources: usize,
    /// `(is_or, children)`; set `i` may contain resources and sets `0..i`.
    sets: Vec<(bool, Vec<Index>)>,
    seeded: Vec<bool>,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (1usize..6, 1usize..6).prop_flat_map(|(resources, sets)| {
        (
            Just(resources),
            prop::collection::vec((any::<bool>(), prop::collection::vec(any::<Index>(), 0..4)), sets),
            prop::collection::vec(any::<bool>(), resources),
        )
            .prop_map(|(resources, sets, seeded)| Scenario {
                resources,
                sets,
                seeded,
            })
    })
}

impl Scenario {
    fn resource(i: usize) -> String {
        format!("r{i}")
    }

    fn set(i: usize) -> String {
        format!("set{i}")
    }

    /// Child `index` of set `i`: resources first, then earlier sets.
    fn child(&self, set: usize, index: &Index) -> String {
        let slot = index.index(self.resources + set);
        if slot < self.resources {
            Self::resource(slot)
        } else {
            Self::set(slot - self.resources)
        }
    }

    fn graph(&self) -> InMemoryGraph {
        let resources: Vec<String> = (0..self.resources).map(Self::resource).collect();
        let sets: Vec<String> = (0..self.sets.len()).map(Self::set).collect();
        let seeded: Vec<&str> = resources
            .iter()
            .zip(&self.seeded)
            .filter(|(_, seeded)| **seeded)
            .map(|(uid, _)| uid.as_str())
            .collect();
        let members: Vec<&str> = sets.iter().map(String::as_str).collect();

        let mut fixture = GraphFixture::new()
            .session("s", &["seg"], &[], &seeded)
            .segment("seg", &[], &[], &members);
        for uid in &resources {
            fixture = fixture.resource(uid);
        }
        for (i, (is_or, children)) in self.sets.iter().enumerate() {
            let children: Vec<String> = children.iter().map(|c| self.child(i, c)).collect();
            let children: Vec<&str> = children.iter().map(String::as_str).collect();
            fixture = if *is_or {
                fixture.or_set(&sets[i], &children)
            } else {
                fixture.and_set(&sets[i], &children)
            };
        }
        fixture.build()
    }
}

fn disabled_set(session: &mut Session, graph: &InMemoryGraph) -> HashSet<Uid> {
    graph
        .components()
        .map(Component::uid)
        .filter(|uid| session.is_disabled(graph, uid))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn test_fixed_point_satisfies_and_or_rules(scenario in scenario()) {
        let graph = scenario.graph();
        let mut session = Session::new("s");
        let disabled = disabled_set(&mut session, &graph);

        for component in graph.components() {
            let Some(view) = component.as_resource_set() else { continue };
            let children = graph.contained(component.uid());
            match view.logic {
                SetLogic::Or => {
                    if children.iter().any(|c| disabled.contains(c)) {
                        prop_assert!(disabled.contains(component.uid()), "{} should be disabled", component);
                    }
                }
                SetLogic::And => {
                    if !children.is_empty() && children.iter().all(|c| disabled.contains(c)) {
                        prop_assert!(disabled.contains(component.uid()), "{} should be disabled", component);
                    }
                }
                SetLogic::Containment => {}
            }
        }
    }

    #[test]
    fn test_nothing_is_disabled_without_a_reason(scenario in scenario()) {
        let graph = scenario.graph();
        let mut session = Session::new("s");
        let disabled = disabled_set(&mut session, &graph);
        let seeds = &graph.session(&"s".into()).unwrap().disabled;

        for uid in &disabled {
            let seeded = seeds.contains(uid);
            let by_rule = graph.component(uid).and_then(Component::as_resource_set).is_some_and(|view| {
                match view.logic {
                    SetLogic::Or => view.contains.iter().any(|c| disabled.contains(c)),
                    SetLogic::And => !view.contains.is_empty() && view.contains.iter().all(|c| disabled.contains(c)),
                    SetLogic::Containment => false,
                }
            });
            prop_assert!(seeded || by_rule, "{} is disabled without a reason", uid);
        }
    }

    #[test]
    fn test_rebuild_is_idempotent(scenario in scenario()) {
        let graph = scenario.graph();
        let mut session = Session::new("s");

        let first = disabled_set(&mut session, &graph);
        session.reset();
        let second = disabled_set(&mut session, &graph);
        let third = disabled_set(&mut session, &graph);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
    }

    #[test]
    fn test_cyclic_segments_never_panic(depth in 1usize..80, fuse in 2usize..70) {
        // a ring of `depth` segments
        let names: Vec<String> = (0..depth).map(|i| format!("seg{i}")).collect();
        let mut fixture = GraphFixture::new()
            .fuse_depth(fuse)
            .session("s", &["seg0"], &[], &["r"]);
        for (i, name) in names.iter().enumerate() {
            let next = names[(i + 1) % depth].as_str();
            fixture = fixture.segment(name, &[next], &[], &["r"]);
        }
        let graph = fixture.resource("r").build();

        let mut session = Session::new("s");
        let report = session.check_disabled(&graph, &"r".into());
        prop_assert!(!report.is_clean());

        let parents = session.parents(&graph, &"r".into());
        prop_assert!(!parents.is_clean());
    }
}
