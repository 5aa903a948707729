//! Whole-pipeline tests for jsonflow-core

use std::collections::HashSet;

use serde_json::{json, Value};

use crate::*;

fn sample() -> Value {
    parse_json(SAMPLE_JSON).unwrap()
}

fn documents() -> Vec<Value> {
    vec![
        sample(),
        json!({}),
        json!([]),
        json!("text"),
        json!([[[]], {"a": [1, {"b": null}]}, [true, false]]),
        json!({"x": {"y": {"z": [1, 2, 3, 4]}}, "w": [{"k": 1}, {"k": 2}]}),
        json!({"٣": [1], "n": {"٤٥": true}}),
    ]
}

#[test]
fn test_node_ids_are_unique() {
    for doc in documents() {
        let flow = build_flow_from_json(&doc);
        let unique: HashSet<_> = flow.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(unique.len(), flow.nodes.len(), "duplicate ids in {doc}");
    }
}

#[test]
fn test_edges_form_a_tree() {
    for doc in documents() {
        let flow = build_flow_from_json(&doc);
        assert_eq!(flow.edges.len() + 1, flow.nodes.len());
        let graph = FlowGraph::from_records(&flow.nodes, &flow.edges);
        assert!(graph.validate().is_ok(), "not a tree: {doc}");
    }
}

#[test]
fn test_canonical_ids_survive_normalization() {
    for doc in documents() {
        for id in build_flow_from_json(&doc).node_ids() {
            assert_eq!(normalize_query(&id), Some(id.clone()));
            assert_eq!(resolve_with_tier(&id, &[id.as_str()]).unwrap().tier, MatchTier::Exact);
        }
    }
}

#[test]
fn test_unrelated_subtrees_do_not_overlap() {
    let config = LayoutConfig::default();
    for doc in documents() {
        let flow = build_flow_from_json(&doc);
        let graph = FlowGraph::from_records(&flow.nodes, &flow.edges);
        let shape = TreeShape::new(&graph).unwrap();

        let bands: Vec<(f64, f64)> = flow
            .nodes
            .iter()
            .map(|n| {
                let idx = graph.index_of(&n.id).unwrap();
                vertical_band(n, shape.subtree_size(idx), &config)
            })
            .collect();

        for (i, a) in flow.nodes.iter().enumerate() {
            let above_a = graph.ancestors(&a.id);
            for (j, b) in flow.nodes.iter().enumerate().skip(i + 1) {
                if above_a.contains(&b.id) || graph.ancestors(&b.id).contains(&a.id) {
                    continue;
                }
                let (top_a, bottom_a) = bands[i];
                let (top_b, bottom_b) = bands[j];
                assert!(
                    bottom_a < top_b || bottom_b < top_a,
                    "{} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn test_builds_are_deterministic() {
    for doc in documents() {
        assert_eq!(build_flow_from_json(&doc), build_flow_from_json(&doc));
    }
}

#[test]
fn test_root_is_labelled() {
    for doc in documents() {
        let flow = build_flow_from_json(&doc);
        let root = flow.root().unwrap();
        assert_eq!(root.label, "$");
        assert_eq!(root.name, "$");
        assert_eq!(root.kind, NodeKind::of(&doc));
        assert_eq!(flow.nodes[0].id, "$");
    }
}

#[test]
fn test_sample_node_order() {
    let ids = build_flow_from_json(&sample()).node_ids();
    insta::assert_snapshot!(ids.join("\n"), @r"
    $
    $.user
    $.user.name
    $.user.age
    $.user.address
    $.user.address.city
    $.user.address.zip
    $.user.hobbies
    $.user.hobbies[0]
    $.user.hobbies[1]
    $.items
    $.items[0]
    $.items[0].id
    $.items[0].price
    $.items[0].tags
    $.items[0].tags[0]
    $.items[0].tags[1]
    $.items[1]
    $.items[1].id
    $.items[1].price
    $.items[1].tags
    $.active
    ");
}

#[test]
fn test_sample_searches() {
    let ids = build_flow_from_json(&sample()).node_ids();

    assert_eq!(resolve("user.name", &ids).as_deref(), Some("$.user.name"));
    assert_eq!(resolve("items.0.price", &ids).as_deref(), Some("$.items[0].price"));
    assert_eq!(resolve("items[1].tags", &ids).as_deref(), Some("$.items[1].tags"));
    assert_eq!(resolve("", &ids), None);

    // Every rooted query contains "$", so the reverse tier lands on the root.
    let r = resolve_with_tier("user.nickname", &ids).unwrap();
    assert_eq!(r.id, "$");
    assert_eq!(r.tier, MatchTier::ReverseSubstring);
}

#[test]
fn test_sample_layout() {
    let flow = build_flow_from_json(&sample());
    let config = LayoutConfig::default();

    // 14 leaf slots in total.
    let root = flow.root().unwrap();
    assert_eq!(root.position, Position { x: 0.0, y: 650.0 });

    let city = flow.node("$.user.address.city").unwrap();
    assert_eq!(city.position.x, 3.0 * config.horizontal_spacing);

    let active = flow.node("$.active").unwrap();
    assert_eq!(active.position, Position { x: 280.0, y: 1300.0 });
}

#[test]
fn test_flow_serializes_camel_case() {
    let flow = build_flow_from_json(&json!({"a": "b"}));
    let value = serde_json::to_value(&flow).unwrap();

    let leaf = &value["nodes"][1];
    assert_eq!(leaf["valueText"], "\"b\"");
    assert_eq!(leaf["kind"], "primitive");
    assert_eq!(value["edges"][0]["id"], "$->$.a");

    let back: Flow = serde_json::from_value(value).unwrap();
    assert_eq!(back, flow);
}

#[test]
fn test_relayout_with_custom_config() {
    let mut flow = build_flow_from_json(&json!([1, 2]));
    let config = LayoutConfig {
        horizontal_spacing: 10.0,
        ..LayoutConfig::default()
    };
    relayout(&mut flow, &config);
    assert_eq!(flow.node("$[1]").unwrap().position, Position { x: 10.0, y: 100.0 });
}

#[test]
fn test_deeply_nested_text_builds() {
    let depth = 500;
    let text = format!("{}1{}", "{\"a\":".repeat(depth), "}".repeat(depth));
    let flow = build_flow_from_json(&parse_json(&text).unwrap());

    assert_eq!(flow.nodes.len(), depth + 1);
    let leaf = flow.nodes.last().unwrap();
    assert_eq!(leaf.id, format!("${}", ".a".repeat(depth)));
    assert_eq!(leaf.position.x, depth as f64 * 280.0);
    assert_eq!(resolve(&leaf.id, &flow.node_ids()).as_deref(), Some(leaf.id.as_str()));
}
