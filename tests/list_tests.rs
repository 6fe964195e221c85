mod common;

use common::fixtures::single;
use common::{TestResult, build, content, generate, leaf_values};
use folio::{AbstractFactory, AbstractFactoryMaps, Node, generator};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn name_list() -> serde_json::Value {
    single(json!({"list": {
        "source_key": "people",
        "template": {"text": {"source_key": "name"}}
    }}))
}

#[test]
fn test_list_expands_in_order() -> TestResult {
    let node = generate(
        name_list(),
        json!({"people": [{"name": "Ada"}, {"name": "Grace"}, {"name": "Linus"}]}),
    )?;
    assert_eq!(leaf_values(&node), vec!["Ada", "Grace", "Linus"]);
    Ok(())
}

#[test]
fn test_empty_list_yields_no_children() -> TestResult {
    let node = generate(name_list(), json!({"people": []}))?;
    assert!(node.leaves().is_empty());

    let col = node.children()[0].children()[0];
    match col.children()[0] {
        Node::List { items } => assert!(items.is_empty()),
        other => panic!("expected a list, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_failing_item_is_identified() {
    let err = generate(
        name_list(),
        json!({"people": [{"name": "Ada"}, {"name": "Grace"}, {"nickname": "L"}]}),
    )
    .unwrap_err();
    let mapper_error = err.mapper_error().unwrap();
    assert!(mapper_error.is_resolution());
    assert_eq!(mapper_error.path_string(), "rows[0].cols[0].component.list.people[2].text");
}

#[test]
fn test_missing_sequence_is_a_resolution_error() {
    let err = generate(name_list(), json!({})).unwrap_err();
    let mapper_error = err.mapper_error().unwrap();
    assert!(mapper_error.is_resolution());
    assert!(mapper_error.to_string().contains("people"));
}

#[test]
fn test_template_errors_surface_when_mapping() {
    let err = build(single(json!({"list": {
        "source_key": "people",
        "template": {"text": {"colour": "red"}}
    }})))
    .unwrap_err();
    let mapper_error = err.mapper_error().unwrap();
    assert!(mapper_error.is_unknown_field());
    assert_eq!(
        mapper_error.path_string(),
        "rows[0].cols[0].component.list.template.text"
    );
}

#[test]
fn test_list_without_source_key() {
    let err = build(single(json!({"list": {"template": {"line": {}}}}))).unwrap_err();
    assert!(err.mapper_error().unwrap().is_validation());
}

#[test]
fn test_nested_lists() -> TestResult {
    let template = single(json!({"list": {
        "source_key": "sections",
        "template": {"row": {"cols": [
            {"size": 4, "component": {"text": {"source_key": "title"}}},
            {"size": 8, "component": {"list": {
                "source_key": "entries",
                "template": {"text": {"source_key": "label"}}
            }}}
        ]}}
    }}));
    let node = generate(
        template,
        json!({"sections": [
            {"title": "A", "entries": [{"label": "a1"}, {"label": "a2"}]},
            {"title": "B", "entries": []},
            {"title": "C", "entries": [{"label": "c1"}]}
        ]}),
    )?;
    assert_eq!(leaf_values(&node), vec!["A", "a1", "a2", "B", "C", "c1"]);
    Ok(())
}

#[test]
fn test_callback_runs_once_per_item_and_never_at_construction() -> TestResult {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let generate = generator(move |scope| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Node::Text {
            value: scope.scalar("text", "sku")?,
            props: Default::default(),
        })
    });

    let list = AbstractFactoryMaps::new().new_list(&json!({"source_key": "skus"}), "", generate)?;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let data = content(json!({"skus": [{"sku": 1}, {"sku": 2}, {"sku": 3}, {"sku": 4}]}));
    let node = list.generate(&data)?;
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(leaf_values(&node), vec!["1", "2", "3", "4"]);

    list.generate(&content(json!({"skus": []})))?;
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    Ok(())
}
