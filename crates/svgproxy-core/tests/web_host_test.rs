//! Browser host tests
//!
//! These run in a browser only, e.g.
//! `wasm-pack test --headless --firefox crates/svgproxy-core --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use svgproxy_core::{
    SVG_NAMESPACE,
    host::{Host, web::WebDocument},
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> WebDocument {
    WebDocument::global().expect("Failed to get the window document")
}

#[wasm_bindgen_test]
fn test_create_element_in_namespace() {
    let host = document();

    let circle = host
        .create_element_ns(SVG_NAMESPACE, "circle")
        .expect("Failed to create element");

    assert_eq!(circle.local_name(), "circle");
    assert_eq!(circle.namespace_uri().as_deref(), Some(SVG_NAMESPACE));
}

#[wasm_bindgen_test]
fn test_set_and_get_attribute() {
    let host = document();
    let rect = host
        .create_element_ns(SVG_NAMESPACE, "rect")
        .expect("Failed to create element");

    host.set_attribute(&rect, "width", "50")
        .expect("Failed to set attribute");

    assert_eq!(host.get_attribute(&rect, "width").as_deref(), Some("50"));
    assert_eq!(host.get_attribute(&rect, "height"), None);
}

#[wasm_bindgen_test]
fn test_append_child() {
    let host = document();
    let group = host
        .create_element_ns(SVG_NAMESPACE, "g")
        .expect("Failed to create group");
    let line = host
        .create_element_ns(SVG_NAMESPACE, "line")
        .expect("Failed to create line");

    host.append_child(&group, &line)
        .expect("Failed to append child");

    assert_eq!(line.parent_element(), Some(group.clone()));
    assert_eq!(group.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn test_rejected_names_surface_as_errors() {
    let host = document();

    assert!(host.create_element_ns(SVG_NAMESPACE, "not valid").is_err());

    let rect = host
        .create_element_ns(SVG_NAMESPACE, "rect")
        .expect("Failed to create element");
    assert!(host.set_attribute(&rect, "bad name", "1").is_err());
}
