//! WASM browser tests for the web-sys backend.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element as WsElement, Event, MouseEvent, Window};
use wquery::{
    class_list,
    dom::{Element, Value},
    web::{
        by_id, by_name, create_event, is_any, is_first, trigger, Lifecycle, ListenerRegistry,
        Select,
    },
    DomError, Elements,
};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Mount a fresh container with the provided markup, returning it.
fn fixture(html: &str) -> WsElement {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

// === Selectors ===

#[wasm_bindgen_test]
fn selects_within_scope() {
    let root = fixture(r#"<p class="a">1</p><p class="a b">2</p><span class="b">3</span>"#);

    assert_eq!(root.select_all("p").unwrap().len(), 2);
    assert_eq!(root.by_class("b").len(), 2);
    assert_eq!(root.by_tag("span").len(), 1);
    assert_eq!(
        root.by_tag_ns(Some("http://www.w3.org/1999/xhtml"), "p")
            .unwrap()
            .len(),
        2
    );

    let first = root.select_first(".a").unwrap().unwrap();
    assert_eq!(first.text_content().as_deref(), Some("1"));
    assert!(root.select_first(".missing").unwrap().is_none());
}

#[wasm_bindgen_test]
fn document_lookups() {
    let _root = fixture(r#"<input id="wq-id" name="wq-name"><input name="wq-name">"#);
    let document = document();

    assert!(by_id(&document, "wq-id").is_some());
    assert!(by_id(&document, "wq-nope").is_none());
    assert_eq!(by_name(&document, "wq-name").len(), 2);
}

#[wasm_bindgen_test]
fn invalid_selector_is_a_host_error() {
    let root = fixture("");

    assert!(matches!(root.select_all("p[").map(|_| ()), Err(DomError::Host(_))));
}

#[wasm_bindgen_test]
fn membership_checks() {
    let root = fixture(r#"<i class="x"></i><i class="x"></i>"#);
    let items = root.select_all("i").unwrap();
    let second = items.get(1).unwrap();

    assert!(is_any(&root, &second, ".x").unwrap());
    assert!(!is_any(&root, &second, ".y").unwrap());
    assert!(!is_first(&root, &second, ".x").unwrap());
    assert!(is_first(&root, &items.get(0).unwrap(), ".x").unwrap());
}

// === Class editing ===

#[wasm_bindgen_test]
fn class_editing_on_live_nodes() {
    let root = fixture("<li></li><li></li><li></li>");
    let items = root.by_tag("li");

    items.add_classes(["a", "b"]).unwrap();
    assert!(items.have_classes(["a", "b"]).unwrap());

    items.toggle_class("a").unwrap();
    assert!(!items.have_class("a").unwrap());

    items.remove_classes(["b"]).unwrap();
    assert!(!items.have_class("b").unwrap());
}

#[wasm_bindgen_test]
fn empty_and_whitespace_tokens_are_invalid() {
    let root = fixture("<li></li><li></li>");
    let items = root.select_all("li").unwrap();

    assert_eq!(
        items.add_class(""),
        Err(DomError::InvalidClassName(String::new()))
    );
    assert_eq!(
        items.add_class("two words"),
        Err(DomError::InvalidClassName("two words".into()))
    );
}

#[wasm_bindgen_test]
fn text_node_aborts_the_pass() {
    let root = fixture("<b></b>text<b></b>");
    let nodes = Elements::from(root.child_nodes());

    let result = nodes.add_class("seen");

    assert_eq!(result, Err(DomError::unsupported("classList.add")));
    assert!(nodes.get(0).unwrap().has_class("seen").unwrap());
    assert!(!nodes.get(2).unwrap().has_class("seen").unwrap());
}

#[wasm_bindgen_test]
fn live_collection_shrinks_while_removing() {
    let root = fixture(r#"<p class="x"></p><p class="x"></p><p class="x"></p><p class="x"></p>"#);
    let live = root.by_class("x");

    // Removing the class drops elements out of the live list mid-walk
    class_list::remove_class(&*live, "x").unwrap();

    assert_eq!(root.by_class("x").len(), 2);
}

// === Content, placement, properties ===

#[wasm_bindgen_test]
fn html_value_and_properties() {
    let root = fixture(r#"<input><input>"#);
    let inputs = root.select_all("input").unwrap();

    inputs.val("typed").unwrap();
    inputs.attr("disabled", true).unwrap();

    for input in inputs.iter() {
        let value = Reflect::get(&input, &JsValue::from_str("value")).unwrap();
        let disabled = Reflect::get(&input, &JsValue::from_str("disabled")).unwrap();
        assert_eq!(value.as_string().as_deref(), Some("typed"));
        assert_eq!(disabled.as_bool(), Some(true));
    }

    let root = fixture("<p>b</p><p>b</p>");
    let paragraphs = root.select_all("p").unwrap();
    paragraphs.prepend("a").unwrap();
    paragraphs.append("c").unwrap();
    assert!(paragraphs
        .iter()
        .all(|p| p.inner_html().unwrap() == "abc"));

    paragraphs.html("<em>x</em>").unwrap();
    assert_eq!(root.select_all("em").unwrap().len(), 2);

    let first = paragraphs.get(0).unwrap();
    first.set_property("title", &Value::from("tip")).unwrap();
    let title = Reflect::get(&first, &JsValue::from_str("title")).unwrap();
    assert_eq!(title.as_string().as_deref(), Some("tip"));
}

#[wasm_bindgen_test]
fn placement_moves_nodes() {
    let root = fixture(r#"<ul></ul><ul></ul><li>1</li><li>2</li>"#);
    let lists = root.select_all("ul").unwrap();
    let items = root.select_all(":scope > li").unwrap();
    let first_list = lists.get(0).unwrap();

    items.prepend_to(&first_list).unwrap();
    assert_eq!(first_list.text_content().as_deref(), Some("21"));

    items.append_to_multiple(&*lists).unwrap();
    assert_eq!(lists.get(1).unwrap().text_content().as_deref(), Some("2"));
}

// === Events ===

#[wasm_bindgen_test]
fn trigger_builds_mouse_events_for_clicks() {
    let window = window();

    let click = create_event(&window, &"click".into()).unwrap();
    assert!(click.is_instance_of::<MouseEvent>());
    assert!(click.bubbles());

    let custom = create_event(&window, &"wq-custom".into()).unwrap();
    assert!(!custom.is_instance_of::<MouseEvent>());
    assert!(custom.cancelable());
}

#[wasm_bindgen_test]
fn on_trigger_off() {
    let root = fixture("<button></button><button></button>");
    let buttons = root.select_all("button").unwrap();

    let mut registry = ListenerRegistry::new();
    let hits = Rc::new(RefCell::new(0));
    let listener = {
        let hits = Rc::clone(&hits);
        registry.register("click", move |_: Event| *hits.borrow_mut() += 1)
    };

    buttons.on("click", &listener, false).unwrap();
    trigger(&*buttons, &window(), "click").unwrap();
    assert_eq!(*hits.borrow(), 2);

    buttons.off("click", &listener, false).unwrap();
    trigger(&*buttons, &window(), "click").unwrap();
    assert_eq!(*hits.borrow(), 2);

    assert_eq!(registry.functions("click").count(), 1);

    assert!(registry.unregister("click", &listener));
    assert!(!registry.unregister("click", &listener));
    assert_eq!(registry.functions("click").count(), 0);
}

#[wasm_bindgen_test]
fn lifecycle_unbinds_on_drop() {
    let window = window();
    let hits = Rc::new(RefCell::new(0));

    {
        let mut lifecycle = Lifecycle::new(&window);
        let hits = Rc::clone(&hits);
        lifecycle
            .on_ready(move |_| *hits.borrow_mut() += 1)
            .unwrap();

        window
            .dispatch_event(&Event::new("DOMContentLoaded").unwrap())
            .unwrap();
    }

    window
        .dispatch_event(&Event::new("DOMContentLoaded").unwrap())
        .unwrap();
    assert_eq!(*hits.borrow(), 1);
}
