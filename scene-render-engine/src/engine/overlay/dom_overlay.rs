use bevy::prelude::*;
use constants::dom::LOADING_CLASS;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::tracked_points::OverlaySink;

fn find_overlay(selector: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Writes overlay offsets into the page's inline styles. Pages without the
/// element simply show no overlay.
#[derive(Resource, Default)]
pub struct DomOverlaySink;

impl OverlaySink for DomOverlaySink {
    fn set_property(&mut self, overlay: &str, property: &str, value: &str) {
        let Some(element) = find_overlay(overlay) else {
            return;
        };
        if let Err(error) = element.style().set_property(property, value) {
            warn!("Failed to set {property} on {overlay}: {error:?}");
        }
    }
}

pub fn remove_loading_class() {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        warn!("No document body, cannot reveal page");
        return;
    };

    if let Err(error) = body.class_list().remove_1(LOADING_CLASS) {
        error!("Failed to remove loading class: {error:?}");
    }
}
