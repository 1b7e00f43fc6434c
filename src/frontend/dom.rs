//! Guarded DOM access. Every lookup returns `Option` so a missing element only
//! disables the feature that needed it.

use crate::motion::Rect;
use crate::theme::{Theme, ThemeStore};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Storage,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn active_element() -> Option<Element> {
    document()?.active_element()
}

pub fn focus_element(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

pub fn focus_by_id(id: &str) {
    if let Some(element) = by_id(id) {
        focus_element(&element);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };

    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}

pub fn rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    }
}

pub fn is_hovered(element: &Element) -> bool {
    element.matches(":hover").unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = by_id(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Runs `callback` on the next animation frame; false when no frame could be
/// requested.
pub fn request_animation_frame(callback: impl FnOnce() + 'static) -> bool {
    let Some(win) = window() else {
        return false;
    };

    let callback = Closure::once_into_js(callback);
    win.request_animation_frame(callback.unchecked_ref()).is_ok()
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Browser-local storage scoped to the page origin.
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn apply_theme_attribute(theme: Theme) {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };

    match theme.root_attribute() {
        Some(value) => {
            let _ = root.set_attribute("data-theme", value);
        }
        None => {
            let _ = root.remove_attribute("data-theme");
        }
    }
}
