//! Small helpers around `web_sys` shared by the widgets.

use web_sys::{window, Element, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Top and bottom page offsets of the element with `id`.
pub fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    let top = rect.top() + scroll_y();
    Some((top, top + rect.height()))
}

/// Stops the page behind an open modal from scrolling.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

/// Smooth-scrolls to a section, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str, header_offset: f64) {
    let Some((top, _)) = section_bounds(id) else {
        return;
    };
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top - header_offset);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Whether at least `fraction` of the element's height is inside the viewport.
pub fn is_in_viewport(node: &NodeRef, fraction: f64) -> bool {
    let (Some(element), Some(window)) = (node.cast::<Element>(), window()) else {
        return false;
    };
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    if rect.height() <= 0.0 {
        return false;
    }
    let visible = rect.bottom().min(viewport_height) - rect.top().max(0.0);
    visible / rect.height() >= fraction
}
