use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

use crate::config::{ConfigError, SiteConfig, CONFIG_ELEMENT_ID};
use crate::motion::{ElementGeometry, ScrollMetrics};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn has_pointer_hover() -> bool {
    !media_matches("(hover: none)")
}

pub fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let root = win.document()?.document_element()?;

    Some(ScrollMetrics {
        offset: win.scroll_y().ok()?,
        viewport: win.inner_height().ok()?.as_f64()?,
        content: f64::from(root.scroll_height()),
    })
}

pub fn scroll_limit() -> f64 {
    scroll_metrics()
        .map(|metrics| (metrics.content - metrics.viewport).max(0.0))
        .unwrap_or(0.0)
}

pub fn element_geometry(node: &NodeRef) -> Option<ElementGeometry> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();

    Some(ElementGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport: viewport_height()?,
    })
}

/// Jumps without the stylesheet's `scroll-behavior` getting involved.
pub fn scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Instant);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

pub fn set_root_style_property(name: &str, value: &str) {
    let root = document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property(name, value);
    }
}

/// Adds or removes `<meta name="robots" content="noindex, nofollow">`.
pub fn set_indexable(indexable: bool) {
    let Some(document) = document() else {
        return;
    };
    let existing = document.query_selector("meta[name='robots']").ok().flatten();
    match (indexable, existing) {
        (true, Some(meta)) => meta.remove(),
        (false, None) => {
            let head = document.query_selector("head").ok().flatten();
            if let (Some(head), Ok(meta)) = (head, document.create_element("meta")) {
                let _ = meta.set_attribute("name", "robots");
                let _ = meta.set_attribute("content", "noindex, nofollow");
                let _ = head.append_child(&meta);
            }
        }
        _ => {}
    }
}

pub fn within(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Reads the optional JSON override block. A broken block is reported back
/// so it can be logged once logging is up; the defaults apply either way.
pub fn load_config() -> (SiteConfig, Option<ConfigError>) {
    let raw = document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw.as_deref().map(str::trim) {
        None | Some("") => (SiteConfig::default(), None),
        Some(raw) => match SiteConfig::from_json(raw) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        },
    }
}
