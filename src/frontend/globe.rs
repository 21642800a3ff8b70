use js_sys::{Array, Function, Object, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, HtmlCanvasElement};
use yew::prelude::*;

use super::env;
use crate::content::travel;
use crate::globe::{GlobeError, GlobeEvent, GlobeStatus, RawGlobeEvent};

const WIDGET_GLOBAL: &str = "PortfolioGlobe";

fn webgl_supported() -> bool {
    let Some(canvas) = env::document()
        .and_then(|d| d.create_element("canvas").ok())
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return false;
    };

    ["webgl", "experimental-webgl"]
        .into_iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}

fn field(source: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(source, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn describe(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error.as_string().unwrap_or_else(|| "unknown error".to_string())
}

fn read_event(value: &JsValue) -> Option<GlobeEvent> {
    let raw = RawGlobeEvent {
        kind: field(value, "type")?.as_string()?,
        name: field(value, "name").and_then(|v| v.as_string()),
        visited: field(value, "visited").and_then(|v| v.as_bool()),
        status: field(value, "status").and_then(|v| v.as_string()),
        error: field(value, "error").map(|v| describe(&v)),
    };
    GlobeEvent::from_raw(raw)
}

/// A mounted widget. Dropping it calls the widget's `destroy` and releases
/// the event closure.
struct Mounted {
    widget: JsValue,
    _on_event: Closure<dyn Fn(JsValue)>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        let destroy = field(&self.widget, "destroy").and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            if let Err(err) = destroy.call0(&self.widget) {
                warn!(error = %describe(&err), "globe teardown failed");
            }
        }
    }
}

fn mount(container: &Element, on_event: Callback<GlobeEvent>) -> Result<Mounted, GlobeError> {
    if !webgl_supported() {
        return Err(GlobeError::Unsupported);
    }

    let api = window()
        .and_then(|w| field(&w, WIDGET_GLOBAL))
        .ok_or(GlobeError::Missing)?;
    let mount = field(&api, "mount")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(GlobeError::Missing)?;

    let visited: Array = travel::atlas_names().map(JsValue::from_str).collect();
    let callback = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| match read_event(&event) {
        Some(event) => on_event.emit(event),
        None => debug!("ignored globe event"),
    });

    let options = Object::new();
    let set = |key: &str, value: &JsValue| {
        Reflect::set(&options, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|err| GlobeError::Widget(describe(&err)))
    };
    set("visited", &visited)?;
    set("reducedMotion", &JsValue::from_bool(env::prefers_reduced_motion()))?;
    set("onEvent", callback.as_ref())?;

    let widget = mount
        .call2(&api, container, &options)
        .map_err(|err| GlobeError::Widget(describe(&err)))?;

    Ok(Mounted {
        widget,
        _on_event: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct GlobeHostProps {
    pub on_event: Callback<GlobeEvent>,
}

/// Mounts the external globe, falling back to a plain list of visited
/// countries on any failure. The widget never touches scroll or theme state.
#[function_component(GlobeHost)]
pub fn globe_host(props: &GlobeHostProps) -> Html {
    let container = use_node_ref();
    let status = use_state_eq(|| GlobeStatus::Loading);

    {
        let container = container.clone();
        let status = status.clone();
        let forward = props.on_event.clone();
        use_effect_with((), move |_| {
            let on_event = {
                let status = status.clone();
                let forward = forward.clone();
                Callback::from(move |event: GlobeEvent| {
                    if let GlobeEvent::StateChange { status: next, error } = &event {
                        if let Some(error) = error {
                            warn!(%error, "globe reported an error");
                        }
                        status.set(*next);
                    }
                    forward.emit(event);
                })
            };

            let mounted = match container.cast::<Element>() {
                Some(element) => mount(&element, on_event),
                None => Err(GlobeError::Missing),
            };
            let mounted = match mounted {
                Ok(mounted) => {
                    debug!("globe mounted");
                    Some(mounted)
                }
                Err(err) => {
                    warn!(error = %err, "globe unavailable, showing fallback");
                    status.set(err.status());
                    forward.emit(GlobeEvent::StateChange {
                        status: err.status(),
                        error: Some(err.to_string()),
                    });
                    None
                }
            };
            move || drop(mounted)
        });
    }

    let message = match *status {
        GlobeStatus::Loading => Some("Loading globe…"),
        GlobeStatus::Ready => None,
        GlobeStatus::Unsupported => Some("WebGL not available"),
        GlobeStatus::Failed => Some("Interactive globe coming soon"),
    };

    html! {
        <div class="globe-host">
            <div
                ref={container}
                class={classes!("globe-canvas", status.needs_fallback().then_some("is-hidden"))}
            />
            if let Some(message) = message {
                <GlobeFallback {message} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GlobeFallbackProps {
    message: &'static str,
}

#[function_component(GlobeFallback)]
fn globe_fallback(props: &GlobeFallbackProps) -> Html {
    html! {
        <div class="globe-fallback-panel">
            <p class="eyebrow">{"Globe"}</p>
            <h3>{props.message}</h3>
            <p class="muted">{"Visited countries:"}</p>
            <ul class="globe-fallback-list">
                { for travel::VISITED.iter().map(|country| html! {
                    <li key={country.code}>{country.name}</li>
                }) }
            </ul>
        </div>
    }
}
