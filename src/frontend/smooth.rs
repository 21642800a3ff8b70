use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, WheelEvent};
use yew::prelude::*;

use super::env;
use crate::motion::smooth::{SmoothOptions, SmoothScroll};

/// Wheel input inside an element carrying this attribute scrolls natively.
pub const PREVENT_ATTRIBUTE: &str = "data-smooth-prevent";

const LINE_HEIGHT_PX: f64 = 16.0;

struct Driver {
    physics: RefCell<SmoothScroll>,
    frame: RefCell<Option<AnimationFrame>>,
    last_frame: Cell<Option<f64>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Driver {
    fn install(options: SmoothOptions) -> Option<Rc<Self>> {
        let window = window()?;
        let metrics = env::scroll_metrics()?;
        let limit = (metrics.content - metrics.viewport).max(0.0);

        let driver = Rc::new(Self {
            physics: RefCell::new(SmoothScroll::new(options, metrics.offset, limit)),
            frame: RefCell::new(None),
            last_frame: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        let mut listeners = Vec::with_capacity(3);

        let weak = Rc::downgrade(&driver);
        listeners.push(EventListener::new_with_options(
            &window,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if let Some(driver) = weak.upgrade() {
                    driver.on_wheel(event);
                }
            },
        ));

        let weak = Rc::downgrade(&driver);
        listeners.push(EventListener::new(&window, "scroll", move |_: &Event| {
            if let (Some(driver), Some(metrics)) = (weak.upgrade(), env::scroll_metrics()) {
                driver.physics.borrow_mut().sync(metrics.offset);
            }
        }));

        let weak = Rc::downgrade(&driver);
        listeners.push(EventListener::new(&window, "resize", move |_: &Event| {
            if let Some(driver) = weak.upgrade() {
                driver.refresh_limit();
            }
        }));

        *driver.listeners.borrow_mut() = listeners;
        debug!(duration = options.duration_secs, "smooth scrolling attached");
        Some(driver)
    }

    fn refresh_limit(&self) {
        self.physics.borrow_mut().set_limit(env::scroll_limit());
    }

    fn on_wheel(self: &Rc<Self>, event: &Event) {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        // Pinch zoom and opted-out overlays keep native behaviour.
        if wheel.ctrl_key() || env::within(event.target(), &format!("[{PREVENT_ATTRIBUTE}]")) {
            return;
        }

        let delta = match wheel.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * LINE_HEIGHT_PX,
            WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * env::viewport_height().unwrap_or(800.0),
            _ => wheel.delta_y(),
        };

        self.refresh_limit();
        wheel.prevent_default();
        if self.physics.borrow_mut().wheel(delta) {
            self.queue_frame();
        }
    }

    fn queue_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(driver) = weak.upgrade() {
                driver.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let dt_secs = self
            .last_frame
            .replace(Some(timestamp))
            .map(|previous| (timestamp - previous).max(0.0) / 1000.0)
            .unwrap_or(0.0);

        let next = self.physics.borrow_mut().tick(dt_secs);
        let Some(position) = next else {
            self.last_frame.set(None);
            return;
        };
        env::scroll_to(position);

        if self.physics.borrow().is_animating() {
            self.queue_frame();
        } else {
            self.last_frame.set(None);
        }
    }

    fn jump(&self, position: f64) {
        self.frame.borrow_mut().take();
        self.last_frame.set(None);
        self.refresh_limit();
        self.physics.borrow_mut().reset(position);
        env::scroll_to(position);
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        debug!("smooth scrolling detached");
    }
}

/// Context handle. Inactive when smoothing is disabled or unavailable, in
/// which case scrolling falls through to the browser.
#[derive(Clone, Default)]
pub struct SmoothHandle {
    driver: Option<Rc<Driver>>,
}

impl PartialEq for SmoothHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.driver, &other.driver) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SmoothHandle {
    /// Jumps immediately, cancelling any wheel animation in flight.
    pub fn scroll_to(&self, position: f64) {
        match &self.driver {
            Some(driver) => driver.jump(position),
            None => env::scroll_to(position),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProviderProps {
    pub options: SmoothOptions,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProviderProps) -> Html {
    let handle = use_state(SmoothHandle::default);
    {
        let handle = handle.clone();
        use_effect_with(props.options, move |options| {
            let driver = if options.enabled && !env::prefers_reduced_motion() {
                Driver::install(*options)
            } else {
                debug!("smooth scrolling disabled");
                None
            };
            handle.set(SmoothHandle { driver });
            move || handle.set(SmoothHandle::default())
        });
    }

    html! {
        <ContextProvider<SmoothHandle> context={(*handle).clone()}>
            {props.children.clone()}
        </ContextProvider<SmoothHandle>>
    }
}

#[hook]
pub fn use_smooth_scroll() -> SmoothHandle {
    use_context::<SmoothHandle>().unwrap_or_default()
}
