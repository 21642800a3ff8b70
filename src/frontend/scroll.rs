use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{window, Event, HtmlElement};
use yew::prelude::*;

use super::env;
use crate::motion::{ScrollBroadcast, ScrollMetrics, ScrollSource, ScrollValue, VisibilityTracker, VisibilityWindow};

/// The window's vertical scroll. `scroll` and `resize` are coalesced so the
/// sampler runs at most once per animation frame.
pub struct DocumentScroll;

pub struct DocumentSubscription {
    _listeners: [EventListener; 2],
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl ScrollSource for DocumentScroll {
    type Handle = DocumentSubscription;

    fn metrics(&self) -> Option<ScrollMetrics> {
        env::scroll_metrics()
    }

    fn attach(&self, notify: Rc<dyn Fn()>) -> Option<Self::Handle> {
        let window = window()?;
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

        let schedule: Rc<dyn Fn()> = {
            let frame = Rc::clone(&frame);
            Rc::new(move || {
                if frame.borrow().is_some() {
                    return;
                }
                let slot = Rc::downgrade(&frame);
                let notify = Rc::clone(&notify);
                let handle = request_animation_frame(move |_| {
                    if let Some(slot) = slot.upgrade() {
                        slot.borrow_mut().take();
                    }
                    notify();
                });
                *frame.borrow_mut() = Some(handle);
            })
        };

        let on_scroll = {
            let schedule = Rc::clone(&schedule);
            EventListener::new(&window, "scroll", move |_: &Event| schedule())
        };
        let on_resize = EventListener::new(&window, "resize", move |_: &Event| schedule());

        Some(DocumentSubscription {
            _listeners: [on_scroll, on_resize],
            _frame: frame,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageScroll(pub ScrollValue);

#[derive(Properties, PartialEq)]
pub struct SharedScrollProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the page's only sampler. Key it by route so every page mount gets a
/// fresh one.
#[function_component(SharedScrollProvider)]
pub fn shared_scroll_provider(props: &SharedScrollProviderProps) -> Html {
    let broadcast = use_memo((), |_| ScrollBroadcast::provide(DocumentScroll));
    let context = PageScroll(broadcast.value());

    html! {
        <ContextProvider<PageScroll> {context}>
            {props.children.clone()}
        </ContextProvider<PageScroll>>
    }
}

#[hook]
pub fn use_shared_scroll() -> ScrollValue {
    let shared = use_context::<PageScroll>();
    let consumed = use_memo(shared, |shared| {
        ScrollBroadcast::consume(shared.as_ref().map(|page| page.0.clone()), || DocumentScroll)
    });
    consumed.value()
}

#[hook]
pub fn use_visibility_progress(node: NodeRef, visibility: VisibilityWindow) -> ScrollValue {
    let page = use_shared_scroll();
    let tracker = use_memo((), |_| VisibilityTracker::new(visibility, true));
    {
        let tracker = Rc::clone(&tracker);
        use_effect_with((page, node, visibility), move |(page, node, visibility)| {
            tracker.set_window(*visibility);
            let node = node.clone();
            let measure = move || tracker.update(env::element_geometry(&node));
            measure();
            let watch = page.watch(move |_| measure());
            move || drop(watch)
        });
    }
    tracker.value()
}

pub type Declarations = Vec<(&'static str, String)>;

#[hook]
pub fn use_motion_style<F>(node: NodeRef, value: ScrollValue, render: F)
where
    F: Fn(f64) -> Declarations + 'static,
{
    use_effect_with((node, value), move |(node, value)| {
        let node = node.clone();
        let apply = move |progress: f64| {
            let Some(element) = node.cast::<HtmlElement>() else {
                return;
            };
            let style = element.style();
            for (property, declaration) in render(progress) {
                let _ = style.set_property(property, &declaration);
            }
        };
        apply(value.get());
        let watch = value.watch(apply);
        move || drop(watch)
    });
}

