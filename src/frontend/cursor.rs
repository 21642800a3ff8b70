use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, PointerEvent};
use yew::prelude::*;

use super::env;
use crate::state::{CursorMode, CursorState, CursorToken, SharedCursor, Trail};

/// Below this distance the ring is considered caught up and the frame loop
/// parks until the pointer moves again.
const SETTLE_PX: f64 = 0.1;

#[derive(Clone)]
pub struct CursorHandle {
    shared: SharedCursor,
    publish: UseStateSetter<CursorState>,
}

impl PartialEq for CursorHandle {
    fn eq(&self, other: &Self) -> bool {
        self.shared == other.shared
    }
}

impl CursorHandle {
    pub fn state(&self) -> CursorState {
        self.shared.get()
    }

    pub fn enter(&self, mode: CursorMode) -> CursorToken {
        let token = self.shared.enter(mode);
        self.publish();
        token
    }

    pub fn leave(&self, token: CursorToken) {
        if self.shared.leave(token) {
            self.publish();
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.shared.set_hidden(hidden);
        self.publish();
    }

    fn publish(&self) {
        self.publish.set(self.shared.get());
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorProviderProps {
    pub trail: f64,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(CursorProvider)]
pub fn cursor_provider(props: &CursorProviderProps) -> Html {
    let shared = use_memo((), |_| SharedCursor::default());
    let snapshot = use_state_eq(CursorState::default);
    let enabled = *use_memo((), |_| env::has_pointer_hover() && !env::prefers_reduced_motion());

    let handle = CursorHandle {
        shared: (*shared).clone(),
        publish: snapshot.setter(),
    };

    html! {
        <ContextProvider<CursorHandle> context={handle}>
            if enabled {
                <Cursor state={*snapshot} trail={props.trail} />
            }
            {props.children.clone()}
        </ContextProvider<CursorHandle>>
    }
}

#[hook]
pub fn use_cursor() -> Option<CursorHandle> {
    use_context::<CursorHandle>()
}

pub struct CursorHover {
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub onfocus: Callback<FocusEvent>,
    pub onblur: Callback<FocusEvent>,
}

/// Enter/leave callbacks that switch the cursor to `mode` while hovered or
/// focused. A leave only resets the mode this element set itself.
#[hook]
pub fn use_cursor_hover(mode: CursorMode) -> CursorHover {
    let cursor = use_cursor();
    let token = use_mut_ref(|| None::<CursorToken>);

    let enter = {
        let cursor = cursor.clone();
        let token = token.clone();
        Rc::new(move || {
            if let Some(cursor) = &cursor {
                *token.borrow_mut() = Some(cursor.enter(mode));
            }
        })
    };
    let leave = {
        let cursor = cursor.clone();
        let token = token.clone();
        Rc::new(move || {
            if let (Some(cursor), Some(token)) = (&cursor, token.borrow_mut().take()) {
                cursor.leave(token);
            }
        })
    };

    {
        let leave = Rc::clone(&leave);
        use_effect_with((), move |_| move || leave());
    }

    CursorHover {
        onmouseenter: {
            let enter = Rc::clone(&enter);
            Callback::from(move |_: MouseEvent| enter())
        },
        onmouseleave: {
            let leave = Rc::clone(&leave);
            Callback::from(move |_: MouseEvent| leave())
        },
        onfocus: Callback::from(move |_: FocusEvent| enter()),
        onblur: Callback::from(move |_: FocusEvent| leave()),
    }
}

struct TrailLoop {
    trail: RefCell<Trail>,
    target: Cell<(f64, f64)>,
    ring: NodeRef,
    frame: RefCell<Option<AnimationFrame>>,
}

impl TrailLoop {
    fn queue(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(trail) = weak.upgrade() {
                trail.step();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn step(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let (x, y) = self.target.get();
        let (ring_x, ring_y) = {
            let mut trail = self.trail.borrow_mut();
            trail.step(x, y);
            (trail.x, trail.y)
        };

        if let Some(ring) = self.ring.cast::<HtmlElement>() {
            let _ = ring.style().set_property(
                "--cursor-ring-position",
                &format!("translate3d({ring_x:.2}px, {ring_y:.2}px, 0)"),
            );
        }

        if (x - ring_x).abs() > SETTLE_PX || (y - ring_y).abs() > SETTLE_PX {
            self.queue();
        }
    }
}

#[derive(Properties, PartialEq)]
struct CursorProps {
    state: CursorState,
    trail: f64,
}

#[function_component(Cursor)]
fn cursor(props: &CursorProps) -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();
    let cursor = use_cursor();

    {
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with(props.trail, move |trail| {
            let trail_loop = Rc::new(TrailLoop {
                trail: RefCell::new(Trail::new(*trail)),
                target: Cell::new(Trail::PARKED),
                ring,
                frame: RefCell::new(None),
            });

            let listeners = env::document().map(|document| {
                let on_move = {
                    let trail_loop = Rc::clone(&trail_loop);
                    let cursor = cursor.clone();
                    EventListener::new(&document, "pointermove", move |event: &Event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                        trail_loop.target.set((x, y));
                        if let Some(dot) = dot.cast::<HtmlElement>() {
                            let _ = dot.style().set_property(
                                "--cursor-dot-position",
                                &format!("translate3d({x}px, {y}px, 0)"),
                            );
                        }
                        if let Some(cursor) = cursor.as_ref().filter(|c| c.state().hidden()) {
                            cursor.set_hidden(false);
                        }
                        trail_loop.queue();
                    })
                };
                let on_leave = document.document_element().map(|root| {
                    EventListener::new(&root, "mouseleave", move |_: &Event| {
                        if let Some(cursor) = &cursor {
                            cursor.set_hidden(true);
                        }
                    })
                });
                (on_move, on_leave)
            });

            move || {
                drop(listeners);
                trail_loop.frame.borrow_mut().take();
            }
        });
    }

    let mode = props.state.mode();
    {
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with(mode, move |mode| {
            if let Some(dot) = dot.cast::<HtmlElement>() {
                let _ = dot
                    .style()
                    .set_property("--cursor-dot-scale", &mode.dot_scale().to_string());
            }
            if let Some(ring) = ring.cast::<HtmlElement>() {
                let style = ring.style();
                let _ = style.set_property("--cursor-ring-scale", &mode.ring_scale().to_string());
                let _ = style.set_property("--cursor-ring-opacity", &mode.ring_opacity().to_string());
            }
            || ()
        });
    }

    html! {
        <>
            <div
                ref={dot}
                class={classes!("custom-cursor", props.state.hidden().then_some("cursor-hidden"))}
                data-mode={mode.as_str()}
                aria-hidden="true"
            />
            <div
                ref={ring}
                class={classes!("cursor-ring", props.state.hidden().then_some("cursor-hidden"))}
                data-mode={mode.as_str()}
                aria-hidden="true"
            />
        </>
    }
}
