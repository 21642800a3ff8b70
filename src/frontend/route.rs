use std::cell::RefCell;
use std::rc::Rc;

use gloo::history::{BrowserHistory, History};
use gloo::timers::callback::Timeout;
use tracing::debug;
use yew::prelude::*;

use super::cursor::use_cursor_hover;
use super::env;
use super::scroll::use_shared_scroll;
use super::smooth::use_smooth_scroll;
use crate::state::{CursorMode, NavVisibility, Route, RouteProgress};

/// Current route and navigation. `loading` is the cosmetic transition flag.
#[derive(Clone, PartialEq)]
pub struct RouterHandle {
    pub route: Route,
    pub loading: bool,
    navigate: Callback<AttrValue>,
}

impl RouterHandle {
    pub fn push(&self, href: AttrValue) {
        self.navigate.emit(href);
    }
}

#[derive(Properties, PartialEq)]
pub struct RouterProps {
    pub progress_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Router)]
pub fn router(props: &RouterProps) -> Html {
    let history = use_memo((), |_| BrowserHistory::new());
    let route = use_state_eq(|| Route::from_path(history.location().path()));
    let loading = use_state_eq(|| false);
    let progress = use_mut_ref(RouteProgress::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    let smooth = use_smooth_scroll();

    {
        let history = Rc::clone(&history);
        let route = route.clone();
        let loading = loading.clone();
        use_effect_with((props.progress_ms, smooth), move |(delay, smooth)| {
            let delay = *delay;
            let smooth = smooth.clone();
            let listener = {
                let history = Rc::clone(&history);
                history.listen(move || {
                    let location = history.location();
                    let next = Route::from_path(location.path());
                    debug!(path = location.path(), route = %next, "navigated");
                    route.set(next);

                    let pulse = progress.borrow_mut().begin();
                    loading.set(true);
                    let settle = {
                        let progress = progress.clone();
                        let loading = loading.clone();
                        Timeout::new(delay, move || {
                            if progress.borrow_mut().settle(pulse) {
                                loading.set(false);
                            }
                        })
                    };
                    *timer.borrow_mut() = Some(settle);

                    if location.hash().is_empty() {
                        smooth.scroll_to(0.0);
                    }
                })
            };
            move || drop(listener)
        });
    }

    let navigate = {
        let history = Rc::clone(&history);
        Callback::from(move |href: AttrValue| history.push(href.to_string()))
    };

    let handle = RouterHandle {
        route: *route,
        loading: *loading,
        navigate,
    };

    html! {
        <ContextProvider<RouterHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RouterHandle>>
    }
}

#[hook]
pub fn use_router() -> Option<RouterHandle> {
    use_context::<RouterHandle>()
}

#[hook]
pub fn use_route() -> Route {
    use_router().map(|router| router.route).unwrap_or(Route::Home)
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-app anchor. Modified clicks and external targets fall through to the
/// browser.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let router = use_router();
    let hover = use_cursor_hover(CursorMode::Link);
    let external = props.href.contains(':');

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            let modified = event.ctrl_key() || event.meta_key() || event.shift_key() || event.button() != 0;
            if external || modified {
                return;
            }
            if let Some(router) = &router {
                event.prevent_default();
                router.push(href.clone());
            }
        })
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            target={external.then_some("_blank")}
            rel={external.then_some("noopener noreferrer")}
            {onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            onfocus={hover.onfocus}
            onblur={hover.onblur}
        >
            {props.children.clone()}
        </a>
    }
}

/// Thin bar at the top of the viewport while a navigation settles.
#[function_component(RouteProgressBar)]
pub fn route_progress_bar() -> Html {
    let loading = use_router().map(|router| router.loading).unwrap_or(false);

    html! {
        <div class={classes!("route-progress", loading.then_some("is-active"))} aria-hidden="true">
            <div class="route-progress-fill" />
        </div>
    }
}

#[function_component(BottomNav)]
pub fn bottom_nav() -> Html {
    let route = use_route();
    let page = use_shared_scroll();
    let visible = use_state_eq(|| true);

    {
        let visible = visible.setter();
        use_effect_with(page, move |page| {
            let nav = RefCell::new(NavVisibility::default());
            let watch = page.watch(move |_| {
                let Some(metrics) = env::scroll_metrics() else {
                    return;
                };
                let changed = nav
                    .borrow_mut()
                    .update(metrics.offset, metrics.viewport, metrics.content);
                if let Some(next) = changed {
                    visible.set(next);
                }
            });
            move || drop(watch)
        });
    }

    html! {
        <nav
            class={classes!("bottom-nav", (!*visible).then_some("is-hidden"))}
            aria-label="Pages"
            aria-hidden={(!*visible).to_string()}
        >
            <div class="bottom-nav-links">
                { for Route::NAV.iter().map(|&target| html! {
                    <Link
                        key={target.path()}
                        href={target.path()}
                        class={classes!("bottom-nav-link", (target == route).then_some("is-active"))}
                    >
                        {target.label()}
                    </Link>
                }) }
            </div>
        </nav>
    }
}
