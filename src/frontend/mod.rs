//! Browser entry point: providers, layout shell and page switch.

mod components;
mod cursor;
mod env;
mod globe;
mod logging;
mod pages;
mod route;
mod scroll;
mod smooth;
mod theme;

use std::rc::Rc;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Link as ContentLink, FOOTER_PROJECTS, FOOTER_SOCIALS};
use crate::palette::PaletteKey;
use crate::state::Route;
use cursor::CursorProvider;
use route::{use_route, BottomNav, Link, RouteProgressBar, Router};
use scroll::SharedScrollProvider;
use smooth::SmoothScrollProvider;
use theme::ThemeProvider;

const MOUNT_POINT: &str = "app";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing #{0} mount point")]
    MountPoint(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteContext(pub Rc<SiteConfig>);

/// Site configuration, or the defaults when rendered outside [`App`].
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<SiteContext>()
        .map(|context| context.0)
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;

    html! {
        <ContextProvider<SiteContext> context={SiteContext(Rc::clone(config))}>
            <CursorProvider trail={config.cursor.trail}>
                <SmoothScrollProvider options={config.smooth}>
                    <Router progress_ms={config.route_progress_ms}>
                        <Shell />
                    </Router>
                </SmoothScrollProvider>
            </CursorProvider>
        </ContextProvider<SiteContext>>
    }
}

/// Everything below the router. The scroll provider is keyed by route so a
/// navigation tears the old page's sampler down before the next one mounts.
#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route();
    use_effect_with(route, |route| env::set_indexable(route.indexable()));

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <RouteProgressBar />
            <header class="site-header">
                <Link href={Route::Home.path()} class="site-mark">{"Vinay"}</Link>
                <nav class="site-nav" aria-label="Primary">
                    { for Route::NAV.iter().skip(1).map(|&target| html! {
                        <Link
                            key={target.path()}
                            href={target.path()}
                            class={classes!("site-nav-link", (target == route).then_some("is-active"))}
                        >
                            {target.label()}
                        </Link>
                    }) }
                </nav>
            </header>
            <SharedScrollProvider key={route.path()}>
                <ThemeProvider initial={PaletteKey::Dark}>
                    <main id="content">
                        {pages::switch(route)}
                    </main>
                    <Footer />
                    <BottomNav />
                </ThemeProvider>
            </SharedScrollProvider>
        </>
    }
}

fn footer_links(links: &'static [ContentLink]) -> Html {
    html! {
        <ul class="footer-links">
            { for links.iter().map(|link| html! {
                <li key={link.href}>
                    <Link href={link.href}>{link.label}</Link>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div>
                <p class="eyebrow">{"Elsewhere"}</p>
                {footer_links(FOOTER_SOCIALS)}
            </div>
            <div>
                <p class="eyebrow">{"Stories"}</p>
                {footer_links(FOOTER_PROJECTS)}
            </div>
        </footer>
    }
}

/// Reads the configuration, installs logging and mounts [`App`] on `#app`.
pub fn run() -> Result<(), SiteError> {
    let (config, config_error) = env::load_config();
    logging::init(config.level_filter().unwrap_or(LevelFilter::INFO));
    if let Some(err) = config_error {
        warn!(error = %err, "site config ignored, using defaults");
    }

    let root = env::document()
        .and_then(|document| document.get_element_by_id(MOUNT_POINT))
        .ok_or(SiteError::MountPoint(MOUNT_POINT))?;

    info!(
        smooth = config.smooth.enabled,
        route_progress_ms = config.route_progress_ms,
        "mounting site"
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config: Rc::new(config) }).render();
    Ok(())
}
