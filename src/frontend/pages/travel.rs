use tracing::debug;
use yew::prelude::*;

use crate::content::travel::{self, TravelCountry, TRAVEL_LOG};
use crate::frontend::components::{AnimatedSection, Modal, ParallaxLayer, ParallaxSpeed, ScrollScene, SectionHeader};
use crate::frontend::cursor::use_cursor_hover;
use crate::frontend::globe::GlobeHost;
use crate::frontend::theme::use_page_palette;
use crate::globe::GlobeEvent;
use crate::palette::PaletteKey;
use crate::state::{CursorMode, Route};
use crate::typography;

#[function_component(TravelPage)]
pub fn travel_page() -> Html {
    use_page_palette(PaletteKey::Dark);
    let type_scale = typography::for_page(Route::Travel);
    let selected = use_state(|| None::<&'static TravelCountry>);
    let hovered = use_state_eq(|| None::<(String, bool)>);

    let on_globe = {
        let selected = selected.clone();
        let hovered = hovered.clone();
        Callback::from(move |event: GlobeEvent| match event {
            GlobeEvent::CountrySelect { name, visited } => {
                debug!(%name, visited, "country selected");
                if visited {
                    if let Some(country) = travel::find_country(&name) {
                        selected.set(Some(country));
                    }
                }
            }
            GlobeEvent::CountryHover { name, visited } => hovered.set(name.map(|name| (name, visited))),
            GlobeEvent::StateChange { .. } => {}
        })
    };
    let open = {
        let selected = selected.clone();
        Callback::from(move |country: &'static TravelCountry| selected.set(Some(country)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <div class="page page-travel">
            <SectionHeader
                eyebrow="Travel"
                title="Country log"
                description="Drag the globe to explore the map, click a country to open a note."
                profile={type_scale.heading}
            />
            <ScrollScene class="travel-scene">
                <ParallaxLayer speed={ParallaxSpeed::Medium}>
                    <p class="eyebrow">
                        {format!("{} countries and counting", travel::VISITED.len())}
                    </p>
                </ParallaxLayer>
                <ParallaxLayer speed={ParallaxSpeed::Slow}>
                    <GlobeHost on_event={on_globe} />
                </ParallaxLayer>
                <p class="globe-hover muted" aria-live="polite">
                    { match &*hovered {
                        Some((name, true)) => format!("{name} · visited"),
                        Some((name, false)) => name.clone(),
                        None => String::new(),
                    } }
                </p>
            </ScrollScene>

            <AnimatedSection class="travel-cards">
                { for TRAVEL_LOG.iter().map(|country| html! {
                    <TravelCard key={country.code} {country} on_open={open.clone()} />
                }) }
            </AnimatedSection>

            <Modal
                open={selected.is_some()}
                {on_close}
                title={selected.map(|country| country.name).unwrap_or_default()}
            >
                if let Some(country) = *selected {
                    <CountryDetails {country} />
                }
            </Modal>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TravelCardProps {
    country: &'static TravelCountry,
    on_open: Callback<&'static TravelCountry>,
}

#[function_component(TravelCard)]
fn travel_card(props: &TravelCardProps) -> Html {
    let hover = use_cursor_hover(CursorMode::Reveal);
    let country = props.country;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(country))
    };

    html! {
        <button
            type="button"
            class="travel-card"
            {onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            onfocus={hover.onfocus}
            onblur={hover.onblur}
        >
            if let Some(image) = country.images.first() {
                <img src={*image} alt={country.name} loading="lazy" />
            }
            <span class="eyebrow">{country.region}</span>
            <span class="travel-card-title">{country.name}</span>
            <span class="muted">{country.year}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct CountryDetailsProps {
    country: &'static TravelCountry,
}

#[function_component(CountryDetails)]
fn country_details(props: &CountryDetailsProps) -> Html {
    let country = props.country;
    let native = typography::native_country_name(country.name)
        .map(|(name, family)| (name, format!("font-family: {family};")))
        .or_else(|| {
            travel::find_visited(country.name)
                .and_then(|visited| visited.native_name)
                .map(|name| (name, String::new()))
        });

    html! {
        <div class="country-details">
            if let Some((name, style)) = native {
                <p class="country-native" {style}>{name}</p>
            }
            <p class="eyebrow">{format!("{} · {}", country.region, country.year)}</p>
            <p>{country.highlight}</p>
            if !country.states.is_empty() {
                <ul class="country-states">
                    { for country.states.iter().map(|state| html! { <li key={*state}>{*state}</li> }) }
                </ul>
            }
            <div class="country-gallery">
                { for country.images.iter().map(|image| html! {
                    <img key={*image} src={*image} alt={country.name} loading="lazy" />
                }) }
            </div>
        </div>
    }
}
