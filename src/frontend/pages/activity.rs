use yew::prelude::*;

use crate::content::activity::{Layer, Section, LAYERS, SECTIONS, ZONES, ZONE_BOUNDARIES};
use crate::frontend::components::{
    use_scene_progress, AnimatedSection, DynamicHeading, ParallaxLayer, ParallaxSpeed, ScrollScene,
    SectionHeader,
};
use crate::frontend::scroll::use_motion_style;
use crate::frontend::theme::{use_page_palette, use_theme_zones};
use crate::motion::{interpolate, Keyframes, MapOptions, ScrollValue, VisibilityWindow};
use crate::palette::PaletteKey;
use crate::state::Route;
use crate::typography;

const CHAPTERS: &[(&str, &str, &str)] = &[
    ("Chapter 01", "Sports collage", "Calm chaos: a collage of gear pulses in the background."),
    ("Chapter 02", "Hiking atmosphere", "Outdoorsy silhouettes and airy offsets create a grounded palette."),
    ("Chapter 03", "Scuba calm", "Oceanic depth with mask and fin silhouettes."),
];

#[function_component(ActivityPage)]
pub fn activity_page() -> Html {
    use_page_palette(PaletteKey::Sports);
    let type_scale = typography::for_page(Route::Activity);

    html! {
        <div class="page page-activity">
            <SectionHeader
                eyebrow="Activity"
                title="Cinematic chapters"
                description="Sports, then hiking, then scuba, with layered worlds and slow parallax."
                profile={type_scale.heading}
            />
            <ScrollScene class="activity-scene" min_height="420vh" window={VisibilityWindow::CONTAINED}>
                <ActivityZones />
                <div class="activity-backdrop" aria-hidden="true">
                    { for LAYERS.iter().map(|layer| html! {
                        <ActivityLayer key={layer.zone.as_str()} {layer} />
                    }) }
                </div>
                { for CHAPTERS.iter().enumerate().map(|(index, &(eyebrow, title, blurb))| {
                    let sections = SECTIONS.get(index..(index + 2).min(SECTIONS.len())).unwrap_or_default();
                    html! {
                        <AnimatedSection key={title} class="activity-chapter">
                            <p class="eyebrow">{eyebrow}</p>
                            <DynamicHeading profile={type_scale.heading}>{title}</DynamicHeading>
                            <p class="muted" style={type_scale.body.style()}>{blurb}</p>
                            <ParallaxLayer speed={ParallaxSpeed::Slow} class="activity-grid">
                                { for sections.iter().map(|section| html! {
                                    <ActivityCard key={section.id} {section} />
                                }) }
                            </ParallaxLayer>
                        </AnimatedSection>
                    }
                }) }
            </ScrollScene>
        </div>
    }
}

/// Commits the palette zone matching the scene's progress.
#[function_component(ActivityZones)]
fn activity_zones() -> Html {
    let fallback = use_memo((), |_| ScrollValue::constant(0.0));
    let progress = use_scene_progress().unwrap_or_else(|| (*fallback).clone());
    use_theme_zones(progress, ZONE_BOUNDARIES, ZONES);
    Html::default()
}

#[derive(Properties, PartialEq)]
struct ActivityLayerProps {
    layer: &'static Layer,
}

#[function_component(ActivityLayer)]
fn activity_layer(props: &ActivityLayerProps) -> Html {
    let node = use_node_ref();
    let layer = props.layer;
    let fallback = use_memo((), |_| ScrollValue::constant(0.0));
    let progress = use_scene_progress().unwrap_or_else(|| (*fallback).clone());
    let opacity = Keyframes::numbers(layer.stops, layer.opacity);
    use_motion_style(node.clone(), progress, move |p| {
        vec![("opacity", format!("{:.3}", interpolate(p, &opacity, MapOptions::CLAMP)))]
    });

    html! {
        <div
            ref={node}
            class={classes!("activity-bg", format!("activity-bg-{}", layer.zone.as_str()))}
            style={format!("background-image: url({});", layer.image)}
        />
    }
}

#[derive(Properties, PartialEq)]
struct ActivityCardProps {
    section: &'static Section,
}

#[function_component(ActivityCard)]
fn activity_card(props: &ActivityCardProps) -> Html {
    let section = props.section;
    html! {
        <article id={section.id} class="activity-card">
            <div class="activity-card-image">
                <img src={section.image} alt={section.title} loading="lazy" />
                <span class="badge">{section.badge}</span>
            </div>
            <h3>{section.title}</h3>
            <p class="eyebrow">{section.subtitle}</p>
            <p class="muted">{section.description}</p>
        </article>
    }
}
