use yew::prelude::*;

use crate::content::home::{Panel, BACKGROUND_COLORS, BACKGROUND_STOPS, PANELS, TEXT_COLORS};
use crate::content::projects::PROJECTS;
use crate::frontend::components::{
    color_declarations, AnimatedSection, Axis, DynamicHeading, HoverRevealCard, Modal, ParallaxLayer,
    ParallaxSpeed, ProjectCard, SectionHeader,
};
use crate::frontend::route::Link;
use crate::frontend::scroll::{use_motion_style, use_shared_scroll};
use crate::frontend::theme::use_page_palette;
use crate::motion::Keyframes;
use crate::palette::PaletteKey;
use crate::state::Route;
use crate::typography;

const THEMED_PATHS: &[(Route, &str)] = &[
    (Route::Activity, "Sports, hikes, scuba, and lifts."),
    (Route::Travel, "Map, countries, and photo modals."),
    (Route::Music, "Instruments, playlists, theater notes."),
    (Route::Timeline, "Tampa to Georgia Tech to startups."),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_page_palette(PaletteKey::Dark);
    let type_scale = typography::for_page(Route::Home);
    let chosen = use_state(|| None::<&'static Panel>);

    let node = use_node_ref();
    let page = use_shared_scroll();
    let background = Keyframes::colors(BACKGROUND_STOPS, BACKGROUND_COLORS);
    let text = Keyframes::colors(BACKGROUND_STOPS, TEXT_COLORS);
    use_motion_style(node.clone(), page, move |p| color_declarations(p, &background, &text, None));

    let on_reveal = {
        let chosen = chosen.clone();
        Callback::from(move |panel: &'static Panel| chosen.set(Some(panel)))
    };
    let on_close = {
        let chosen = chosen.clone();
        Callback::from(move |()| chosen.set(None))
    };

    html! {
        <div ref={node} class="page page-home">
            <section class="scene hero">
                <ParallaxLayer speed={ParallaxSpeed::Fast}>
                    <DynamicHeading profile={type_scale.heading} tag="h1" class="hero-title" animate=true>
                        {"Hi."}
                    </DynamicHeading>
                </ParallaxLayer>
                <ParallaxLayer speed={ParallaxSpeed::Medium} axis={Axis::X}>
                    <p class="hero-subtitle" style={type_scale.subheading.style()}>
                        {"Builder. Explorer. Systems thinker."}
                    </p>
                </ParallaxLayer>
            </section>

            <AnimatedSection class="scene statement">
                <ParallaxLayer speed={ParallaxSpeed::Medium}>
                    <DynamicHeading profile={type_scale.heading}>{"I'm Vinay."}</DynamicHeading>
                </ParallaxLayer>
                <ParallaxLayer speed={ParallaxSpeed::Slow}>
                    <p class="muted" style={type_scale.body.style()}>
                        {"Quiet confidence, high craft, and a scroll that feels like a story."}
                    </p>
                </ParallaxLayer>
            </AnimatedSection>

            <AnimatedSection id="panels" class="scene">
                <SectionHeader
                    title="Snapshot panels"
                    description="Hover to reveal memories, then tap to dive deeper."
                    profile={type_scale.heading}
                />
                <ParallaxLayer speed={ParallaxSpeed::Slow} class="reveal-grid">
                    { for PANELS.iter().map(|panel| html! {
                        <HoverRevealCard key={panel.id} {panel} on_reveal={on_reveal.clone()} />
                    }) }
                </ParallaxLayer>
            </AnimatedSection>

            <AnimatedSection id="projects" class="scene">
                <SectionHeader
                    eyebrow="Projects"
                    title="Projects in motion"
                    description="A curated pulse of Recall, Anchor, ReadTheField, and more."
                />
                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.id} {project} />
                    }) }
                </div>
                <div class="cta-row">
                    <Link href={Route::Projects.path()} class="button">{"View builds"}</Link>
                    <Link href={Route::Timeline.path()} class="button button-ghost">{"Explore timeline"}</Link>
                </div>
            </AnimatedSection>

            <AnimatedSection id="paths" class="scene">
                <SectionHeader
                    eyebrow="Themed paths"
                    title="Where to go next"
                    description="Activity, travel, music, and the full timeline live on their own pages."
                />
                <div class="path-grid">
                    { for THEMED_PATHS.iter().map(|&(route, description)| html! {
                        <Link key={route.path()} href={route.path()} class="path-card">
                            <span class="path-card-title">{route.label()}</span>
                            <span class="muted">{description}</span>
                        </Link>
                    }) }
                </div>
            </AnimatedSection>

            <Modal
                open={chosen.is_some()}
                {on_close}
                title={chosen.map(|panel| panel.title).unwrap_or_default()}
            >
                if let Some(panel) = *chosen {
                    <p class="muted">{panel.description}</p>
                    <ul class="modal-highlights">
                        { for panel.highlights.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                    </ul>
                    <Link href={panel.route} class="button">{"Open page"}</Link>
                }
            </Modal>
        </div>
    }
}
