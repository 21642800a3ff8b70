use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

use super::cursor::{use_cursor, use_cursor_hover};
use super::env;
use super::route::Link;
use super::scroll::{use_motion_style, use_visibility_progress, Declarations};
use super::use_site_config;
use crate::content::home::Panel;
use crate::content::projects::Project;
use crate::content::timeline::Era;
use crate::motion::{
    ease_out_css, interpolate, Intersection, Keyframes, MapOptions, Rgba, ScrollValue,
    VisibilityWindow, DURATION_LONG_SECS,
};
use crate::state::CursorMode;
use crate::typography::TypographyProfile;

const REVEAL_WINDOW: VisibilityWindow = VisibilityWindow {
    entry: Intersection::START_END,
    exit: Intersection::END_END,
};
const REVEAL_AMOUNT: f64 = 0.25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallaxSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    X,
    #[default]
    Y,
}

#[derive(Properties, PartialEq)]
pub struct ParallaxLayerProps {
    #[prop_or_default]
    pub speed: ParallaxSpeed,
    #[prop_or_default]
    pub axis: Axis,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ParallaxLayer)]
pub fn parallax_layer(props: &ParallaxLayerProps) -> Html {
    let node = use_node_ref();
    let config = use_site_config();
    let progress = use_visibility_progress(node.clone(), VisibilityWindow::TRANSIT);

    let amount = if env::prefers_reduced_motion() {
        0.0
    } else {
        match props.speed {
            ParallaxSpeed::Slow => config.parallax.slow,
            ParallaxSpeed::Medium => config.parallax.medium,
            ParallaxSpeed::Fast => config.parallax.fast,
        }
    };
    let axis = props.axis;
    let keyframes = Keyframes::numbers(&[0.0, 1.0], &[0.0, -amount]);
    use_motion_style(node.clone(), progress, move |p| {
        let offset = interpolate(p, &keyframes, MapOptions::CLAMP);
        let transform = match axis {
            Axis::X => format!("translate3d({offset:.2}px, 0, 0)"),
            Axis::Y => format!("translate3d(0, {offset:.2}px, 0)"),
        };
        vec![("transform", transform)]
    });

    html! {
        <div ref={node} class={classes!("parallax-layer", props.class.clone())}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneProgress(pub ScrollValue);

#[hook]
pub fn use_scene_progress() -> Option<ScrollValue> {
    use_context::<SceneProgress>().map(|scene| scene.0)
}

#[derive(Properties, PartialEq)]
pub struct ScrollSceneProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("120vh"))]
    pub min_height: AttrValue,
    #[prop_or_default]
    pub pin: bool,
    #[prop_or_default]
    pub window: VisibilityWindow,
    #[prop_or_default]
    pub children: Html,
}

/// A tall section whose own progress is available to everything inside it.
/// Reduced motion freezes the progress at 0.
#[function_component(ScrollScene)]
pub fn scroll_scene(props: &ScrollSceneProps) -> Html {
    let node = use_node_ref();
    let tracked = use_visibility_progress(node.clone(), props.window);
    let frozen = use_memo((), |_| ScrollValue::constant(0.0));
    let progress = if env::prefers_reduced_motion() {
        (*frozen).clone()
    } else {
        tracked
    };

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("scroll-scene", props.pin.then_some("scroll-scene-pin"), props.class.clone())}
            style={format!("min-height: {};", props.min_height)}
        >
            <ContextProvider<SceneProgress> context={SceneProgress(progress)}>
                {props.children.clone()}
            </ContextProvider<SceneProgress>>
        </section>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ThemeTransitionProps {
    pub progress: ScrollValue,
    #[prop_or(ColorPair { background: "#07150D", text: "#ffffff" })]
    pub from: ColorPair,
    #[prop_or(ColorPair { background: "#F3F7F3", text: "#050505" })]
    pub to: ColorPair,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeTransition)]
pub fn theme_transition(props: &ThemeTransitionProps) -> Html {
    let node = use_node_ref();
    let stops = [0.0, 0.7];
    let background = Keyframes::colors(&stops, &[props.from.background, props.to.background]);
    let text = Keyframes::colors(&stops, &[props.from.text, props.to.text]);
    let border = Keyframes::colors(&stops, &["rgba(255, 255, 255, 0.08)", "rgba(0, 0, 0, 0.08)"]);
    let reduced = env::prefers_reduced_motion();

    use_motion_style(node.clone(), props.progress.clone(), move |p| {
        let p = if reduced { 0.0 } else { p };
        color_declarations(p, &background, &text, Some(&border))
    });

    html! {
        <div ref={node} class={props.class.clone()}>
            {props.children.clone()}
        </div>
    }
}

pub fn color_declarations(
    progress: f64,
    background: &Keyframes<Rgba>,
    text: &Keyframes<Rgba>,
    border: Option<&Keyframes<Rgba>>,
) -> Declarations {
    let mut declarations = vec![
        ("background-color", interpolate(progress, background, MapOptions::CLAMP).to_css()),
        ("color", interpolate(progress, text, MapOptions::CLAMP).to_css()),
    ];
    if let Some(border) = border {
        declarations.push(("border-color", interpolate(progress, border, MapOptions::CLAMP).to_css()));
    }
    declarations
}

/// Latches to `true` the first time the element is a quarter of the way in.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(env::prefers_reduced_motion);
    let progress = use_visibility_progress(node, REVEAL_WINDOW);
    {
        let setter = revealed.setter();
        let already = *revealed;
        use_effect_with((progress, already), move |(progress, already)| {
            let watch = (!*already).then(|| {
                if progress.get() >= REVEAL_AMOUNT {
                    setter.set(true);
                }
                progress.watch(move |p| {
                    if p >= REVEAL_AMOUNT {
                        setter.set(true);
                    }
                })
            });
            move || drop(watch)
        });
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let style = format!(
        "transition: opacity {DURATION_LONG_SECS}s {ease}, transform {DURATION_LONG_SECS}s {ease};",
        ease = ease_out_css()
    );

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("scene", "reveal", revealed.then_some("is-revealed"), props.class.clone())}
            {style}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverRevealCardProps {
    pub panel: &'static Panel,
    pub on_reveal: Callback<&'static Panel>,
}

#[function_component(HoverRevealCard)]
pub fn hover_reveal_card(props: &HoverRevealCardProps) -> Html {
    let hover = use_cursor_hover(CursorMode::Reveal);
    let panel = props.panel;
    let onclick = {
        let on_reveal = props.on_reveal.clone();
        Callback::from(move |_: MouseEvent| on_reveal.emit(panel))
    };
    let details_id = format!("{}-details", panel.id);

    html! {
        <button
            type="button"
            class="reveal-card"
            aria-describedby={details_id.clone()}
            {onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            onfocus={hover.onfocus}
            onblur={hover.onblur}
        >
            <div class="reveal-card-image" style={format!("background-image: url({});", panel.image)} />
            <div class="reveal-card-shade" />
            <div class="reveal-card-copy">
                <span class="eyebrow">{panel.caption}</span>
                <p class="reveal-card-title">{panel.title}</p>
                <p id={details_id} class="reveal-card-details">{panel.description}</p>
                <span class="reveal-card-cta">{"Learn more"}</span>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay dialog. Escape and backdrop clicks close it; wheel input inside
/// scrolls natively and the cursor switches to its modal style while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let cursor = use_cursor();

    {
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |open| {
            let listener = (*open)
                .then(window)
                .flatten()
                .map(|window| {
                    EventListener::new(&window, "keydown", move |event: &Event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    })
                });
            let token = match (&cursor, *open) {
                (Some(cursor), true) => Some(cursor.enter(CursorMode::Modal)),
                _ => None,
            };
            move || {
                drop(listener);
                if let (Some(cursor), Some(token)) = (cursor, token) {
                    cursor.leave(token);
                }
            }
        });
    }

    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-root" onclick={close.clone()} data-smooth-prevent="">
            <div class="modal-backdrop" aria-hidden="true" />
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={keep_open}
            >
                <div class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="modal-close" type="button" onclick={close}>{"Close"}</button>
                </div>
                <div class="modal-body">{props.children.clone()}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DynamicHeadingProps {
    pub profile: TypographyProfile,
    #[prop_or(AttrValue::Static("h2"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub animate: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DynamicHeading)]
pub fn dynamic_heading(props: &DynamicHeadingProps) -> Html {
    let profile = props.profile;
    let class = classes!(
        (!profile.class.is_empty()).then_some(profile.class),
        props.animate.then_some("heading-enter"),
        props.class.clone()
    );

    html! {
        <@{props.tag.to_string()} id={props.id.clone()} class={class} style={profile.style()}>
            {props.children.clone()}
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub profile: Option<TypographyProfile>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let title = match props.profile {
        Some(profile) => html! { <DynamicHeading {profile}>{props.title.clone()}</DynamicHeading> },
        None => html! { <h2 class="section-title">{props.title.clone()}</h2> },
    };

    html! {
        <div class="section-header">
            if let Some(eyebrow) = props.eyebrow.clone() {
                <p class="eyebrow">{eyebrow}</p>
            }
            {title}
            if let Some(description) = props.description.clone() {
                <p class="muted">{description}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let project = props.project;

    html! {
        <article
            id={project.id}
            ref={node}
            class={classes!("project-card", "reveal", revealed.then_some("is-revealed"))}
        >
            <Link href={project.link} class="project-card-link">
                <div class="project-card-preview">
                    <img src={project.preview_image} alt={format!("{} preview", project.name)} loading="lazy" />
                    <span class="badge">{project.status.label()}</span>
                </div>
                <div class="project-card-copy">
                    <h3>{project.name}</h3>
                    <p class="muted">{project.subtitle}</p>
                    <ul>
                        { for project.bullets.iter().map(|bullet| html! { <li key={*bullet}>{*bullet}</li> }) }
                    </ul>
                    <span class="project-card-cta">{"View project"}<span aria-hidden="true">{" →"}</span></span>
                </div>
            </Link>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub era: &'static Era,
    pub profile: TypographyProfile,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let era = props.era;

    html! {
        <article
            id={era.id}
            ref={node}
            class={classes!("timeline-item", "reveal-x", revealed.then_some("is-revealed"))}
        >
            <div class="timeline-item-accent" aria-hidden="true" />
            <div class="timeline-item-meta">
                <span>{era.period}</span>
                <span>{era.date_range}</span>
                if let Some(location) = era.location {
                    <span>{location}</span>
                }
            </div>
            <DynamicHeading profile={props.profile} tag="h3">{era.title}</DynamicHeading>
            <ul class="timeline-item-bullets">
                { for era.bullets.iter().map(|bullet| html! { <li key={*bullet}>{*bullet}</li> }) }
            </ul>
        </article>
    }
}
