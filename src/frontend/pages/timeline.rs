use yew::prelude::*;

use crate::content::timeline::{self, ERAS};
use crate::frontend::components::{ParallaxLayer, ParallaxSpeed, SectionHeader, TimelineItem};
use crate::frontend::scroll::{use_motion_style, use_shared_scroll};
use crate::frontend::theme::use_page_palette;
use crate::motion::{interpolate, Keyframes, MapOptions};
use crate::palette::PaletteKey;
use crate::state::Route;
use crate::typography;

#[function_component(TimelinePage)]
pub fn timeline_page() -> Html {
    use_page_palette(PaletteKey::Light);
    let type_scale = typography::for_page(Route::Timeline);

    let node = use_node_ref();
    let page = use_shared_scroll();
    let (stops, colors) = timeline::background_stops();
    let tint = Keyframes::colors(&stops, &colors);
    use_motion_style(node.clone(), page, move |p| {
        vec![("background-color", interpolate(p, &tint, MapOptions::CLAMP).to_css())]
    });

    html! {
        <div ref={node} class="page page-timeline">
            <SectionHeader
                eyebrow="Timeline"
                title="Tampa to Georgia Tech to startups"
                description="Each era changes the type a little, the way the story did."
                profile={type_scale.heading}
            />
            <ParallaxLayer speed={ParallaxSpeed::Slow} class="timeline">
                <div class="timeline-rail" aria-hidden="true" />
                { for ERAS.iter().enumerate().map(|(index, era)| html! {
                    <TimelineItem
                        key={era.id}
                        {era}
                        profile={typography::for_timeline_era(index, ERAS.len()).heading}
                    />
                }) }
            </ParallaxLayer>
        </div>
    }
}
