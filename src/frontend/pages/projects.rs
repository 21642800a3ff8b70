use yew::prelude::*;

use crate::content::projects::PROJECTS;
use crate::frontend::components::{
    use_scene_progress, AnimatedSection, ProjectCard, ScrollScene, SectionHeader, ThemeTransition,
};
use crate::frontend::theme::use_page_palette;
use crate::motion::ScrollValue;
use crate::palette::PaletteKey;
use crate::state::Route;
use crate::typography;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    use_page_palette(PaletteKey::Dark);

    html! {
        <div class="page page-projects">
            <ScrollScene class="projects-scene" min_height="160vh">
                <ProjectsBody />
            </ScrollScene>
        </div>
    }
}

/// Fades from the dark palette to paper as the scene scrolls past.
#[function_component(ProjectsBody)]
fn projects_body() -> Html {
    let type_scale = typography::for_page(Route::Projects);
    let fallback = use_memo((), |_| ScrollValue::constant(0.0));
    let progress = use_scene_progress().unwrap_or_else(|| (*fallback).clone());

    html! {
        <ThemeTransition {progress} class="projects-surface">
            <SectionHeader
                eyebrow="Projects"
                title="Builds and experiments"
                description="What shipped, what is still on the bench."
                profile={type_scale.heading}
            />
            <AnimatedSection class="project-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <ProjectCard key={project.id} {project} />
                }) }
            </AnimatedSection>
        </ThemeTransition>
    }
}
