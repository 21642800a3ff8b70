mod activity;
mod board;
mod home;
mod music;
mod not_found;
mod projects;
mod timeline;
mod travel;

use yew::prelude::*;

use crate::state::Route;

pub use activity::ActivityPage;
pub use board::BoardPage;
pub use home::HomePage;
pub use music::MusicPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use timeline::TimelinePage;
pub use travel::TravelPage;

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Activity => html! { <ActivityPage /> },
        Route::Travel => html! { <TravelPage /> },
        Route::Music => html! { <MusicPage /> },
        Route::Timeline => html! { <TimelinePage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::Board => html! { <BoardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
