use yew::prelude::*;

use crate::frontend::route::Link;
use crate::frontend::theme::use_page_palette;
use crate::palette::PaletteKey;
use crate::state::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_page_palette(PaletteKey::Dark);

    html! {
        <div class="page page-not-found">
            <p class="eyebrow">{"404"}</p>
            <h1>{"Nothing scrolls here."}</h1>
            <Link href={Route::Home.path()} class="button">{"Back home"}</Link>
        </div>
    }
}
