use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::board::{unlocks, Mentor, MENTORS};
use crate::frontend::components::SectionHeader;
use crate::frontend::theme::use_page_palette;
use crate::palette::PaletteKey;

#[function_component(BoardPage)]
pub fn board_page() -> Html {
    use_page_palette(PaletteKey::Dark);
    let passphrase = use_state(String::new);
    let granted = use_state_eq(|| false);

    let oninput = {
        let passphrase = passphrase.clone();
        Callback::from(move |event: InputEvent| {
            passphrase.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let onsubmit = {
        let passphrase = passphrase.clone();
        let granted = granted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if unlocks(&passphrase) {
                granted.set(true);
            }
        })
    };

    html! {
        <div class="page page-board">
            <SectionHeader
                title="Board of Directors"
                description="Private guidance, kept quiet until the right passphrase."
            />
            if *granted {
                <p class="muted">
                    {"These people hold the quiet accountability. Still solid ground, even while the door is open."}
                </p>
                <div class="board-list">
                    { for MENTORS.iter().map(|mentor| html! { <MentorCard key={mentor.name} {mentor} /> }) }
                </div>
            } else {
                <form class="board-form" {onsubmit}>
                    <p class="muted">{"Enter the known word to reveal the chamber."}</p>
                    <label class="eyebrow" for="board-passphrase">{"Passphrase"}</label>
                    <input
                        id="board-passphrase"
                        class="board-input"
                        value={(*passphrase).clone()}
                        {oninput}
                        placeholder="clarity"
                        autocomplete="off"
                    />
                    <button type="submit" class="button button-ghost">{"Enter"}</button>
                </form>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MentorCardProps {
    mentor: &'static Mentor,
}

#[function_component(MentorCard)]
fn mentor_card(props: &MentorCardProps) -> Html {
    let mentor = props.mentor;
    html! {
        <article class="board-card">
            <div class="board-card-header">
                <h3>{mentor.name}</h3>
                <span class="eyebrow">{"Mentor"}</span>
            </div>
            <p class="muted">{mentor.role}</p>
            <p class="muted">{mentor.note}</p>
        </article>
    }
}
