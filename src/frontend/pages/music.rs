use yew::prelude::*;

use crate::content::music::{AlbumRow, ALBUM_ROWS, INSTRUMENTS, MUSICALS, PLAYLISTS};
use crate::frontend::components::{AnimatedSection, DynamicHeading, ParallaxLayer, ParallaxSpeed, SectionHeader};
use crate::frontend::route::Link;
use crate::frontend::theme::use_page_palette;
use crate::palette::PaletteKey;
use crate::state::Route;
use crate::typography;

#[function_component(MusicPage)]
pub fn music_page() -> Html {
    use_page_palette(PaletteKey::Dark);
    let type_scale = typography::for_page(Route::Music);
    let accent = type_scale.accent.unwrap_or(type_scale.subheading);

    html! {
        <div class="page page-music">
            <SectionHeader
                eyebrow="Music"
                title="Sound chapters"
                description="Instruments, playlists, and theater keep the rhythm steady."
                profile={type_scale.heading}
            />

            <AnimatedSection class="music-instruments">
                <ParallaxLayer speed={ParallaxSpeed::Medium}>
                    <DynamicHeading profile={accent} tag="h3">{"Instruments"}</DynamicHeading>
                </ParallaxLayer>
                <ParallaxLayer speed={ParallaxSpeed::Slow} class="music-grid">
                    { for INSTRUMENTS.iter().map(|instrument| html! {
                        <article key={instrument.name} class="instrument-card">
                            <img src={instrument.image} alt={instrument.name} loading="lazy" />
                            <span class="badge">{instrument.badge}</span>
                            <h4>{instrument.name}</h4>
                            <p class="muted">{instrument.detail}</p>
                        </article>
                    }) }
                </ParallaxLayer>
            </AnimatedSection>

            <AnimatedSection class="music-playlists">
                <DynamicHeading profile={accent} tag="h3">{"Playlists"}</DynamicHeading>
                <div class="playlist-grid">
                    { for PLAYLISTS.iter().map(|playlist| html! {
                        <Link key={playlist.title} href={playlist.link} class="playlist-card">
                            <span class="playlist-card-title">{playlist.title}</span>
                            <span class="muted">{playlist.description}</span>
                        </Link>
                    }) }
                </div>
            </AnimatedSection>

            { for ALBUM_ROWS.iter().map(|row| html! { <AlbumShelf key={row.id} {row} /> }) }

            <AnimatedSection class="music-theater">
                <ParallaxLayer speed={ParallaxSpeed::Slow}>
                    <DynamicHeading profile={accent} tag="h3">{"Theater"}</DynamicHeading>
                    <p class="muted" style={type_scale.body.style()}>
                        {"Stories with layered scores remind me that craft comes with collaboration, tension, and release."}
                    </p>
                    <ul class="musicals">
                        { for MUSICALS.iter().map(|&(title, note)| html! {
                            <li key={title}>
                                <span>{title}</span>
                                <span class="muted">{note}</span>
                            </li>
                        }) }
                    </ul>
                </ParallaxLayer>
            </AnimatedSection>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AlbumShelfProps {
    row: &'static AlbumRow,
}

/// Horizontally scrolling row of covers; wheel input inside it is left to
/// the browser.
#[function_component(AlbumShelf)]
fn album_shelf(props: &AlbumShelfProps) -> Html {
    let row = props.row;
    html! {
        <AnimatedSection id={row.id} class="album-shelf">
            if let Some(title) = row.title {
                <h3 class="album-shelf-title">{title}</h3>
            }
            <div class="album-row" data-smooth-prevent="">
                { for row.albums.iter().map(|album| html! {
                    <figure key={album.id} class="album">
                        <img src={album.cover_image} alt={format!("{} by {}", album.title, album.artist)} loading="lazy" />
                        <figcaption>
                            <span>{album.title}</span>
                            <span class="muted">
                                { match album.year {
                                    Some(year) => format!("{} · {year}", album.artist),
                                    None => album.artist.to_string(),
                                } }
                            </span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </AnimatedSection>
    }
}
