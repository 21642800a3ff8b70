#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instrument {
    pub name: &'static str,
    pub detail: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub cover_image: &'static str,
    pub year: Option<u16>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlbumRow {
    pub id: &'static str,
    pub title: Option<&'static str>,
    pub albums: &'static [Album],
}

pub const INSTRUMENTS: &[Instrument] = &[
    Instrument {
        name: "Double bass",
        detail: "Classical sections + jazz combos when time allows.",
        image: "/mock/instrument_bass.svg",
        badge: "Low vibrations",
    },
    Instrument {
        name: "Drumline",
        detail: "Percussion sync, cadence, and the discipline of ensembles.",
        image: "/mock/instrument_drum.svg",
        badge: "Cadence",
    },
    Instrument {
        name: "Dhol",
        detail: "Rhythms for celebrations; learning while building community.",
        image: "/mock/instrument_piano.svg",
        badge: "Ceremonial beats",
    },
    Instrument {
        name: "Piano (self-taught)",
        detail: "Quiet practice with layered motifs and patience for phrasing.",
        image: "/mock/music.svg",
        badge: "Habit",
    },
];

pub const PLAYLISTS: &[Playlist] = &[
    Playlist {
        title: "Top 50 focus set",
        description: "Lean beats for building sprints and deep work.",
        link: "https://open.spotify.com",
    },
    Playlist {
        title: "Listening notes",
        description: "Field recordings, jazz, and new releases I keep returning to.",
        link: "https://open.spotify.com",
    },
    Playlist {
        title: "Wrapped staples",
        description: "Year-end recap of what moved me and why it kept playing.",
        link: "https://open.spotify.com",
    },
];

pub const MUSICALS: &[(&str, &str)] = &[
    ("Next to Normal", "Healing through layered score."),
    ("Hamilton", "Precision in language + rhythm."),
    ("Book of Mormon", "Comedy with an earnest pulse."),
];

const COVER: &str = "/placeholders/this-website.svg";

pub const ALBUM_ROWS: &[AlbumRow] = &[
    AlbumRow {
        id: "recent-favorites",
        title: Some("Recent Favorites"),
        albums: &[
            Album { id: "album-1", title: "Midnight Dreams", artist: "Luna Echo", cover_image: COVER, year: Some(2024) },
            Album { id: "album-2", title: "Velvet Nights", artist: "The Purple Hour", cover_image: COVER, year: Some(2023) },
            Album { id: "album-3", title: "Quiet Storm", artist: "Aurora Sound", cover_image: COVER, year: Some(2024) },
        ],
    },
    AlbumRow {
        id: "all-time",
        title: Some("All-Time Rotation"),
        albums: &[
            Album { id: "album-4", title: "Low Tide", artist: "Harbor Lights", cover_image: COVER, year: Some(2019) },
            Album { id: "album-5", title: "Signal Fire", artist: "North Relay", cover_image: COVER, year: None },
        ],
    },
];
