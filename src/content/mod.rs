//! Static page content. Records carry stable `id`s used as Yew keys and
//! fragment anchors.

pub mod activity;
pub mod board;
pub mod home;
pub mod music;
pub mod projects;
pub mod timeline;
pub mod travel;

/// A footer or navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
    pub external: bool,
}

impl Link {
    const fn internal(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: false,
        }
    }

    const fn external(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            external: true,
        }
    }
}

pub const FOOTER_SOCIALS: &[Link] = &[
    Link::external("https://www.linkedin.com/in/vinaygov", "LinkedIn"),
    Link::external("mailto:vinaysgovindaraju@gmail.com", "Email"),
    Link::external("https://www.instagram.com/vinaynay9", "Instagram"),
];

pub const FOOTER_PROJECTS: &[Link] = &[
    Link::internal("/projects#this-website", "My Story"),
    Link::internal("/projects#read-the-field", "ReadTheField"),
    Link::internal("/projects#anchor", "Anchor"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::state::Route;

    fn assert_unique<'a>(ids: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn record_ids_are_unique() {
        assert_unique(home::PANELS.iter().map(|panel| panel.id));
        assert_unique(activity::SECTIONS.iter().map(|section| section.id));
        assert_unique(projects::PROJECTS.iter().map(|project| project.id));
        assert_unique(timeline::ERAS.iter().map(|era| era.id));
        assert_unique(travel::TRAVEL_LOG.iter().map(|country| country.code));
        assert_unique(travel::VISITED.iter().map(|country| country.code));
        assert_unique(music::ALBUM_ROWS.iter().map(|row| row.id));
    }

    #[test]
    fn internal_links_resolve_to_pages() {
        let internal = FOOTER_PROJECTS
            .iter()
            .map(|link| link.href)
            .chain(home::PANELS.iter().map(|panel| panel.route))
            .chain(projects::PROJECTS.iter().map(|project| project.link));

        for href in internal {
            assert_ne!(Route::from_path(href), Route::NotFound, "{href}");
        }
        assert!(FOOTER_SOCIALS.iter().all(|link| link.external));
    }
}
