#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelCountry {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub year: &'static str,
    pub highlight: &'static str,
    pub images: &'static [&'static str],
    pub states: &'static [&'static str],
}

pub const TRAVEL_LOG: &[TravelCountry] = &[
    TravelCountry {
        code: "USA",
        name: "United States",
        region: "Florida · Georgia · coasts",
        year: "2010 → 2025",
        highlight: "Family, craft, and early tech circuits.",
        images: &["/mock/travel_usa.svg", "/mock/tampa.svg"],
        states: &[
            "Florida",
            "Georgia",
            "Texas",
            "New Jersey",
            "New York",
            "California",
            "Washington DC",
            "Tennessee",
            "Louisiana",
        ],
    },
    TravelCountry {
        code: "JPN",
        name: "Japan",
        region: "Tokyo · Fuji",
        year: "2019",
        highlight: "Clear lines, mountain treks, and precise craft.",
        images: &["/mock/travel_japan.svg"],
        states: &[],
    },
    TravelCountry {
        code: "PER",
        name: "Peru",
        region: "Machu Picchu",
        year: "2022",
        highlight: "Altitude, patience, and slow reveals.",
        images: &["/mock/travel_peru.svg"],
        states: &[],
    },
    TravelCountry {
        code: "ECU",
        name: "Ecuador",
        region: "Galápagos · Coastal",
        year: "2023",
        highlight: "Scuba, data dives, and reef patience.",
        images: &["/mock/travel_galapagos.svg"],
        states: &[],
    },
];

/// A visited country. `atlas_name` is the spelling used by the globe's
/// world-atlas geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitedCountry {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: Option<&'static str>,
    pub atlas_name: &'static str,
}

const fn visited(
    code: &'static str,
    name: &'static str,
    native_name: Option<&'static str>,
    atlas_name: &'static str,
) -> VisitedCountry {
    VisitedCountry {
        code,
        name,
        native_name,
        atlas_name,
    }
}

pub const VISITED: &[VisitedCountry] = &[
    visited("USA", "United States", None, "United States of America"),
    visited("CAN", "Canada", None, "Canada"),
    visited("MEX", "Mexico", Some("México"), "Mexico"),
    visited("PER", "Peru", Some("Perú"), "Peru"),
    visited("COL", "Colombia", None, "Colombia"),
    visited("GBR", "United Kingdom", None, "United Kingdom"),
    visited("FRA", "France", None, "France"),
    visited("DEU", "Germany", Some("Deutschland"), "Germany"),
    visited("AUT", "Austria", Some("Österreich"), "Austria"),
    visited("CZE", "Czech Republic", Some("Česká republika"), "Czechia"),
    visited("ITA", "Italy", Some("Italia"), "Italy"),
    visited("CHE", "Switzerland", Some("Schweiz"), "Switzerland"),
    visited("BEL", "Belgium", Some("België"), "Belgium"),
    visited("LUX", "Luxembourg", None, "Luxembourg"),
    visited("ESP", "Spain", Some("España"), "Spain"),
    visited("MAR", "Morocco", Some("المغرب"), "Morocco"),
    visited("ARE", "United Arab Emirates", Some("الإمارات العربية المتحدة"), "United Arab Emirates"),
    visited("IND", "India", Some("भारत"), "India"),
    visited("THA", "Thailand", Some("ประเทศไทย"), "Thailand"),
    visited("JPN", "Japan", Some("日本"), "Japan"),
    visited("TZA", "Tanzania", None, "Tanzania"),
];

pub fn find_visited(name: &str) -> Option<&'static VisitedCountry> {
    let name = name.trim();
    VISITED.iter().find(|country| {
        country.name.eq_ignore_ascii_case(name) || country.atlas_name.eq_ignore_ascii_case(name)
    })
}

pub fn is_visited(name: &str) -> bool {
    find_visited(name).is_some()
}

/// Resolves a globe label to its travel log entry: a direct name match
/// first, then through the atlas-name map in both directions.
pub fn find_country(name: &str) -> Option<&'static TravelCountry> {
    let name = name.trim();
    let by_name = |wanted: &str| {
        TRAVEL_LOG
            .iter()
            .find(|country| country.name.eq_ignore_ascii_case(wanted))
    };

    if let Some(country) = by_name(name) {
        return Some(country);
    }
    let visited = find_visited(name)?;
    by_name(visited.name).or_else(|| by_name(visited.atlas_name))
}

pub fn atlas_names() -> impl Iterator<Item = &'static str> {
    VISITED.iter().map(|country| country.atlas_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_countries_by_display_or_atlas_name() {
        assert_eq!(find_country("japan").map(|c| c.code), Some("JPN"));
        assert_eq!(find_country(" United States of America ").map(|c| c.code), Some("USA"));
        assert_eq!(find_country("Ecuador").map(|c| c.code), Some("ECU"));
        assert!(find_country("Czechia").is_none());
        assert!(find_country("Atlantis").is_none());
    }

    #[test]
    fn visited_lookup_maps_both_directions() {
        assert!(is_visited("Czechia"));
        assert!(is_visited("czech republic"));
        assert!(!is_visited("Ecuador"));
        assert_eq!(atlas_names().count(), VISITED.len());
    }
}
