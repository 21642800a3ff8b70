#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Era {
    pub id: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub date_range: &'static str,
    pub location: Option<&'static str>,
    pub bullets: &'static [&'static str],
    /// Page background while this era is in view.
    pub background: &'static str,
}

pub const ERAS: &[Era] = &[
    Era {
        id: "era1",
        title: "Early years",
        period: "Era 1",
        date_range: "1990s - Early 2000s",
        location: Some("Tampa, FL"),
        bullets: &[
            "Family + community first, building with what was nearby.",
            "Soccer fields, sneaking into tech mags, curious about systems.",
        ],
        background: "rgba(45, 90, 61, 0.08)",
    },
    Era {
        id: "era2",
        title: "Nerd + soccer arc",
        period: "Era 2",
        date_range: "Mid 2000s - 2010s",
        location: Some("Tampa, FL"),
        bullets: &[
            "Balanced competition on the pitch with intuition for math puzzles.",
            "First product: a club stats dashboard and lasting collaboration rituals.",
        ],
        background: "rgba(165, 95, 45, 0.08)",
    },
    Era {
        id: "era3",
        title: "Tampa roots",
        period: "Era 3",
        date_range: "2010s",
        location: Some("Tampa, FL"),
        bullets: &[
            "Deepening connections to place and people.",
            "Building systems that served real communities.",
        ],
        background: "rgba(15, 61, 107, 0.08)",
    },
    Era {
        id: "era4",
        title: "Georgia Tech",
        period: "Era 4",
        date_range: "2015 - 2020",
        location: Some("Atlanta, GA"),
        bullets: &[
            "Systems thinking shaped at the intersection of economics and data.",
            "Econ + MS Analytics: learning to see patterns in complexity.",
        ],
        background: "rgba(140, 99, 220, 0.08)",
    },
    Era {
        id: "era5",
        title: "Startups + building",
        period: "Era 5",
        date_range: "2020 - 2022",
        location: Some("Atlanta, GA"),
        bullets: &[
            "Product + growth experiments rooted in listening loops.",
            "Recall · Anchor · ReadTheField: documented every sprint for future founders.",
        ],
        background: "rgba(45, 90, 61, 0.12)",
    },
    Era {
        id: "era6",
        title: "VC/internships",
        period: "Era 6",
        date_range: "2022 - 2024",
        location: Some("Atlanta, GA"),
        bullets: &[
            "Mapped founder journeys for strategic investing.",
            "Engage · Tech Square Ventures · Catalyst: translating messy signals into calm recommendations.",
        ],
        background: "rgba(15, 61, 107, 0.12)",
    },
    Era {
        id: "era7",
        title: "Now + where I'm going",
        period: "Era 7",
        date_range: "2025 →",
        location: None,
        bullets: &[
            "Building teams where craft, data, and humanity coexist.",
            "The next chapter: writing it as we go.",
        ],
        background: "rgba(140, 99, 220, 0.12)",
    },
];

/// Evenly spaced stops for the page background across all eras.
pub fn background_stops() -> (Vec<f64>, Vec<&'static str>) {
    let count = ERAS.len();
    let last = count.saturating_sub(1).max(1) as f64;
    let stops = (0..count).map(|index| index as f64 / last).collect();
    let colors = ERAS.iter().map(|era| era.background).collect();
    (stops, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Keyframes;

    #[test]
    fn background_table_spans_the_page() {
        let (stops, colors) = background_stops();

        assert_eq!(stops.first(), Some(&0.0));
        assert_eq!(stops.last(), Some(&1.0));
        assert!(Keyframes::parse_colors(&stops, &colors).is_ok());
    }
}
