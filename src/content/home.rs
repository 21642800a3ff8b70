#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
    pub route: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PANELS: &[Panel] = &[
    Panel {
        id: "tampa-roots",
        title: "Tampa Roots",
        description: "Community, family, and curious afternoons in a humid Florida heat.",
        caption: "Family / community",
        image: "/mock/tampa.svg",
        route: "/timeline#tampa",
        highlights: &["Neighborhood rituals", "Soccer on local fields", "First hardware tinkerers"],
    },
    Panel {
        id: "nerd-origin",
        title: "Nerd Origin Story",
        description: "Code, puzzles, and midnight experimentation fed the curiosity.",
        caption: "Curiosity",
        image: "/mock/nerd.svg",
        route: "/timeline#soccer-nerd",
        highlights: &["Early dashboards", "Math club notebooks", "Side projects for friends"],
    },
    Panel {
        id: "soccer-energy",
        title: "Team Energy",
        description: "Soccer, intramurals, and the discipline to operate on a schedule.",
        caption: "Soccer",
        image: "/mock/activity/sports_1.svg",
        route: "/activity",
        highlights: &["Competing with grit", "Leadership on the field", "Team rituals"],
    },
    Panel {
        id: "georgia-tech",
        title: "Georgia Tech",
        description: "Systems thinking at the intersection of economics, data, and labs.",
        caption: "GT · MS Analytics",
        image: "/mock/gt.svg",
        route: "/timeline#georgia-tech",
        highlights: &["Research clarity", "Signal obsession", "Economics + analytics"],
    },
    Panel {
        id: "startups",
        title: "Startup Builder Arc",
        description: "Recall, Anchor, ReadTheField: experiments with documentation rituals.",
        caption: "Startups",
        image: "/placeholders/anchor.svg",
        route: "/projects",
        highlights: &["Product gists", "Growth + listening loops", "Runbooks for founders"],
    },
    Panel {
        id: "internships",
        title: "VC · Innovation Internships",
        description: "Engage, Tech Square Ventures, Catalyst: turning chaos into calm due diligence.",
        caption: "VC / innovation",
        image: "/mock/vc.svg",
        route: "/timeline#internships",
        highlights: &["Founder journeys", "Research-based theses", "Data-backed conviction"],
    },
];

/// Home page background and text keyframes over whole-page progress.
pub const BACKGROUND_STOPS: &[f64] = &[0.0, 0.35, 0.7, 1.0];
pub const BACKGROUND_COLORS: &[&str] = &["#000000", "#0c0c0c", "#f8f7f3", "#000000"];
pub const TEXT_COLORS: &[&str] = &["#f6f6f2", "#f6f6f2", "#030303", "#f6f6f2"];
