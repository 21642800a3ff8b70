#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Building,
    Shipped,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Shipped => "Shipped",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub bullets: [&'static str; 2],
    pub preview_image: &'static str,
    pub status: Status,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "this-website",
        name: "This Website",
        subtitle: "A personal portfolio built around scroll-driven motion design.",
        bullets: [
            "Custom cursor interactions and scroll-based theme transitions",
            "Responsive layouts with parallax effects and smooth animations",
        ],
        preview_image: "/placeholders/this-website.svg",
        status: Status::Shipped,
        link: "/projects#this-website",
    },
    Project {
        id: "read-the-field",
        name: "ReadTheField",
        subtitle: "Signals, notes, and experiments for the modern research team.",
        bullets: [
            "Research workflow optimization with intelligent signal detection",
            "Collaborative note-taking system with experiment tracking",
        ],
        preview_image: "/placeholders/read-the-field.svg",
        status: Status::Building,
        link: "/projects#read-the-field",
    },
    Project {
        id: "anchor",
        name: "Anchor",
        subtitle: "A refined writer studio + editorial OS for product teams.",
        bullets: [
            "Editorial workflow management with design system integration",
            "Publishing pipeline automation for product documentation",
        ],
        preview_image: "/placeholders/anchor.svg",
        status: Status::Shipped,
        link: "/projects#anchor",
    },
];
