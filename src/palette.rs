/// Named color schemes. Pages swap between them as the reader scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteKey {
    #[default]
    Dark,
    Light,
    Sports,
    Hiking,
    Scuba,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
}

const DARK: Palette = Palette {
    background: "#000000",
    surface: "#0c0c0c",
    text: "#f6f6f2",
    muted: "#cfcfcf",
    border: "rgba(255, 255, 255, 0.08)",
    accent: "#7ee787",
    accent_soft: "#43f0d7",
};

const LIGHT: Palette = Palette {
    background: "#f8f7f3",
    surface: "#ffffff",
    text: "#030303",
    muted: "#666666",
    border: "rgba(0, 0, 0, 0.1)",
    accent: "#1c5c9a",
    accent_soft: "#a7bfd5",
};

const SPORTS: Palette = Palette {
    background: "#050505",
    surface: "#121212",
    text: "#f7f7f7",
    muted: "#d3d3d3",
    border: "rgba(255, 255, 255, 0.12)",
    accent: "#7eedb4",
    accent_soft: "#33d7a9",
};

const HIKING: Palette = Palette {
    background: "#0b1810",
    surface: "#172a20",
    text: "#e9f4ec",
    muted: "#c1d3c6",
    border: "rgba(224, 255, 243, 0.25)",
    accent: "#95e1bf",
    accent_soft: "#5fa88c",
};

const SCUBA: Palette = Palette {
    background: "#010c19",
    surface: "#071826",
    text: "#e4f4ff",
    muted: "#b6d0e7",
    border: "rgba(255, 255, 255, 0.15)",
    accent: "#4bc0c8",
    accent_soft: "#24a0c6",
};

impl PaletteKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Sports => "sports",
            Self::Hiking => "hiking",
            Self::Scuba => "scuba",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
            Self::Sports => &SPORTS,
            Self::Hiking => &HIKING,
            Self::Scuba => &SCUBA,
        }
    }
}

impl Palette {
    /// The `--color-*` custom properties this palette sets on the root.
    pub fn custom_properties(&self) -> [(&'static str, &'static str); 7] {
        [
            ("--color-background", self.background),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-muted", self.muted),
            ("--color-border", self.border),
            ("--color-accent", self.accent),
            ("--color-accent-soft", self.accent_soft),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Rgba;

    #[test]
    fn custom_properties_cover_every_token() {
        let properties = PaletteKey::Scuba.palette().custom_properties();

        assert_eq!(properties[0], ("--color-background", "#010c19"));
        assert_eq!(properties[6], ("--color-accent-soft", "#24a0c6"));
        assert!(properties.iter().all(|(name, _)| name.starts_with("--color-")));
        assert!(properties.iter().all(|(_, value)| !value.contains(';')));
    }

    #[test]
    fn every_palette_color_parses() {
        for key in [
            PaletteKey::Dark,
            PaletteKey::Light,
            PaletteKey::Sports,
            PaletteKey::Hiking,
            PaletteKey::Scuba,
        ] {
            let palette = key.palette();
            for value in [
                palette.background,
                palette.surface,
                palette.text,
                palette.muted,
                palette.border,
                palette.accent,
                palette.accent_soft,
            ] {
                assert!(Rgba::parse(value).is_ok(), "{} has bad color {value}", key.as_str());
            }
        }
    }
}
