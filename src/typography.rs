//! Font profiles per page. Families are CSS custom properties set by the
//! stylesheet; this module only decides which one each heading uses.

use crate::state::Route;

const SPACE_GROTESK: &str = "--font-space-grotesk";
const INTER: &str = "--font-inter";
const RIGHTEOUS: &str = "--font-righteous";
const BUNGEE: &str = "--font-bungee";
const FREDOKA: &str = "--font-fredoka";
const PERMANENT_MARKER: &str = "--font-permanent-marker";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypographyProfile {
    pub font_family: &'static str,
    pub font_weight: u16,
    pub letter_spacing: &'static str,
    pub line_height: Option<&'static str>,
    pub class: &'static str,
}

impl TypographyProfile {
    const fn new(font_family: &'static str, font_weight: u16, letter_spacing: &'static str) -> Self {
        Self {
            font_family,
            font_weight,
            letter_spacing,
            line_height: None,
            class: "",
        }
    }

    const fn line_height(mut self, value: &'static str) -> Self {
        self.line_height = Some(value);
        self
    }

    const fn class(mut self, value: &'static str) -> Self {
        self.class = value;
        self
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "font-family: var({}), var({SPACE_GROTESK}), var({INTER}), system-ui, sans-serif; font-weight: {}; letter-spacing: {};",
            self.font_family, self.font_weight, self.letter_spacing
        );
        if let Some(line_height) = self.line_height {
            style.push_str(&format!(" line-height: {line_height};"));
        }
        style
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTypography {
    pub heading: TypographyProfile,
    pub subheading: TypographyProfile,
    pub body: TypographyProfile,
    pub accent: Option<TypographyProfile>,
}

const BODY: TypographyProfile = TypographyProfile::new(SPACE_GROTESK, 400, "0.02em").line_height("1.7");

pub const HOME: PageTypography = PageTypography {
    heading: TypographyProfile::new(RIGHTEOUS, 700, "0.05em").class("font-display"),
    subheading: TypographyProfile::new(SPACE_GROTESK, 400, "0.1em"),
    body: BODY,
    accent: None,
};

pub const ACTIVITY: PageTypography = PageTypography {
    heading: TypographyProfile::new(BUNGEE, 400, "0.15em").class("uppercase"),
    subheading: TypographyProfile::new(RIGHTEOUS, 700, "0.1em").class("uppercase"),
    body: TypographyProfile::new(SPACE_GROTESK, 400, "0.03em").line_height("1.6"),
    accent: None,
};

pub const MUSIC: PageTypography = PageTypography {
    heading: TypographyProfile::new(FREDOKA, 400, "0.05em"),
    subheading: TypographyProfile::new(PERMANENT_MARKER, 600, "0.03em"),
    body: BODY,
    accent: Some(TypographyProfile::new(PERMANENT_MARKER, 400, "0.04em")),
};

pub const TRAVEL: PageTypography = PageTypography {
    heading: TypographyProfile::new(RIGHTEOUS, 400, "0.08em").class("uppercase"),
    subheading: TypographyProfile::new(SPACE_GROTESK, 600, "0.05em"),
    body: BODY,
    accent: None,
};

/// Timeline headings drift from handwritten to neutral as the story moves on.
pub const TIMELINE_EARLY: PageTypography = PageTypography {
    heading: TypographyProfile::new(PERMANENT_MARKER, 700, "0.02em").line_height("1.4"),
    subheading: TypographyProfile::new(FREDOKA, 400, "0.02em"),
    body: TypographyProfile::new(FREDOKA, 400, "0.01em").line_height("1.6"),
    accent: None,
};

pub const TIMELINE_MIDDLE: PageTypography = PageTypography {
    heading: TypographyProfile::new(SPACE_GROTESK, 600, "0.05em"),
    subheading: TypographyProfile::new(SPACE_GROTESK, 400, "0.05em"),
    body: BODY,
    accent: None,
};

pub const TIMELINE_LATE: PageTypography = PageTypography {
    heading: TypographyProfile::new(INTER, 600, "0.03em"),
    subheading: TypographyProfile::new(INTER, 400, "0.03em"),
    body: TypographyProfile::new(INTER, 400, "0.01em").line_height("1.7"),
    accent: None,
};

pub fn for_page(route: Route) -> &'static PageTypography {
    match route {
        Route::Activity => &ACTIVITY,
        Route::Music => &MUSIC,
        Route::Travel => &TRAVEL,
        Route::Timeline => &TIMELINE_MIDDLE,
        Route::Home | Route::Projects | Route::Board | Route::NotFound => &HOME,
    }
}

pub fn for_timeline_era(index: usize, count: usize) -> &'static PageTypography {
    let third = count.div_ceil(3).max(1);
    match index / third {
        0 => &TIMELINE_EARLY,
        1 => &TIMELINE_MIDDLE,
        _ => &TIMELINE_LATE,
    }
}

pub fn native_country_name(country: &str) -> Option<(&'static str, &'static str)> {
    let (native, _lang) = match country {
        "Japan" => ("日本", "ja"),
        "Italy" => ("Italia", "default"),
        "Spain" => ("España", "default"),
        "France" => ("France", "default"),
        "Germany" => ("Deutschland", "default"),
        "China" => ("中国", "zh"),
        "India" => ("भारत", "hi"),
        "United Arab Emirates" => ("الإمارات العربية المتحدة", "ar"),
        _ => return None,
    };
    // TODO: give ja/zh/hi/ar their own families once the CJK and Devanagari
    // subsets are bundled; everything renders in Space Grotesk until then.
    Some((native, SPACE_GROTESK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_includes_fallback_stack_and_line_height() {
        let style = HOME.body.style();

        assert!(style.starts_with("font-family: var(--font-space-grotesk), var(--font-space-grotesk)"));
        assert!(style.contains("font-weight: 400;"));
        assert!(style.ends_with("line-height: 1.7;"));
        assert!(!HOME.heading.style().contains("line-height"));
    }

    #[test]
    fn timeline_eras_split_into_thirds() {
        assert_eq!(for_timeline_era(0, 7), &TIMELINE_EARLY);
        assert_eq!(for_timeline_era(2, 7), &TIMELINE_EARLY);
        assert_eq!(for_timeline_era(3, 7), &TIMELINE_MIDDLE);
        assert_eq!(for_timeline_era(6, 7), &TIMELINE_LATE);
        assert_eq!(for_timeline_era(0, 0), &TIMELINE_EARLY);
    }

    #[test]
    fn native_names_cover_known_countries_only() {
        assert_eq!(native_country_name("Japan").map(|(name, _)| name), Some("日本"));
        assert!(native_country_name("Peru").is_none());
    }
}
