use crate::palette::PaletteKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "sports",
        title: "Sports",
        subtitle: "Soccer · intramurals",
        description: "Energy, rituals, and the joy of winning with a vibe-filled team.",
        image: "/mock/activity/sports_1.svg",
        badge: "Community energy",
    },
    Section {
        id: "hiking",
        title: "Hiking",
        subtitle: "Fuji · Kilimanjaro · Machu Picchu",
        description: "Altitude offers clarity, patience, and a reminder to pace builds.",
        image: "/mock/activity/hiking_1.svg",
        badge: "High views",
    },
    Section {
        id: "scuba",
        title: "Scuba",
        subtitle: "Reef focus · calm breathing",
        description: "Weightless worlds teach me to pause and peek behind the obvious.",
        image: "/mock/activity/scuba_1.svg",
        badge: "Deep calm",
    },
    Section {
        id: "gym",
        title: "Gym lifts",
        subtitle: "Strength routines + small wins",
        description: "Numbers and steady progress. Tracking lifts mirrors product cadence.",
        image: "/mock/activity/sports_2.svg",
        badge: "Lifting focus",
    },
];

/// Zone boundaries over the activity section's windowed progress.
pub const ZONE_BOUNDARIES: &[f64] = &[0.33, 0.67];
pub const ZONES: &[PaletteKey] = &[PaletteKey::Sports, PaletteKey::Hiking, PaletteKey::Scuba];

/// One background layer per zone, faded in over its third of the section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub zone: PaletteKey,
    pub image: &'static str,
    pub stops: &'static [f64],
    pub opacity: &'static [f64],
}

pub const LAYERS: &[Layer] = &[
    Layer {
        zone: PaletteKey::Sports,
        image: "/mock/activity/sports_bg.svg",
        stops: &[0.0, 0.28, 0.38],
        opacity: &[1.0, 1.0, 0.0],
    },
    Layer {
        zone: PaletteKey::Hiking,
        image: "/mock/activity/hiking_bg.svg",
        stops: &[0.28, 0.38, 0.62, 0.72],
        opacity: &[0.0, 1.0, 1.0, 0.0],
    },
    Layer {
        zone: PaletteKey::Scuba,
        image: "/mock/activity/scuba_bg.svg",
        stops: &[0.62, 0.72, 1.0],
        opacity: &[0.0, 1.0, 1.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{interpolate, Keyframes, MapOptions, ZoneMap};

    #[test]
    fn layer_tables_are_well_formed() {
        for layer in LAYERS {
            assert!(Keyframes::new(layer.stops, layer.opacity.to_vec()).is_ok());
        }
        assert!(ZoneMap::new(ZONE_BOUNDARIES, ZONES).is_some());
    }

    #[test]
    fn the_committed_zone_has_a_visible_layer() {
        let map = ZoneMap::new(ZONE_BOUNDARIES, ZONES).expect("zones");
        for step in 0..=20 {
            let progress = f64::from(step) / 20.0;
            let zone = map.zone_at(progress);
            let layer = LAYERS.iter().find(|layer| layer.zone == zone).expect("layer");
            let opacity = interpolate(
                progress,
                &Keyframes::numbers(layer.stops, layer.opacity),
                MapOptions::CLAMP,
            );
            assert!(opacity > 0.0, "zone {zone:?} invisible at {progress}");
        }
    }
}
