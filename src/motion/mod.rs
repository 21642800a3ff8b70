pub mod color;
pub mod interpolate;
pub mod sampler;
pub mod smooth;
pub mod window;
pub mod zone;

pub use color::Rgba;
pub use interpolate::{interpolate, KeyframeError, Keyframes, Lerp, MapOptions};
pub use sampler::{ScrollBroadcast, ScrollMetrics, ScrollSampler, ScrollSource, ScrollValue};
pub use window::{ElementGeometry, Intersection, VisibilityTracker, VisibilityWindow};
pub use zone::{ZoneMap, ZoneTracker};

pub const EASE_OUT_EXPO: [f64; 4] = [0.19, 1.0, 0.22, 1.0];

pub const DURATION_SHORT_SECS: f64 = 0.25;
pub const DURATION_MEDIUM_SECS: f64 = 0.45;
pub const DURATION_LONG_SECS: f64 = 0.8;

pub fn ease_out_css() -> String {
    let [a, b, c, d] = EASE_OUT_EXPO;
    format!("cubic-bezier({a}, {b}, {c}, {d})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_renders_as_css_bezier() {
        assert_eq!(ease_out_css(), "cubic-bezier(0.19, 1, 0.22, 1)");
    }
}
