use std::cell::Cell;
use std::str::FromStr;

use thiserror::Error;

use super::sampler::{channel, ScrollValue, ScrollWriter};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid intersection `{0}`, expected two of start/center/end or fractions")]
pub struct IntersectionError(String);

/// A point on the element (`target`) meeting a point on the viewport
/// (`container`), both as fractions from the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: f64,
    pub container: f64,
}

impl Intersection {
    pub const START_END: Self = Self::new(0.0, 1.0);
    pub const END_START: Self = Self::new(1.0, 0.0);
    pub const START_START: Self = Self::new(0.0, 0.0);
    pub const END_END: Self = Self::new(1.0, 1.0);

    pub const fn new(target: f64, container: f64) -> Self {
        Self { target, container }
    }
}

impl FromStr for Intersection {
    type Err = IntersectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let edge = |word: &str| match word {
            "start" => Some(0.0),
            "center" => Some(0.5),
            "end" => Some(1.0),
            other => other.parse::<f64>().ok().filter(|v| v.is_finite()),
        };

        let mut words = value.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(target), Some(container), None) => match (edge(target), edge(container)) {
                (Some(target), Some(container)) => Ok(Self { target, container }),
                _ => Err(IntersectionError(value.to_string())),
            },
            _ => Err(IntersectionError(value.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityWindow {
    pub entry: Intersection,
    pub exit: Intersection,
}

impl Default for VisibilityWindow {
    fn default() -> Self {
        Self::TRANSIT
    }
}

impl VisibilityWindow {
    pub const TRANSIT: Self = Self {
        entry: Intersection::START_END,
        exit: Intersection::END_START,
    };

    /// Pinned sections: progress runs while the element fills the viewport.
    pub const CONTAINED: Self = Self {
        entry: Intersection::START_START,
        exit: Intersection::END_END,
    };

    pub fn parse(entry: &str, exit: &str) -> Result<Self, IntersectionError> {
        Ok(Self {
            entry: entry.parse()?,
            exit: exit.parse()?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport: f64,
}

/// Local progress of an element through `window`. Zero-length or inverted
/// travel reads 0 instead of dividing by zero.
pub fn window_progress(geometry: ElementGeometry, window: VisibilityWindow, clamp: bool) -> f64 {
    let ElementGeometry {
        top,
        height,
        viewport,
    } = geometry;
    let VisibilityWindow { entry, exit } = window;

    let travelled = entry.container * viewport - top - entry.target * height;
    let travel = (exit.target - entry.target) * height - (exit.container - entry.container) * viewport;

    if !travel.is_finite() || !travelled.is_finite() || travel <= f64::EPSILON {
        return 0.0;
    }

    let progress = travelled / travel;
    if clamp {
        progress.clamp(0.0, 1.0)
    } else {
        progress
    }
}

pub struct VisibilityTracker {
    window: Cell<VisibilityWindow>,
    clamp: bool,
    writer: ScrollWriter,
    value: ScrollValue,
}

impl VisibilityTracker {
    pub fn new(window: VisibilityWindow, clamp: bool) -> Self {
        let (writer, value) = channel();
        Self {
            window: Cell::new(window),
            clamp,
            writer,
            value,
        }
    }

    pub fn value(&self) -> ScrollValue {
        self.value.clone()
    }

    pub fn set_window(&self, window: VisibilityWindow) {
        self.window.set(window);
    }

    /// `None` means the element is not mounted; progress reads 0.
    pub fn update(&self, geometry: Option<ElementGeometry>) {
        let progress = geometry
            .map(|geometry| window_progress(geometry, self.window.get(), self.clamp))
            .unwrap_or(0.0);
        self.writer.set(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn at_scroll(document_top: f64, height: f64, scroll: f64) -> ElementGeometry {
        ElementGeometry {
            top: document_top - scroll,
            height,
            viewport: VIEWPORT,
        }
    }

    #[test]
    fn parses_named_and_numeric_edges() {
        assert_eq!("start end".parse::<Intersection>(), Ok(Intersection::START_END));
        assert_eq!("center 0.25".parse::<Intersection>(), Ok(Intersection::new(0.5, 0.25)));
        assert!("start".parse::<Intersection>().is_err());
        assert!("top bottom".parse::<Intersection>().is_err());
        assert_eq!(
            VisibilityWindow::parse("start start", "end end"),
            Ok(VisibilityWindow::CONTAINED)
        );
    }

    #[test]
    fn transit_window_spans_entry_to_exit() {
        let window = VisibilityWindow::default();

        assert_eq!(window_progress(at_scroll(2000.0, 400.0, 0.0), window, true), 0.0);
        assert_eq!(window_progress(at_scroll(2000.0, 400.0, 1200.0), window, true), 0.0);
        assert_eq!(window_progress(at_scroll(2000.0, 400.0, 1800.0), window, true), 0.5);
        assert_eq!(window_progress(at_scroll(2000.0, 400.0, 2400.0), window, true), 1.0);
        assert_eq!(window_progress(at_scroll(2000.0, 400.0, 5000.0), window, true), 1.0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let window = VisibilityWindow::default();
        let mut previous = 0.0;

        for step in 0..=400 {
            let scroll = f64::from(step) * 10.0;
            let progress = window_progress(at_scroll(1500.0, 2400.0, scroll), window, true);

            assert!(progress >= previous, "regressed at scroll {scroll}");
            assert!((0.0..=1.0).contains(&progress));
            previous = progress;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn degenerate_window_reads_zero() {
        let viewport_sized = ElementGeometry {
            top: -100.0,
            height: VIEWPORT,
            viewport: VIEWPORT,
        };
        assert_eq!(window_progress(viewport_sized, VisibilityWindow::CONTAINED, true), 0.0);

        let collapsed = ElementGeometry {
            top: 10.0,
            height: 0.0,
            viewport: 0.0,
        };
        assert_eq!(window_progress(collapsed, VisibilityWindow::default(), false), 0.0);
    }

    #[test]
    fn unclamped_progress_runs_past_the_window() {
        let progress = window_progress(at_scroll(2000.0, 400.0, 3600.0), VisibilityWindow::default(), false);
        assert_eq!(progress, 2.0);
    }

    #[test]
    fn tracker_reads_zero_until_mounted() {
        let tracker = VisibilityTracker::new(VisibilityWindow::default(), true);
        let value = tracker.value();

        tracker.update(None);
        assert_eq!(value.get(), 0.0);

        tracker.update(Some(at_scroll(2000.0, 400.0, 1800.0)));
        assert_eq!(value.get(), 0.5);
    }

    #[test]
    fn changing_the_window_keeps_the_value_handle() {
        let tracker = VisibilityTracker::new(VisibilityWindow::TRANSIT, true);
        let value = tracker.value();
        let geometry = at_scroll(2000.0, 1600.0, 2200.0);

        tracker.update(Some(geometry));
        assert!((value.get() - 1000.0 / 2400.0).abs() < 1e-12);

        tracker.set_window(VisibilityWindow::CONTAINED);
        tracker.update(Some(geometry));
        assert_eq!(value.get(), 0.25);
        assert_eq!(tracker.value().get(), 0.25);
    }
}
