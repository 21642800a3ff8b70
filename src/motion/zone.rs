use tracing::{debug, warn};

/// Discrete zones selected by thresholding progress. `zones[i]` covers
/// `[boundaries[i - 1], boundaries[i])`; a progress equal to a boundary
/// belongs to the zone above it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneMap<Z> {
    boundaries: Vec<f64>,
    zones: Vec<Z>,
}

impl<Z: Copy + PartialEq> ZoneMap<Z> {
    /// Needs one more zone than boundaries. Unsorted or non-finite
    /// boundaries are dropped with a warning; surplus zones are ignored.
    pub fn new(boundaries: &[f64], zones: &[Z]) -> Option<Self> {
        if zones.is_empty() {
            return None;
        }

        let mut cleaned: Vec<f64> = Vec::with_capacity(boundaries.len());
        for &boundary in boundaries {
            let in_order = cleaned.last().map_or(true, |previous| boundary >= *previous);
            if boundary.is_finite() && in_order {
                cleaned.push(boundary);
            } else {
                warn!(boundary, "ignoring out-of-order theme zone boundary");
            }
        }

        cleaned.truncate(zones.len() - 1);
        let zones = zones[..=cleaned.len()].to_vec();

        Some(Self {
            boundaries: cleaned,
            zones,
        })
    }

    pub fn zone_at(&self, progress: f64) -> Z {
        let index = self
            .boundaries
            .iter()
            .take_while(|boundary| progress >= **boundary)
            .count();
        self.zones[index]
    }

    pub fn first(&self) -> Z {
        self.zones[0]
    }
}

#[derive(Clone, Debug)]
pub struct ZoneTracker<Z> {
    map: ZoneMap<Z>,
    current: Z,
    commits: usize,
}

impl<Z: Copy + PartialEq + std::fmt::Debug> ZoneTracker<Z> {
    pub fn new(map: ZoneMap<Z>) -> Self {
        let current = map.first();
        Self {
            map,
            current,
            commits: 0,
        }
    }

    pub fn current(&self) -> Z {
        self.current
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn update(&mut self, progress: f64) -> Option<Z> {
        let zone = self.map.zone_at(progress);
        if zone == self.current {
            return None;
        }

        debug!(from = ?self.current, to = ?zone, progress, "theme zone changed");
        self.current = zone;
        self.commits += 1;
        Some(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Zone {
        A,
        B,
        C,
    }

    fn three_zones() -> ZoneMap<Zone> {
        ZoneMap::new(&[0.33, 0.67], &[Zone::A, Zone::B, Zone::C]).expect("zones")
    }

    #[test]
    fn commits_once_per_boundary_crossing() {
        let mut tracker = ZoneTracker::new(three_zones());
        let mut observed = Vec::new();

        for progress in [0.0, 0.2, 0.33, 0.5, 0.67, 0.9] {
            tracker.update(progress);
            observed.push(tracker.current());
        }

        assert_eq!(
            observed,
            vec![Zone::A, Zone::A, Zone::B, Zone::B, Zone::C, Zone::C]
        );
        assert_eq!(tracker.commits(), 2);
    }

    #[test]
    fn repeated_ticks_in_a_zone_do_not_commit() {
        let mut tracker = ZoneTracker::new(three_zones());
        assert_eq!(tracker.update(0.5), Some(Zone::B));

        for _ in 0..60 {
            assert_eq!(tracker.update(0.5), None);
        }
        assert_eq!(tracker.commits(), 1);
    }

    #[test]
    fn scrolling_back_commits_again() {
        let mut tracker = ZoneTracker::new(three_zones());

        assert_eq!(tracker.update(0.9), Some(Zone::C));
        assert_eq!(tracker.update(0.1), Some(Zone::A));
        assert_eq!(tracker.commits(), 2);
    }

    #[test]
    fn drops_unsorted_boundaries() {
        let map = ZoneMap::new(&[0.5, 0.2], &[Zone::A, Zone::B, Zone::C]).expect("zones");

        assert_eq!(map.zone_at(0.3), Zone::A);
        assert_eq!(map.zone_at(0.6), Zone::B);
        assert!(ZoneMap::<Zone>::new(&[0.5], &[]).is_none());
    }
}
