use serde::Deserialize;

/// Longest frame gap fed into the easing, in seconds. Keeps a hidden tab
/// from jumping straight to the target when it becomes visible.
const MAX_FRAME_SECS: f64 = 0.05;

const SAME_POSITION_PX: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothOptions {
    pub enabled: bool,
    pub duration_secs: f64,
    pub wheel_multiplier: f64,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: 1.2,
            wheel_multiplier: 1.0,
        }
    }
}

pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    options: SmoothOptions,
    current: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    limit: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(options: SmoothOptions, position: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let position = position.clamp(0.0, limit);
        Self {
            options,
            current: position,
            from: position,
            target: position,
            elapsed: 0.0,
            limit,
            animating: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    pub fn wheel(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }

        let target = (self.target + delta * self.options.wheel_multiplier).clamp(0.0, self.limit);
        if target == self.target && self.animating {
            return false;
        }
        if (target - self.current).abs() < SAME_POSITION_PX {
            self.current = target;
            self.from = target;
            self.target = target;
            self.elapsed = 0.0;
            self.animating = false;
            return false;
        }

        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.animating = true;
        true
    }

    pub fn tick(&mut self, dt_secs: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }

        self.elapsed += dt_secs.clamp(0.0, MAX_FRAME_SECS);
        let duration = self.options.duration_secs.max(f64::EPSILON);
        let t = (self.elapsed / duration).min(1.0);

        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            self.current = self.from + (self.target - self.from) * ease(t);
        }
        Some(self.current)
    }

    /// Adopts a position set by something other than this smoother. Ignored
    /// while animating, since the smoother's own writes echo back as native
    /// scroll events.
    pub fn sync(&mut self, native: f64) {
        if self.animating {
            return;
        }
        let position = native.clamp(0.0, self.limit);
        self.current = position;
        self.from = position;
        self.target = position;
    }

    pub fn reset(&mut self, position: f64) {
        self.animating = false;
        self.sync(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoother() -> SmoothScroll {
        SmoothScroll::new(SmoothOptions::default(), 0.0, 2000.0)
    }

    fn run_to_rest(scroll: &mut SmoothScroll) -> Vec<f64> {
        let mut frames = Vec::new();
        while let Some(position) = scroll.tick(1.0 / 60.0) {
            frames.push(position);
            assert!(frames.len() < 1000, "animation never settled");
        }
        frames
    }

    #[test]
    fn ease_starts_at_zero_and_settles_at_one() {
        assert!(ease(0.0).abs() < 0.01);
        assert_eq!(ease(1.0), 1.0);
        assert!(ease(0.5) > 0.9);
    }

    #[test]
    fn wheel_eases_toward_target() {
        let mut scroll = smoother();
        assert!(scroll.wheel(300.0));

        let frames = run_to_rest(&mut scroll);

        assert!(frames.windows(2).all(|pair| pair[1] >= pair[0]));
        assert_eq!(frames.last().copied(), Some(300.0));
        assert!(!scroll.is_animating());
        assert!((72..=73).contains(&frames.len()));
    }

    #[test]
    fn target_is_clamped_to_the_page() {
        let mut scroll = smoother();
        scroll.wheel(5000.0);
        run_to_rest(&mut scroll);
        assert_eq!(scroll.current(), 2000.0);

        assert!(!scroll.wheel(100.0));
        assert!(scroll.wheel(-300.0));
        assert_eq!(scroll.target(), 1700.0);
    }

    #[test]
    fn retargeting_mid_flight_starts_from_current_position() {
        let mut scroll = smoother();
        scroll.wheel(400.0);
        for _ in 0..10 {
            scroll.tick(1.0 / 60.0);
        }
        let midway = scroll.current();

        scroll.wheel(400.0);
        let next = scroll.tick(1.0 / 60.0).expect("still animating");

        assert_eq!(scroll.target(), 800.0);
        assert!(next >= midway);
    }

    #[test]
    fn reversing_onto_the_current_position_stops_in_place() {
        let mut scroll = smoother();
        scroll.wheel(300.0);
        for _ in 0..10 {
            scroll.tick(1.0 / 60.0);
        }
        let here = scroll.current();

        assert!(!scroll.wheel(here - scroll.target()));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(1.0 / 60.0), None);
        assert!((scroll.current() - here).abs() < 1e-6);

        assert!(scroll.wheel(100.0));
        let next = scroll.tick(1.0 / 60.0).expect("animating again");
        assert!(next >= here);
    }

    #[test]
    fn sync_is_ignored_while_animating() {
        let mut scroll = smoother();
        scroll.sync(900.0);
        assert_eq!(scroll.current(), 900.0);

        scroll.wheel(100.0);
        scroll.sync(0.0);
        assert_eq!(scroll.target(), 1000.0);

        scroll.reset(50.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.current(), 50.0);
    }
}
