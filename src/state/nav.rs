const REVEAL_AFTER_PX: f64 = 100.0;
const FOOTER_CLEARANCE_PX: f64 = 200.0;

/// Bottom navigation: hidden while scrolling down, shown on the way up, and
/// always hidden near the footer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavVisibility {
    visible: bool,
    last_offset: f64,
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_offset: 0.0,
        }
    }
}

impl NavVisibility {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns the new visibility when it changed.
    pub fn update(&mut self, offset: f64, viewport: f64, content: f64) -> Option<bool> {
        let distance_to_end = content - (offset + viewport);
        let visible = if distance_to_end < FOOTER_CLEARANCE_PX {
            false
        } else {
            !(offset > self.last_offset && offset > REVEAL_AFTER_PX)
        };
        self.last_offset = offset;

        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_scroll_down_and_shows_on_scroll_up() {
        let mut nav = NavVisibility::default();

        assert_eq!(nav.update(50.0, 800.0, 4000.0), None);
        assert_eq!(nav.update(400.0, 800.0, 4000.0), Some(false));
        assert_eq!(nav.update(600.0, 800.0, 4000.0), None);
        assert_eq!(nav.update(550.0, 800.0, 4000.0), Some(true));
    }

    #[test]
    fn always_hidden_near_the_footer() {
        let mut nav = NavVisibility::default();

        assert_eq!(nav.update(3100.0, 800.0, 4000.0), Some(false));
        assert_eq!(nav.update(3050.0, 800.0, 4000.0), None);
    }
}
