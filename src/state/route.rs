use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Activity,
    Travel,
    Music,
    Timeline,
    Projects,
    /// Unlisted; reachable by direct link only.
    Board,
    NotFound,
}

impl Route {
    pub const NAV: [Route; 6] = [
        Route::Home,
        Route::Activity,
        Route::Travel,
        Route::Music,
        Route::Timeline,
        Route::Projects,
    ];

    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Self::Home,
            "/activity" => Self::Activity,
            "/travel" => Self::Travel,
            "/music" => Self::Music,
            "/timeline" => Self::Timeline,
            "/projects" => Self::Projects,
            "/board" => Self::Board,
            _ => Self::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Activity => "/activity",
            Self::Travel => "/travel",
            Self::Music => "/music",
            Self::Timeline => "/timeline",
            Self::Projects => "/projects",
            Self::Board => "/board",
            Self::NotFound => "/404",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Activity => "Activity",
            Self::Travel => "Travel",
            Self::Music => "Music",
            Self::Timeline => "Timeline",
            Self::Projects => "Projects",
            Self::Board => "Board",
            Self::NotFound => "Not found",
        }
    }

    pub fn indexable(self) -> bool {
        !matches!(self, Self::Board | Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Cosmetic loading flag pulsed on navigation. Cleared by a timer rather
/// than by observing completion; a pulse only clears itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteProgress {
    active: bool,
    pulse: u64,
}

impl RouteProgress {
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self) -> u64 {
        self.pulse += 1;
        self.active = true;
        self.pulse
    }

    pub fn settle(&mut self, pulse: u64) -> bool {
        if !self.active || pulse != self.pulse {
            return false;
        }
        self.active = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/travel/"), Route::Travel);
        assert_eq!(Route::from_path("/timeline#georgia-tech"), Route::Timeline);
        assert_eq!(Route::from_path("/projects?ref=nav"), Route::Projects);
        assert_eq!(Route::from_path("/board/"), Route::Board);
        assert_eq!(Route::from_path("/app/board"), Route::NotFound);
    }

    #[test]
    fn board_is_unlisted_and_unindexed() {
        assert!(!Route::NAV.contains(&Route::Board));
        assert!(!Route::Board.indexable());
        assert!(Route::NAV.iter().all(|route| route.indexable()));
    }

    #[test]
    fn nav_routes_round_trip_through_paths() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn only_the_latest_pulse_clears() {
        let mut progress = RouteProgress::default();
        let first = progress.begin();
        let second = progress.begin();

        assert!(!progress.settle(first));
        assert!(progress.active());
        assert!(progress.settle(second));
        assert!(!progress.active());
        assert!(!progress.settle(second));
    }
}
