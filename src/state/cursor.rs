use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Default,
    Link,
    Reveal,
    Modal,
}

impl CursorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Link => "link",
            Self::Reveal => "reveal",
            Self::Modal => "modal",
        }
    }

    pub fn ring_scale(self) -> f64 {
        match self {
            Self::Link => 1.5,
            Self::Modal => 1.35,
            Self::Reveal => 1.25,
            Self::Default => 1.0,
        }
    }

    pub fn ring_opacity(self) -> f64 {
        match self {
            Self::Modal => 0.45,
            _ => 1.0,
        }
    }

    pub fn dot_scale(self) -> f64 {
        match self {
            Self::Modal => 1.3,
            _ => 1.0,
        }
    }
}

/// Issued by [`CursorState::enter`]; only the holder of the newest token can
/// reset the mode on leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    mode: CursorMode,
    hidden: bool,
    generation: u64,
}

impl CursorState {
    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn enter(&mut self, mode: CursorMode) -> CursorToken {
        self.generation += 1;
        self.mode = mode;
        CursorToken(self.generation)
    }

    /// Resets to [`CursorMode::Default`] unless another element entered
    /// after the one holding `token`.
    pub fn leave(&mut self, token: CursorToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.mode = CursorMode::Default;
        true
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

/// One cursor state shared by every hover target. Equality is identity, so
/// mode changes never make two handles compare unequal.
#[derive(Clone, Debug, Default)]
pub struct SharedCursor(Rc<RefCell<CursorState>>);

impl PartialEq for SharedCursor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SharedCursor {
    pub fn get(&self) -> CursorState {
        *self.0.borrow()
    }

    pub fn enter(&self, mode: CursorMode) -> CursorToken {
        self.0.borrow_mut().enter(mode)
    }

    pub fn leave(&self, token: CursorToken) -> bool {
        self.0.borrow_mut().leave(token)
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().set_hidden(hidden);
    }
}

/// The ring that lags behind the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trail {
    pub x: f64,
    pub y: f64,
    factor: f64,
}

impl Trail {
    pub const PARKED: (f64, f64) = (-200.0, -200.0);

    pub fn new(factor: f64) -> Self {
        let (x, y) = Self::PARKED;
        Self {
            x,
            y,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    pub fn step(&mut self, target_x: f64, target_y: f64) {
        self.x += (target_x - self.x) * self.factor;
        self.y += (target_y - self.y) * self.factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave_restores_default() {
        let mut state = CursorState::default();
        let token = state.enter(CursorMode::Link);
        assert_eq!(state.mode(), CursorMode::Link);

        assert!(state.leave(token));
        assert_eq!(state.mode(), CursorMode::Default);
    }

    #[test]
    fn stale_leave_does_not_clobber_newer_enter() {
        let mut state = CursorState::default();
        let outer = state.enter(CursorMode::Reveal);
        let inner = state.enter(CursorMode::Link);

        assert!(!state.leave(outer));
        assert_eq!(state.mode(), CursorMode::Link);

        assert!(state.leave(inner));
        assert_eq!(state.mode(), CursorMode::Default);
    }

    #[test]
    fn sibling_enter_before_leave_keeps_new_mode() {
        let mut state = CursorState::default();
        let first = state.enter(CursorMode::Link);
        let _second = state.enter(CursorMode::Modal);
        state.leave(first);

        assert_eq!(state.mode(), CursorMode::Modal);
    }

    #[test]
    fn shared_cursor_equality_ignores_mode_changes() {
        let shared = SharedCursor::default();
        let before = shared.clone();

        let token = shared.enter(CursorMode::Link);
        shared.set_hidden(true);
        assert_eq!(shared, before);
        assert_eq!(before.get().mode(), CursorMode::Link);
        assert!(before.get().hidden());

        assert!(before.leave(token));
        assert_eq!(shared.get().mode(), CursorMode::Default);
        assert_ne!(shared, SharedCursor::default());
    }

    #[test]
    fn visual_parameters_follow_mode() {
        assert_eq!(CursorMode::Link.ring_scale(), 1.5);
        assert_eq!(CursorMode::Modal.ring_opacity(), 0.45);
        assert_eq!(CursorMode::Modal.dot_scale(), 1.3);
        assert_eq!(CursorMode::Default.ring_scale(), 1.0);
    }

    #[test]
    fn trail_converges_on_pointer() {
        let mut trail = Trail::new(0.15);
        for _ in 0..200 {
            trail.step(400.0, 300.0);
        }
        assert!((trail.x - 400.0).abs() < 0.01);
        assert!((trail.y - 300.0).abs() < 0.01);
    }
}
