//! Singleton interaction state shared through context: cursor mode, the
//! route-transition flag and bottom navigation visibility. Each holder has
//! exactly one writer at a time.

pub mod cursor;
pub mod nav;
pub mod route;

pub use cursor::{CursorMode, CursorState, CursorToken, SharedCursor, Trail};
pub use nav::NavVisibility;
pub use route::{Route, RouteProgress};
