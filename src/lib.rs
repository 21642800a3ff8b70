pub mod config;
pub mod content;
pub mod globe;
pub mod motion;
pub mod palette;
pub mod state;
pub mod typography;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
