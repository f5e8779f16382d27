//! Application state and input handling

pub mod screen;
pub mod state;

pub use screen::{AppCoordinator, MenuOption, Screen};
pub use state::App;
