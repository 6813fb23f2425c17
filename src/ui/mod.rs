//! UI module - menus and the text HUD.

mod hud;
mod menu;
mod plugin;

pub use hud::HudPlugin;
pub use menu::{ClassMenu, MenuCursor};
pub use plugin::UiPlugin;
