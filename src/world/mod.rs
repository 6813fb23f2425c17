//! World module - level layout, encounters, the shop and data errors.

mod encounter;
mod error;
mod level;
mod plugin;
mod shop;

pub use encounter::*;
pub use error::DataLoadError;
pub use level::*;
pub use plugin::WorldPlugin;
pub use shop::*;
