mod actions;
mod app_state;
pub mod catalog;
mod events;
mod navigation;
mod results;
mod selection;

pub use actions::*;
pub use app_state::*;
pub use events::*;
pub use navigation::*;
pub use results::*;
pub use selection::*;
