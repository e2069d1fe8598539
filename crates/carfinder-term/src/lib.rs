//! Terminal vehicle finder backed by the NHTSA vPIC API.
//!
//! Two screens share one navigation history: a Selection screen where a make
//! and a model year are picked, and a Results screen that fetches and lists
//! the matching models. The same make catalog also drives a `static-paths`
//! command that enumerates every result route ahead of time.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{current_year, destruct_terminal_for_panic, start_loop, start_ui};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, Event, Make, PathParams, Route, RouteParams, VehicleDataClient, VehicleModel,
    VpicError,
};
pub use domain::services::{AppState, AppStateProps};
pub use infrastructure::clients::VehicleDataClientManager;
