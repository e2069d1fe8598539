mod action;
mod error;
mod event;
mod route;
mod vehicle;
mod vehicle_data_client;

pub use action::*;
pub use error::*;
pub use event::*;
pub use route::*;
pub use vehicle::*;
pub use vehicle_data_client::*;
