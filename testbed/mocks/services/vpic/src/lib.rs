//! Mock vPIC API server for testing the vehicle finder without the network
//!
//! Serves the two vPIC endpoints the finder consumes from an in-memory
//! fixture, and records every API path it is asked for so tests can assert
//! how many fetches a screen issued. Fixtures can also be loaded from YAML
//! when the binary is run standalone.

pub mod fixtures;
pub mod handlers;
pub mod server;

pub use fixtures::VpicFixture;
pub use server::{MockServer, MockState, RunningMockServer};
