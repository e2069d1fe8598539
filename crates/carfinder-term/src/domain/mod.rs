//! Core domain logic for the vehicle finder.
//!
//! This module contains the screen state machines, routing and data models
//! that drive the terminal UI, independent of the HTTP client or terminal
//! backend in use.

pub mod models;
pub mod services;
