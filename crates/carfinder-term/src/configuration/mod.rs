//! Configuration management for the vehicle finder.
//!
//! This module provides centralized configuration handling for the vPIC
//! endpoint, the vehicle type offered on the Selection screen and logging.

mod config;

pub use config::*;
