//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, logging setup, the main UI loop
//! and drawing of the two screens. It coordinates between the domain logic
//! and infrastructure components.

pub mod cli;
pub mod logging;
pub mod ui;
pub mod views;
