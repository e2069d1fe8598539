//! Infrastructure layer providing external integrations.
//!
//! This module contains the HTTP client for the vPIC vehicle data API.

pub mod clients;
