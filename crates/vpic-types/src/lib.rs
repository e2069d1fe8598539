//! Type definitions for the NHTSA vPIC vehicle API.
//!
//! The vPIC API wraps every answer in the same envelope (`Count`, `Message`,
//! `SearchCriteria`, `Results`). This crate models that envelope together with
//! the two record shapes the finder consumes, and the endpoint paths that
//! produce them. Both the HTTP client and the testbed mock server depend on it,
//! so the wire contract lives in one place.
//!
//! ## Example
//!
//! ```rust
//! use vpic_types::MakesResponse;
//!
//! let body = r#"{"Count":1,"Message":"ok","Results":[{"MakeId":474,"MakeName":"HONDA"}]}"#;
//! let response: MakesResponse = serde_json::from_str(body).unwrap();
//!
//! assert_eq!(response.results()[0].make_name, "HONDA");
//! ```

pub mod endpoints;
pub mod types;

pub use endpoints::*;
pub use types::*;
