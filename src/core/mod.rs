//! Core utilities shared by the API clients
//!
//! - `http`: default headers and the shared `reqwest` client builder

pub mod http;

pub use http::{build_client, default_headers, get_json};
