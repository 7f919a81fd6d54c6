//! HTTP client for the graph backend.
//!
//! The backend owns all graph construction, relation computation and
//! persistence; this module only issues requests against its `/api/graph`
//! surface and decodes the returned node-link snapshots.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{ConfigLink, ConfigNode, GraphConfig, LoadedLandscape, UploadedDataset};
