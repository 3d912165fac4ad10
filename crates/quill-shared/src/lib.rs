//! # Quill Shared
//!
//! Wire types shared between the server and its clients.

pub mod dto;

pub use dto::{HealthResponse, PostSummaryResponse};
