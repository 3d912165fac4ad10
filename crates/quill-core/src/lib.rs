//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains the post model and the repository port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
