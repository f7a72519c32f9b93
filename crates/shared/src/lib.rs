//! Shared types, errors, and configuration for Pagewise.
//!
//! This crate provides common types used across all other crates:
//! - Paging request and paged list types
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CatalogConfig, PagerConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{DEFAULT_PAGE_SIZE, PageRequest, PagedList};
