//! Common types used across the application.

pub mod pagination;

pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest, PagedList};
