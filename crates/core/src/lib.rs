//! Core paging logic for Pagewise.
//!
//! This crate contains pure logic with ZERO web dependencies.
//! The page window arithmetic, link construction and summary text live here;
//! turning them into markup is left to the caller.
//!
//! # Modules
//!
//! - `pager` - Page window calculation and navigation link sets
//! - `catalog` - Demo product catalogue and the data service that pages it

pub mod catalog;
pub mod pager;
