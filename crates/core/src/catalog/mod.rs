//! Demo product catalogue and the data service that pages it.

pub mod product;
pub mod service;


pub use product::Product;
pub use service::{DataService, InMemoryDataService};
