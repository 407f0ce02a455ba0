//! Access to the Ergast-compatible statistics API.

pub mod cache;
pub mod http;
pub mod names;
pub mod source;
pub mod types;

pub use cache::ResponseCache;
pub use http::{ClientConfig, ErgastClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use source::RaceDataSource;
