//! Built-in results sources.

pub mod fixture;
pub mod http;

pub use fixture::FixtureSource;
pub use http::HttpSource;
