//! Clipdeck ingests a declarative catalog of video clips (channel → clips)
//! into a SQLite store, backfilling missing clip end-times from the
//! YouTube metadata API.

pub mod catalog;
pub mod config;
pub mod database;
pub mod duration;
pub mod error;
pub mod provider;
pub mod resolver;

pub use catalog::Catalog;
pub use config::Config;
pub use database::{Database, Outcome};
pub use error::Error;
pub use provider::{DurationProvider, YouTubeClient};
