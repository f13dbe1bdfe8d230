// ABOUTME: Main library entry point for the pagescope webpage signal extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, StructuredRecord, ScanError, ErrorCode.

//! pagescope-extract - structured signal extraction from web pages.
//!
//! This crate fetches a page and turns its markup into a stable, well-typed
//! [`StructuredRecord`]: metadata, content statistics, a media inventory, and a
//! theme/style inventory. The record is what downstream consumers (such as the
//! pagescope analysis agent) build prompts from.
//!
//! # Example
//!
//! ```no_run
//! use pagescope_extract::{Client, ScanError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScanError> {
//!     let client = Client::builder().build();
//!     let record = client.scan("https://example.com").await?;
//!     println!("{}", record.to_json_pretty().unwrap());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod options;
pub mod record;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScanError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::record::{
    ColorPalette, Content, ContentStats, FontInfo, ImageEntry, Layout, Media, Metadata,
    StructuredRecord, StyleElements, Theme,
};
