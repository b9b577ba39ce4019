//! `mosaic-thumbnailer` -- client for the external thumbnail collaborator.
//!
//! The collaborator owns one representative image per term; everything it
//! produces is a derived cache, never authoritative catalog data. This
//! crate exposes the [`ThumbnailService`] seam the API server is built
//! against, the HTTP implementation, and an in-memory recording
//! implementation for tests and offline development.

pub mod http;
pub mod recording;
pub mod service;

pub use http::HttpThumbnailer;
pub use recording::RecordingThumbnailer;
pub use service::{TermThumbnail, ThumbnailError, ThumbnailService};
