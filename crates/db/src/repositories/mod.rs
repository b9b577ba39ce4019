//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod gallery_item_repo;

pub use gallery_item_repo::GalleryItemRepo;
