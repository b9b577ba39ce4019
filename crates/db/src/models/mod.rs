//! Database entity models and DTOs.

pub mod gallery_item;
