pub mod gallery;
pub mod health;
pub mod terms;
pub mod thumbnails;
