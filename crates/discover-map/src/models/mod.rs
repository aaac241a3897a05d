//! Content models for Discover.
//!
//! # Core Types
//!
//! - [`ContentItem`] - A place card: restaurant, museum, viewpoint, ...
//! - [`Category`] - Category with its display color
//! - [`CategoryPalette`] - Category → color lookup with a fallback
//!
//! # Supporting Types
//!
//! - [`Media`] / [`MediaKind`] - Attached image, video or audio file

mod category;
mod content_item;
mod media;

pub use category::{Category, CategoryPalette};
pub use content_item::ContentItem;
pub use media::{Media, MediaKind};
