//! Placeholder data model
//!
//! A [`Placeholder`] is a named unit of content that template text refers
//! to with a tag. The [`Catalog`] keeps the live placeholders of a session
//! in order, and the [`Palette`] hands out their display colors.

mod catalog;
mod model;
mod palette;

pub use catalog::Catalog;
pub use model::{Placeholder, PlaceholderId, PlaceholderMode};
pub use palette::{Palette, FALLBACK_COLOR};
