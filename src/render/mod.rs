//! Rendering template text against a placeholder catalog
//!
//! One template produces two outputs. The full render is the live preview
//! and leaves `Tag` placeholders as visible tags; the copyable render
//! expands everything, wrapping `Tag` placeholders in tag delimiters.

mod engine;
mod policy;

pub use engine::render;
pub use policy::{CopyablePolicy, FnPolicy, FullPolicy, RenderPass, RenderPolicy};
