//! Per-placeholder expansion policies

use std::fmt;

use crate::placeholder::{Placeholder, PlaceholderMode};

/// Decides which placeholders a render pass expands, and how
pub trait RenderPolicy {
    /// Whether the placeholder takes part in this pass at all
    fn includes(&self, placeholder: &Placeholder) -> bool;

    /// Whether the content is wrapped in opening/closing tags instead of inlined
    fn wraps(&self, placeholder: &Placeholder) -> bool;
}

/// Live preview: only `Replace` placeholders expand, always inlined
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPolicy;

impl RenderPolicy for FullPolicy {
    fn includes(&self, placeholder: &Placeholder) -> bool {
        placeholder.mode != PlaceholderMode::Tag
    }

    fn wraps(&self, _placeholder: &Placeholder) -> bool {
        false
    }
}

/// Export: every placeholder expands, `Tag` placeholders are wrapped
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyablePolicy;

impl RenderPolicy for CopyablePolicy {
    fn includes(&self, _placeholder: &Placeholder) -> bool {
        true
    }

    fn wraps(&self, placeholder: &Placeholder) -> bool {
        placeholder.mode == PlaceholderMode::Tag
    }
}

/// Policy assembled from two closures
pub struct FnPolicy<F, W> {
    filter: F,
    wrap: W,
}

impl<F, W> FnPolicy<F, W>
where
    F: Fn(&Placeholder) -> bool,
    W: Fn(&Placeholder) -> bool,
{
    pub fn new(filter: F, wrap: W) -> Self {
        Self { filter, wrap }
    }
}

impl<F, W> RenderPolicy for FnPolicy<F, W>
where
    F: Fn(&Placeholder) -> bool,
    W: Fn(&Placeholder) -> bool,
{
    fn includes(&self, placeholder: &Placeholder) -> bool {
        (self.filter)(placeholder)
    }

    fn wraps(&self, placeholder: &Placeholder) -> bool {
        (self.wrap)(placeholder)
    }
}

/// The two standing render passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPass {
    /// Preview shown while editing
    #[default]
    Full,
    /// Text used for copying and export
    Copyable,
}

impl RenderPolicy for RenderPass {
    fn includes(&self, placeholder: &Placeholder) -> bool {
        match self {
            RenderPass::Full => FullPolicy.includes(placeholder),
            RenderPass::Copyable => CopyablePolicy.includes(placeholder),
        }
    }

    fn wraps(&self, placeholder: &Placeholder) -> bool {
        match self {
            RenderPass::Full => FullPolicy.wraps(placeholder),
            RenderPass::Copyable => CopyablePolicy.wraps(placeholder),
        }
    }
}

impl fmt::Display for RenderPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPass::Full => write!(f, "full"),
            RenderPass::Copyable => write!(f, "copyable"),
        }
    }
}
