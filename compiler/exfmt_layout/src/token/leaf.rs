//! Leaf tokens: fixed literal text.

use crate::context::RenderContext;
use crate::emitter::Emitter;

/// Text inserted between the children of a comma-separated composite.
pub const SEPARATOR: &str = ", ";

/// A token rendered as a fixed text string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafToken {
    text: String,
}

impl LeafToken {
    /// Create a leaf token.
    pub fn new(text: impl Into<String>) -> Self {
        LeafToken { text: text.into() }
    }

    /// Create a `", "` separator leaf.
    pub fn separator() -> Self {
        LeafToken::new(SEPARATOR)
    }

    /// Get the literal text.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    pub(crate) fn render<E: Emitter>(&self, ctx: &mut RenderContext<E>) {
        ctx.emit(&self.text);
    }
}
