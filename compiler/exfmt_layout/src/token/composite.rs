//! Composite tokens: an ordered run of child tokens.
//!
//! Metrics are memoized in `OnceCell`s on first read. Every `&mut` mutation
//! clears them, so a composite still being populated can never serve a stale
//! length. The cells also make the type `!Sync`: a tree can be handed to
//! another thread but never measured from two threads at once.

use std::cell::OnceCell;

use super::{LeafToken, Token, SEPARATOR};
use crate::context::RenderContext;
use crate::emitter::Emitter;

/// A composite longer than this renders multi-line.
pub const MULTI_LINE_LENGTH: usize = 90;

/// A composite with more children than this renders multi-line.
pub const MAX_INLINE_CHILDREN: usize = 5;

/// A token made of other tokens.
#[derive(Clone, Debug, Default)]
pub struct CompositeToken {
    children: Vec<Token>,
    add_commas: bool,
    force_multi_line: bool,
    length: OnceCell<usize>,
    multi_line: OnceCell<bool>,
}

impl CompositeToken {
    /// Create an empty composite without separators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composite from its children.
    ///
    /// With `add_commas`, `", "` is rendered between children and every child
    /// is marked splittable.
    pub fn from_tokens(children: impl IntoIterator<Item = Token>, add_commas: bool) -> Self {
        let mut children: Vec<Token> = children.into_iter().collect();
        if add_commas {
            for child in &mut children {
                child.set_splittable(true);
            }
        }
        CompositeToken {
            children,
            add_commas,
            ..Self::default()
        }
    }

    /// Create a composite from optional children, dropping absent ones.
    pub fn from_optional(
        children: impl IntoIterator<Item = Option<Token>>,
        add_commas: bool,
    ) -> Self {
        Self::from_tokens(children.into_iter().flatten(), add_commas)
    }

    /// Render `", "` between children from now on.
    ///
    /// Unlike [`from_tokens`](Self::from_tokens), this does not mark existing
    /// or later children splittable.
    #[must_use]
    pub fn with_commas(mut self) -> Self {
        self.add_commas = true;
        self.invalidate();
        self
    }

    /// Always render multi-line, regardless of length or child count.
    #[must_use]
    pub fn force_multi_line(mut self) -> Self {
        self.force_multi_line = true;
        self.invalidate();
        self
    }

    /// Append a child.
    pub fn push(&mut self, token: Token) {
        self.children.push(token);
        self.invalidate();
    }

    /// Append a child if present.
    pub fn push_optional(&mut self, token: Option<Token>) {
        if let Some(token) = token {
            self.push(token);
        }
    }

    /// Append a non-splittable leaf.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(LeafToken::new(text).into());
    }

    /// Append a splittable leaf.
    pub fn push_text_splittable(&mut self, text: impl Into<String>) {
        self.push(Token::leaf(text).splittable());
    }

    /// Get the children in render order.
    pub fn children(&self) -> &[Token] {
        &self.children
    }

    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if `", "` is rendered between children.
    pub fn adds_commas(&self) -> bool {
        self.add_commas
    }

    /// Sum of the children's lengths. Separators are not counted.
    pub fn length(&self) -> usize {
        *self
            .length
            .get_or_init(|| self.children.iter().map(Token::length).sum())
    }

    pub fn is_multi_line(&self) -> bool {
        *self.multi_line.get_or_init(|| {
            self.force_multi_line
                || self.length() > MULTI_LINE_LENGTH
                || self.children.len() > MAX_INLINE_CHILDREN
                || self.children.iter().any(Token::is_multi_line)
        })
    }

    fn invalidate(&mut self) {
        self.length = OnceCell::new();
        self.multi_line = OnceCell::new();
    }

    pub(crate) fn render<E: Emitter>(&self, ctx: &mut RenderContext<E>, indent: usize) {
        let multi_line = self.is_multi_line();
        if multi_line {
            tracing::trace!(
                children = self.children.len(),
                length = self.length(),
                indent,
                "composite breaks before splittable children"
            );
        }

        for (i, child) in self.children.iter().enumerate() {
            if i > 0 && self.add_commas {
                ctx.emit(SEPARATOR);
            }
            let child_indent = indent + child.split_indent();
            if multi_line && child.is_splittable() {
                ctx.newline(child_indent);
            }
            child.render_into(ctx, child_indent);
        }
    }
}

impl FromIterator<Token> for CompositeToken {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter, false)
    }
}

impl Extend<Token> for CompositeToken {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.children.extend(iter);
        self.invalidate();
    }
}
