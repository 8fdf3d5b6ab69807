//! Layout Tokens
//!
//! A [`Token`] is a node of the layout tree. Every token can measure itself
//! ([`Token::length`], [`Token::is_multi_line`]) and render itself into a
//! [`RenderContext`].
//!
//! # Node Kinds
//!
//! | Kind | Length | Multi-line when |
//! |------|--------|-----------------|
//! | Leaf | `text.chars().count()` | never |
//! | Composite | sum of children | length > 90, more than 5 children, or any child multi-line |
//! | Bracketed | body + open + close | body multi-line, or forced onto a new line |
//!
//! # Shared Attributes
//!
//! - `splittable`: the token may start a new line when its parent is multi-line
//! - `split_indent`: extra indent levels applied to the token's own content

mod bracketed;
mod composite;
mod leaf;


use std::fmt;

pub use bracketed::BracketedToken;
pub use composite::{CompositeToken, MAX_INLINE_CHILDREN, MULTI_LINE_LENGTH};
pub use leaf::{LeafToken, SEPARATOR};

use crate::context::RenderContext;
use crate::emitter::Emitter;

/// The closed set of node kinds.
#[derive(Clone, Debug)]
pub enum TokenKind {
    /// Fixed literal text.
    Leaf(LeafToken),
    /// Ordered children, optionally comma-separated.
    Composite(CompositeToken),
    /// A body wrapped in open/close delimiters.
    Bracketed(BracketedToken),
}

/// A layout-tree node.
///
/// Attributes are set with the consuming builder methods before the token is
/// moved into its parent.
#[derive(Clone, Debug)]
pub struct Token {
    kind: TokenKind,
    splittable: bool,
    split_indent: usize,
}

impl Token {
    /// Wrap a node kind with default attributes.
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            splittable: false,
            split_indent: 0,
        }
    }

    /// Create a leaf token.
    pub fn leaf(text: impl Into<String>) -> Self {
        LeafToken::new(text).into()
    }

    /// Create a `", "` separator token.
    pub fn separator() -> Self {
        LeafToken::separator().into()
    }

    /// Create a composite without automatic separators.
    pub fn composite(children: impl IntoIterator<Item = Token>) -> Self {
        CompositeToken::from_tokens(children, false).into()
    }

    /// Create a comma-separated composite. Every child becomes splittable.
    pub fn comma_list(children: impl IntoIterator<Item = Token>) -> Self {
        CompositeToken::from_tokens(children, true).into()
    }

    /// Create a bracketed token with default flags.
    pub fn bracketed(open: impl Into<String>, close: impl Into<String>, body: Token) -> Self {
        BracketedToken::new(open, close, body).into()
    }

    /// Mark this token as splittable.
    #[must_use]
    pub fn splittable(self) -> Self {
        self.with_splittable(true)
    }

    /// Set whether this token may start a new line inside a multi-line parent.
    #[must_use]
    pub fn with_splittable(mut self, splittable: bool) -> Self {
        self.splittable = splittable;
        self
    }

    /// Set the extra indent levels applied to this token's own content.
    #[must_use]
    pub fn with_split_indent(mut self, split_indent: usize) -> Self {
        self.split_indent = split_indent;
        self
    }

    pub(crate) fn set_splittable(&mut self, splittable: bool) {
        self.splittable = splittable;
    }

    /// Get the node kind.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Check if this token may start a new line inside a multi-line parent.
    #[inline]
    pub fn is_splittable(&self) -> bool {
        self.splittable
    }

    /// Get the extra indent levels applied to this token's own content.
    #[inline]
    pub fn split_indent(&self) -> usize {
        self.split_indent
    }

    /// Get the composite node, if this is one.
    pub fn as_composite(&self) -> Option<&CompositeToken> {
        match &self.kind {
            TokenKind::Composite(composite) => Some(composite),
            TokenKind::Leaf(_) | TokenKind::Bracketed(_) => None,
        }
    }

    /// Visible character count, ignoring inserted breaks and padding.
    pub fn length(&self) -> usize {
        match &self.kind {
            TokenKind::Leaf(leaf) => leaf.length(),
            TokenKind::Composite(composite) => composite.length(),
            TokenKind::Bracketed(bracketed) => bracketed.length(),
        }
    }

    /// Check if rendering this token necessarily spans multiple lines.
    pub fn is_multi_line(&self) -> bool {
        match &self.kind {
            TokenKind::Leaf(_) => false,
            TokenKind::Composite(composite) => composite.is_multi_line(),
            TokenKind::Bracketed(bracketed) => bracketed.is_multi_line(),
        }
    }

    /// Render this token at `indent` levels.
    ///
    /// Assumes the current line is already indented to `indent` or is mid-line.
    /// Never ends with a forced line break. The token's own `split_indent` is
    /// applied by its parent, not here.
    pub fn render_into<E: Emitter>(&self, ctx: &mut RenderContext<E>, indent: usize) {
        match &self.kind {
            TokenKind::Leaf(leaf) => leaf.render(ctx),
            TokenKind::Composite(composite) => composite.render(ctx, indent),
            TokenKind::Bracketed(bracketed) => bracketed.render(ctx, indent),
        }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token::new(kind)
    }
}

impl From<LeafToken> for Token {
    fn from(leaf: LeafToken) -> Self {
        Token::new(TokenKind::Leaf(leaf))
    }
}

impl From<CompositeToken> for Token {
    fn from(composite: CompositeToken) -> Self {
        Token::new(TokenKind::Composite(composite))
    }
}

impl From<BracketedToken> for Token {
    fn from(bracketed: BracketedToken) -> Self {
        Token::new(TokenKind::Bracketed(bracketed))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self))
    }
}
