//! Bracketed tokens: a body between open/close delimiters.

use super::{Token, TokenKind};
use crate::context::RenderContext;
use crate::emitter::Emitter;
use crate::error::LayoutError;

/// A token that is surrounded by brackets when rendered.
///
/// A short single element collapses onto the enclosing line. A multi-line body
/// is indented one level deeper, with the close bracket on its own line.
#[derive(Clone, Debug)]
pub struct BracketedToken {
    open: String,
    close: String,
    body: Box<Token>,
    new_line_before: bool,
    omit_brackets_for_single: bool,
}

impl BracketedToken {
    /// Create a bracketed token with both flags off.
    pub fn new(open: impl Into<String>, close: impl Into<String>, body: Token) -> Self {
        BracketedToken {
            open: open.into(),
            close: close.into(),
            body: Box::new(body),
            new_line_before: false,
            omit_brackets_for_single: false,
        }
    }

    /// Create a bracketed token from a body that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingBody`] when `body` is `None`.
    pub fn try_new(
        open: impl Into<String>,
        close: impl Into<String>,
        body: Option<Token>,
    ) -> Result<Self, LayoutError> {
        let open = open.into();
        let close = close.into();
        match body {
            Some(body) => Ok(Self::new(open, close, body)),
            None => Err(LayoutError::MissingBody { open, close }),
        }
    }

    /// Put the body on its own line, reopening the bracket there.
    #[must_use]
    pub fn new_line_before(mut self) -> Self {
        self.new_line_before = true;
        self
    }

    /// Drop the brackets when the body is a single element.
    #[must_use]
    pub fn omit_brackets_for_single(mut self) -> Self {
        self.omit_brackets_for_single = true;
        self
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn body(&self) -> &Token {
        &self.body
    }

    pub fn is_new_line_before(&self) -> bool {
        self.new_line_before
    }

    /// Check if the brackets are left out when rendering.
    ///
    /// True when omission is enabled, the body is not forced onto a new line,
    /// and the body is either not a composite or a composite with one child.
    pub fn omits_brackets(&self) -> bool {
        if self.new_line_before || !self.omit_brackets_for_single {
            return false;
        }
        match self.body.kind() {
            TokenKind::Composite(composite) => composite.len() == 1,
            TokenKind::Leaf(_) | TokenKind::Bracketed(_) => true,
        }
    }

    /// Body length plus both brackets.
    ///
    /// Brackets count even when [`omits_brackets`](Self::omits_brackets) holds;
    /// the length only feeds multi-line decisions.
    pub fn length(&self) -> usize {
        self.body.length() + self.open.chars().count() + self.close.chars().count()
    }

    pub fn is_multi_line(&self) -> bool {
        self.body.is_multi_line() || self.new_line_before
    }

    pub(crate) fn render<E: Emitter>(&self, ctx: &mut RenderContext<E>, indent: usize) {
        let single = self.omits_brackets();
        let mut indent = indent;
        let mut open_indent = indent;

        if self.new_line_before {
            ctx.newline(indent);
            ctx.emit(&self.open);
        }

        // A parent already broke the line for us; re-target it instead of
        // writing the bracket mid-line.
        let already_indented = ctx.is_fresh_line();

        let body_multi_line = self.body.is_multi_line();
        if body_multi_line {
            indent += 1;
        }
        if self.new_line_before || already_indented {
            ctx.newline(indent);
        }
        if !self.new_line_before && !single {
            ctx.emit(&self.open);
            open_indent = indent;
        }

        tracing::trace!(
            open = %self.open,
            single,
            body_multi_line,
            indent,
            "render bracketed"
        );

        self.body.render_into(ctx, indent + self.body.split_indent());

        if body_multi_line {
            ctx.newline(open_indent);
        }
        if !single {
            ctx.emit(&self.close);
        }
    }
}
