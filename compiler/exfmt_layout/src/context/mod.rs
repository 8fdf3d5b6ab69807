//! Render Context
//!
//! Tracks state during rendering: the output emitter, the output configuration,
//! and an explicit [`LineState`] describing where the current line stands.
//!
//! # Line breaks
//!
//! A break request never stacks blank lines. Indentation for a fresh line is
//! held back until visible text arrives, so repeated break requests at the same
//! point only re-target the pending indent. Anywhere else, including an empty
//! output, a break writes a terminator:
//!
//! | State | `newline(n)` | `emit(text)` |
//! |-------|--------------|--------------|
//! | `Start` | terminator, then `Fresh { n }` | text, then `Mid` |
//! | `Fresh { i }` | `Fresh { n }` | `i` levels of padding, text, then `Mid` |
//! | `Mid` | terminator, then `Fresh { n }` | text |

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 3;

/// Line terminator written between output lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r\n` (default).
    #[default]
    CrLf,

    /// `\n`.
    Lf,
}

impl LineEnding {
    /// Get the terminator text.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Configuration for rendering.
///
/// Only affects how breaks and indentation are spelled in the output. Layout
/// decisions (where to break) are made by the tokens themselves, so cached
/// token metrics stay valid under any configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Spaces per indentation level.
    /// Defaults to 3.
    pub indent_width: usize,

    /// Terminator between lines.
    /// Defaults to `\r\n`.
    pub line_ending: LineEnding,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
            line_ending: LineEnding::CrLf,
        }
    }
}

impl LayoutConfig {
    /// Create a new config with the specified indent width.
    #[must_use]
    pub fn with_indent_width(self, indent_width: usize) -> Self {
        Self {
            indent_width,
            ..self
        }
    }

    /// Create a new config with the specified line ending.
    #[must_use]
    pub fn with_line_ending(self, line_ending: LineEnding) -> Self {
        Self {
            line_ending,
            ..self
        }
    }
}

/// Where the current output line stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineState {
    /// Nothing has been written or requested yet.
    #[default]
    Start,

    /// A break was requested and no visible text followed it yet.
    /// `indent` is the pending indentation level.
    Fresh { indent: usize },

    /// Visible text has been written on the current line.
    Mid,
}

/// Rendering context that tracks state during output.
///
/// Wraps an emitter and maintains the current [`LineState`] and the
/// [`LayoutConfig`]. Tokens only talk to the context through [`emit`] and
/// [`newline`].
///
/// [`emit`]: RenderContext::emit
/// [`newline`]: RenderContext::newline
pub struct RenderContext<E: Emitter = StringEmitter> {
    emitter: E,
    config: LayoutConfig,
    line: LineState,
}

impl RenderContext<StringEmitter> {
    /// Create a new render context with a string emitter and default config.
    pub fn new() -> Self {
        Self::with_emitter(StringEmitter::new())
    }

    /// Create a new render context with a string emitter and custom config.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self::with_emitter_and_config(StringEmitter::new(), config)
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.emitter.output()
    }

    /// Get the current output without consuming.
    ///
    /// Pending indentation of a fresh line is not part of it yet.
    pub fn as_str(&self) -> &str {
        self.emitter.as_str()
    }
}

impl Default for RenderContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> RenderContext<E> {
    /// Create a render context with a specific emitter and default config.
    pub fn with_emitter(emitter: E) -> Self {
        Self::with_emitter_and_config(emitter, LayoutConfig::default())
    }

    /// Create a render context with a specific emitter and config.
    pub fn with_emitter_and_config(emitter: E, config: LayoutConfig) -> Self {
        Self {
            emitter,
            config,
            line: LineState::Start,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Get the current line state.
    pub fn line_state(&self) -> LineState {
        self.line
    }

    /// Check if the output sits at the start of a freshly broken line.
    #[inline]
    pub fn is_fresh_line(&self) -> bool {
        matches!(self.line, LineState::Fresh { .. })
    }

    /// Emit a text fragment.
    ///
    /// Empty text is ignored and leaves the line state untouched.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let LineState::Fresh { indent } = self.line {
            self.emitter.emit_indent(indent * self.config.indent_width);
        }
        self.emitter.emit(text);
        self.line = LineState::Mid;
    }

    /// Request a line break followed by `indent` levels of indentation.
    ///
    /// Idempotent at a given point: if nothing visible was written since the
    /// last break, only the pending indent changes.
    pub fn newline(&mut self, indent: usize) {
        if !self.is_fresh_line() {
            self.emitter.emit_newline(self.config.line_ending);
        }
        self.line = LineState::Fresh { indent };
    }

    /// Get the underlying emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Get a reference to the underlying emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}
