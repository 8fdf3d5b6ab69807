//! Output Emitter
//!
//! Abstraction for output production during rendering.
//! Emitters are append-only: indentation adjustments are resolved by the
//! [`RenderContext`](crate::RenderContext) before anything reaches the emitter.

use crate::context::LineEnding;

/// Trait for emitting rendered output.
///
/// The renderer writes to an emitter as it walks the token tree. Different
/// implementations support in-memory strings or other destinations.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a line terminator.
    fn emit_newline(&mut self, ending: LineEnding);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);
}

/// String-based emitter for in-memory rendering.
///
/// This is the emitter behind [`render`](crate::render). It builds a string
/// incrementally and provides the result.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self, ending: LineEnding) {
        self.buffer.push_str(ending.as_str());
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
    }
}
