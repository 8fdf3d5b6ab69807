//! exfmt Layout Engine
//!
//! Token layout model for the exfmt expression pretty-printer.
//!
//! # Architecture
//!
//! A front end decomposes an expression into a tree of [`Token`]s. The tree is
//! then rendered in a single recursive pass:
//!
//! 1. **Measure**: every node reports its inline [`Token::length`] and whether it
//!    is [`Token::is_multi_line`]. Composite metrics are computed once and cached.
//! 2. **Render**: top-down walk deciding, per node, whether to break before
//!    splittable children, how far to indent, and whether brackets around a
//!    single element can be dropped.
//!
//! Core principle: a composite goes multi-line when it is longer than
//! [`MULTI_LINE_LENGTH`], has more than [`MAX_INLINE_CHILDREN`] children, or
//! contains a multi-line child.
//!
//! # Modules
//!
//! - [`token`]: Node kinds and their measure/render rules
//! - [`emitter`]: Output abstraction
//! - [`context`]: Render context with explicit line state and output config
//! - [`error`]: Construction errors

pub mod context;
pub mod emitter;
pub mod error;
pub mod token;

use std::sync::Once;

pub use context::{LayoutConfig, LineEnding, LineState, RenderContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use error::LayoutError;
pub use token::{
    BracketedToken, CompositeToken, LeafToken, Token, TokenKind, MAX_INLINE_CHILDREN,
    MULTI_LINE_LENGTH, SEPARATOR,
};

/// Render a token tree with the default configuration.
///
/// # Example
///
/// ```
/// use exfmt_layout::{render, Token};
///
/// let sum = Token::composite([Token::leaf("a"), Token::leaf(" + "), Token::leaf("b")]);
/// assert_eq!(render(&sum), "a + b");
/// ```
pub fn render(root: &Token) -> String {
    render_with_config(root, LayoutConfig::default())
}

/// Render a token tree with a custom configuration.
///
/// Each call allocates its own buffer, so rendering the same tree repeatedly
/// always yields the same text.
#[tracing::instrument(level = "trace", skip_all, fields(length = root.length()))]
pub fn render_with_config(root: &Token, config: LayoutConfig) -> String {
    let emitter = StringEmitter::with_capacity(root.length());
    let mut ctx = RenderContext::with_emitter_and_config(emitter, config);
    root.render_into(&mut ctx, 0);
    ctx.output()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG` is
/// set, e.g. `RUST_LOG=exfmt_layout=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
