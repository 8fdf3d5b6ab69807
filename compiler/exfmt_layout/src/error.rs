//! Construction errors.
//!
//! Rendering never fails; the only errors are contract violations caught while
//! a front end assembles a token tree.

/// Error raised when a token tree violates its construction contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A bracketed token was built without a body.
    #[error("bracketed token `{open}`...`{close}` has no body")]
    MissingBody { open: String, close: String },
}
