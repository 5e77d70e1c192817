//! Domain error types for spark-select.
//!
//! Only integration defects surface as errors. Recoverable conditions the
//! engine absorbs (out-of-range cursor requests, commits on an empty
//! registry) are silent no-ops and never reach this type.

use thiserror::Error;

/// Errors surfaced by the select engine.
#[derive(Debug, Error)]
pub enum SelectError {
    /// An [`OptionHandle`](crate::engine::OptionHandle) was used after its
    /// `Select` instance was dropped. This is a usage defect in the host
    /// wiring, not a runtime condition to retry.
    #[error("select instance is gone: option '{value}' outlived the widget it was registered with")]
    ContextMissing { value: String },
}

/// Result type alias for [`SelectError`].
pub type Result<T> = std::result::Result<T, SelectError>;
