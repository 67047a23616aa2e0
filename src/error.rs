//! The error taxonomy for the expenses CLI.
//!
//! Only the conditions callers must tell apart get their own variant.
//! Everything else travels as an `anyhow` chain through the `Other`
//! variant, which `?` produces automatically via `From`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The amount given for a new expense did not parse as a number.
    /// Nothing was written.
    #[error("invalid amount '{0}': please enter a valid number")]
    InvalidAmount(String),

    /// The local store file does not exist yet. Read paths never create
    /// it; run `expenses init` first.
    #[error("no expense data found at '{}'", .0.display())]
    StoreMissing(PathBuf),

    /// A remote mirror call failed. Carries the underlying cause and is
    /// never retried.
    #[error("remote mirror operation failed: {0:#}")]
    Remote(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
