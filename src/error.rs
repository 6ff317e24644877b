//! Error types for the showcase library.
//!
//! Every demonstration writes through a `std::io::Write` sink, so the
//! only runtime failure the library itself can produce is a sink write
//! error. Configuration and logging setup report through `anyhow` at
//! the binary boundary instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to write to output sink")]
    Io(#[from] std::io::Error),
}
