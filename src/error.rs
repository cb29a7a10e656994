//! Error types for the A6 adapter.

use thiserror::Error;

use crate::classify::MessageKind;

#[derive(Error, Debug)]
pub enum Error {
    /// A transformation was handed a message of the wrong kind.
    #[error("{operation} needs a single program dump, got {kind}")]
    UnsupportedInput {
        operation: &'static str,
        kind: MessageKind,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
