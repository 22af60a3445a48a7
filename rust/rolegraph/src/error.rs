use thiserror::Error;

use crate::WordId;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum RolegraphError {
    /// A word's ID column did not hold a numeric ordinal.
    ///
    /// Ids must parse to integers: member ordering and head-pointer matching
    /// compare them numerically.
    #[error("Word id is not a numeric ordinal: {0:?}")]
    InvalidWordId(String),

    /// A head-pointer column held something other than a word ordinal or
    /// the placeholder.
    #[error("Head pointer is not a numeric ordinal: {0:?}")]
    InvalidHeadPointer(String),

    /// Two rows of one sentence carried the same word id.
    #[error("Duplicate word id in sentence: {0}")]
    DuplicateWordId(WordId),
}
