// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur in the gap index
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// The text to index contains a 0x00 byte at the given position;
    /// 0x00 is reserved for the internal sentinel
    NulByte(usize),

    /// A query pattern was empty
    EmptyPattern,

    /// Invalid gap interval (min, max) with min > max
    InvalidGapRange(usize, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GapIndexError: {self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Index result
pub type Result<T> = std::result::Result<T, Error>;
