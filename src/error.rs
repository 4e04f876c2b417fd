use thiserror::Error;

use crate::ScanValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot scan {0:?} into a spatial value")]
    TypeMismatch(ScanValue),
    #[error("malformed hex encoding: {0}")]
    MalformedEncoding(#[from] hex::FromHexError),
    #[error("unsupported byte order {0}")]
    UnsupportedByteOrder(u8),
    #[error("truncated WKB input: {0} bytes required, {1} remaining")]
    TruncatedInput(usize, usize),
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}
