use std::io;

/// Errors from BMP decoding, encoding, and file I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The source or destination file could not be opened, read, or written.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("not a BMP file: missing BM signature")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Input ran out before both headers could be read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),
}
