use crate::codec::SectionTag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed section tag {:?} at offset {}", String::from_utf8_lossy(.tag), .offset)]
    MalformedTag { offset: usize, tag: [u8; 4] },

    #[error("duplicate section {tag} at offset {offset}")]
    DuplicateSection { tag: SectionTag, offset: usize },

    #[error("truncated section {tag} at offset {offset}: declared {declared} bytes, {available} available")]
    TruncatedSection {
        tag: SectionTag,
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("trailing bytes at offset {offset}: {remaining} bytes cannot form a section header")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("out of bounds: {width}-byte read at offset {offset}, span is {len} bytes")]
    OutOfBounds { offset: usize, width: usize, len: usize },

    #[error("missing section {0}")]
    MissingSection(SectionTag),

    #[error("map must be square: width {width}, height {height}")]
    NonSquareMap { width: u16, height: u16 },

    #[error("tile grid size mismatch: expected {expected} bytes, got {actual}")]
    TileGridSizeMismatch { expected: usize, actual: usize },

    #[error("unit section length {len} is not a multiple of 8")]
    UnitRecordSizeMismatch { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
