use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk_size must be a positive integer, got {0}")]
    InvalidChunkSize(String),

    #[error("chunk_overlap must be a non-negative integer, got {0}")]
    InvalidChunkOverlap(String),

    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    #[error("unknown chunking strategy '{0}' (supported: recursive)")]
    UnknownStrategy(String),

    #[error("unknown size metric '{0}' (supported: codepoints, bytes, tokens)")]
    UnknownMetric(String),

    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}
