mod error;


pub use error::ChunkError;

use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default maximum chunk size, in units of the size metric
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Default overlap between consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Environment variables read by [`ChunkOptions::from_env`]
pub const ENV_CHUNK_SIZE: &str = "TEXTCHUNK_CHUNK_SIZE";
pub const ENV_CHUNK_OVERLAP: &str = "TEXTCHUNK_CHUNK_OVERLAP";
pub const ENV_FORMAT: &str = "TEXTCHUNK_FORMAT";
pub const ENV_STRATEGY: &str = "TEXTCHUNK_STRATEGY";

/// How a text is broken up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Separator-driven recursive splitting with merge and overlap
    #[default]
    Recursive,
}

impl FromStr for Strategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recursive" | "recursive_chunk" | "recursivechunk" => Ok(Strategy::Recursive),
            _ => Err(ChunkError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => f.write_str("recursive"),
        }
    }
}

/// User-facing chunking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOptions {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub format: Format,
    pub strategy: Strategy,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            format: Format::Plaintext,
            strategy: Strategy::Recursive,
        }
    }
}

impl ChunkOptions {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            ..Self::default()
        }
    }

    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject configurations the splitter cannot work with.
    ///
    /// An overlap at or above `chunk_size` is allowed; the splitter just
    /// advances one codepoint at a time in that case.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidChunkSize(self.chunk_size.to_string()));
        }
        Ok(())
    }

    /// Defaults overridden by `TEXTCHUNK_*` environment variables
    pub fn from_env() -> Result<Self, ChunkError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ChunkOptions::from_env`], reading from an arbitrary source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChunkError> {
        let mut options = Self::default();

        if let Some(raw) = lookup(ENV_CHUNK_SIZE) {
            options.chunk_size = parse_chunk_size(&raw)?;
        }
        if let Some(raw) = lookup(ENV_CHUNK_OVERLAP) {
            options.chunk_overlap = parse_chunk_overlap(&raw)?;
        }
        if let Some(raw) = lookup(ENV_FORMAT) {
            options.format = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_STRATEGY) {
            options.strategy = raw.parse()?;
        }

        options.validate()?;
        Ok(options)
    }
}

/// Parse a user-supplied chunk size, which must be a positive integer
pub fn parse_chunk_size(raw: &str) -> Result<usize, ChunkError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => {
            usize::try_from(value).map_err(|_| ChunkError::InvalidChunkSize(raw.to_string()))
        }
        _ => Err(ChunkError::InvalidChunkSize(raw.to_string())),
    }
}

/// Parse a user-supplied overlap, which must be a non-negative integer
pub fn parse_chunk_overlap(raw: &str) -> Result<usize, ChunkError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => {
            usize::try_from(value).map_err(|_| ChunkError::InvalidChunkOverlap(raw.to_string()))
        }
        _ => Err(ChunkError::InvalidChunkOverlap(raw.to_string())),
    }
}
