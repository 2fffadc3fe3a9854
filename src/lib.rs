// Public API exports
pub mod chunker;
pub mod format;
pub mod ingest;
pub mod options;

// Re-export main types for convenience
pub use chunker::{
    ApproxTokens, ByteLength, Chunk, Chunker, CodepointCount, MetricKind, NO_CHUNKS_TEXT,
    SizeMetric, SplitOptions, chunk, split_text,
};

pub use format::{Format, SeparatorRegistry};

pub use options::{
    ChunkError, ChunkOptions, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, Strategy,
    parse_chunk_overlap, parse_chunk_size,
};

pub use ingest::{ChunkRecord, SourceFile, collect_files};
