mod chunk;
mod fallback;
mod merger;
mod metric;
mod search;
mod splitter;


pub use chunk::{Chunk, NO_CHUNKS_TEXT};
pub use metric::{ApproxTokens, ByteLength, CodepointCount, MetricKind, SizeMetric};

use crate::format::SeparatorRegistry;
use crate::options::{ChunkError, ChunkOptions, Strategy};
use chunk::Fragment;
use tracing::debug;

/// Core split configuration: budgets plus the resolved separator list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Maximum size of a chunk, per the size metric
    pub chunk_size: usize,
    /// Maximum size of the context repeated from the previous chunk
    pub chunk_overlap: usize,
    /// Delimiters, most structural first
    pub separators: Vec<String>,
}

impl SplitOptions {
    /// Options with `separators` tried in the given order
    pub fn new<I, S>(chunk_size: usize, chunk_overlap: usize, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chunk_size,
            chunk_overlap,
            separators: separators.into_iter().map(Into::into).collect(),
        }
    }
}

/// Budgets and metric shared by the splitter, merger and fallback splitter
pub(crate) struct SplitContext<'m, M: ?Sized> {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    metric: &'m M,
}

impl<'m, M> SplitContext<'m, M>
where
    M: SizeMetric + ?Sized,
{
    pub fn new(chunk_size: usize, chunk_overlap: usize, metric: &'m M) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            metric,
        }
    }

    pub fn measure(&self, text: &str) -> usize {
        self.metric.size(text)
    }

    pub fn fits(&self, text: &str) -> bool {
        self.measure(text) <= self.chunk_size
    }
}

/// Split `text` into ordered chunks with exact byte spans.
///
/// Options are assumed valid. Never returns an empty list: when nothing
/// could be produced (e.g. empty input) the result is a single
/// [`Chunk::sentinel`].
pub fn split_text<M>(text: &str, options: &SplitOptions, metric: &M) -> Vec<Chunk>
where
    M: SizeMetric + ?Sized,
{
    let ctx = SplitContext::new(options.chunk_size, options.chunk_overlap, metric);
    let chunks = if text.is_empty() {
        Vec::new()
    } else {
        splitter::split(Fragment::root(text), options.separators.as_slice(), &ctx)
    };

    if chunks.is_empty() {
        debug!(bytes = text.len(), "no chunks created, returning placeholder");
        return vec![Chunk::sentinel()];
    }

    debug!(
        bytes = text.len(),
        chunks = chunks.len(),
        chunk_size = options.chunk_size,
        chunk_overlap = options.chunk_overlap,
        "split text"
    );
    chunks
}

/// Validated options, resolved separators and a size metric, ready to chunk
#[derive(Debug, Clone)]
pub struct Chunker<M = CodepointCount> {
    options: ChunkOptions,
    split: SplitOptions,
    metric: M,
}

impl Chunker<CodepointCount> {
    /// Validate `options` and resolve separators from the built-in tables
    pub fn new(options: ChunkOptions) -> Result<Self, ChunkError> {
        Self::with_registry(options, &SeparatorRegistry::new())
    }

    /// Validate `options` and resolve separators from `registry`
    pub fn with_registry(
        options: ChunkOptions,
        registry: &SeparatorRegistry,
    ) -> Result<Self, ChunkError> {
        options.validate()?;
        let split = SplitOptions {
            chunk_size: options.chunk_size,
            chunk_overlap: options.chunk_overlap,
            separators: registry.separators(options.format),
        };

        Ok(Self {
            options,
            split,
            metric: CodepointCount,
        })
    }
}

impl<M> Chunker<M>
where
    M: SizeMetric,
{
    /// Swap the size metric, keeping everything else
    pub fn with_metric<N: SizeMetric>(self, metric: N) -> Chunker<N> {
        Chunker {
            options: self.options,
            split: self.split,
            metric,
        }
    }

    /// The validated options this chunker was built from
    pub fn options(&self) -> &ChunkOptions {
        &self.options
    }

    /// Separators resolved for the configured format, in priority order
    pub fn separators(&self) -> &[String] {
        &self.split.separators
    }

    /// Chunk `text`. Never returns an empty list: empty input yields a
    /// single [`Chunk::sentinel`].
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        match self.options.strategy {
            Strategy::Recursive => split_text(text, &self.split, &self.metric),
        }
    }

    /// Chunk raw bytes; they must be valid UTF-8
    pub fn chunk_bytes(&self, bytes: &[u8]) -> Result<Vec<Chunk>, ChunkError> {
        let text = std::str::from_utf8(bytes).map_err(|e| ChunkError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.chunk(text))
    }
}

/// Chunk `text` with `options` and the default codepoint metric
pub fn chunk(text: &str, options: &ChunkOptions) -> Result<Vec<Chunk>, ChunkError> {
    Ok(Chunker::new(options.clone())?.chunk(text))
}
