use crate::options::ChunkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measures the "size" of a piece of text for budgeting purposes.
///
/// Implementations must be monotonic: appending characters to a text never
/// makes it smaller. The fallback splitter binary-searches against the
/// metric and relies on this.
pub trait SizeMetric {
    fn size(&self, text: &str) -> usize;
}

impl<F> SizeMetric for F
where
    F: Fn(&str) -> usize,
{
    fn size(&self, text: &str) -> usize {
        self(text)
    }
}

/// Number of Unicode scalar values (the default metric)
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCount;

impl SizeMetric for CodepointCount {
    fn size(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Number of UTF-8 bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteLength;

impl SizeMetric for ByteLength {
    fn size(&self, text: &str) -> usize {
        text.len()
    }
}

/// Rough token estimate: one token per 4 bytes, rounded up
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTokens;

impl SizeMetric for ApproxTokens {
    fn size(&self, text: &str) -> usize {
        text.len().div_ceil(4)
    }
}

/// Built-in metric selector, used where the metric comes from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Codepoints,
    Bytes,
    Tokens,
}

impl SizeMetric for MetricKind {
    fn size(&self, text: &str) -> usize {
        match self {
            MetricKind::Codepoints => CodepointCount.size(text),
            MetricKind::Bytes => ByteLength.size(text),
            MetricKind::Tokens => ApproxTokens.size(text),
        }
    }
}

impl FromStr for MetricKind {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "codepoints" | "chars" => Ok(MetricKind::Codepoints),
            "bytes" => Ok(MetricKind::Bytes),
            "tokens" => Ok(MetricKind::Tokens),
            _ => Err(ChunkError::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricKind::Codepoints => "codepoints",
            MetricKind::Bytes => "bytes",
            MetricKind::Tokens => "tokens",
        };
        f.write_str(name)
    }
}
