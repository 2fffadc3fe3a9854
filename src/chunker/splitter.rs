use super::chunk::{Chunk, Fragment};
use super::fallback::fallback_split;
use super::merger::merge;
use super::metric::SizeMetric;
use super::SplitContext;
use tracing::trace;

/// Used when none of the configured separators occur in a fragment
const TERMINAL_SEPARATOR: &str = " ";

/// Decompose a fragment into chunks, trying `separators` in priority order.
///
/// Recursion depth is bounded by `separators.len()`: every recursive call
/// gets a strictly shorter list.
pub(crate) fn split<S, M>(
    fragment: Fragment<'_>,
    separators: &[S],
    ctx: &SplitContext<'_, M>,
) -> Vec<Chunk>
where
    S: AsRef<str>,
    M: SizeMetric + ?Sized,
{
    let (active, remaining) = select_separator(fragment.text, separators);
    trace!(
        start = fragment.start,
        len = fragment.text.len(),
        separator = ?active,
        remaining = remaining.len(),
        "splitting fragment"
    );

    let mut chunks = Vec::new();
    let mut good: Vec<Fragment<'_>> = Vec::new();

    for piece in split_keeping_separator(fragment, active) {
        if ctx.fits(piece.text) {
            good.push(piece);
            continue;
        }

        if !good.is_empty() {
            chunks.extend(merge(&good, "", ctx));
            good.clear();
        }

        if remaining.is_empty() {
            chunks.extend(fallback_split(piece, ctx));
        } else {
            chunks.extend(split(piece, remaining, ctx));
        }
    }

    if !good.is_empty() {
        chunks.extend(merge(&good, "", ctx));
    }

    chunks
}

/// First separator that occurs in `text`, plus the separators after it.
/// Empty separators never match.
fn select_separator<'s, S>(text: &str, separators: &'s [S]) -> (&'s str, &'s [S])
where
    S: AsRef<str>,
{
    let found = separators.iter().position(|sep| {
        let sep = sep.as_ref();
        !sep.is_empty() && text.contains(sep)
    });

    match found {
        Some(idx) => (separators[idx].as_ref(), &separators[idx + 1..]),
        None => (TERMINAL_SEPARATOR, &separators[separators.len()..]),
    }
}

/// Split right before every occurrence of `separator`, so the separator
/// stays at the start of the following piece. Pieces are never empty and
/// concatenate back to the fragment.
fn split_keeping_separator<'t>(fragment: Fragment<'t>, separator: &str) -> Vec<Fragment<'t>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for (idx, _) in fragment.text.match_indices(separator) {
        if idx > last {
            pieces.push(fragment.slice(last..idx));
            last = idx;
        }
    }
    if last < fragment.text.len() {
        pieces.push(fragment.slice(last..fragment.text.len()));
    }

    pieces
}
