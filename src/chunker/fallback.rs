use super::chunk::{Chunk, Fragment};
use super::metric::SizeMetric;
use super::search::gallop_last_satisfying;
use super::SplitContext;
use tracing::warn;

/// Hard-split a fragment that has no usable separator left.
///
/// Works on codepoint boundaries and searches the metric, so it makes no
/// assumption about how wide a codepoint is. Each step only measures
/// prefixes up to about twice the chunk it emits, so a long run without
/// separators stays linear in its length. Grapheme clusters
/// (combined emoji, flags, etc) may end up split across chunks.
pub(crate) fn fallback_split<M>(fragment: Fragment<'_>, ctx: &SplitContext<'_, M>) -> Vec<Chunk>
where
    M: SizeMetric + ?Sized,
{
    if fragment.text.is_empty() {
        return Vec::new();
    }
    if ctx.fits(fragment.text) {
        return vec![fragment.into_chunk()];
    }

    // bounds[i] is the byte offset of codepoint i; bounds[n] == text.len()
    let bounds: Vec<usize> = fragment
        .text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(fragment.text.len()))
        .collect();
    let total = bounds.len() - 1;
    let span = |from: usize, to: usize| fragment.slice(bounds[from]..bounds[to]);

    let mut chunks = Vec::new();
    let mut cursor = 0;

    loop {
        let remaining = total - cursor;
        let mut taken = gallop_last_satisfying(0, remaining, |len| {
            ctx.fits(span(cursor, cursor + len).text)
        });

        if taken == 0 {
            // Even one codepoint is over budget; emit it anyway so we keep moving
            warn!(
                offset = fragment.start + bounds[cursor],
                chunk_size = ctx.chunk_size,
                "single codepoint exceeds chunk size"
            );
            taken = 1;
        }

        let end = cursor + taken;
        chunks.push(span(cursor, end).into_chunk());
        if end == total {
            break;
        }

        let overlap = gallop_last_satisfying(0, taken, |len| {
            ctx.measure(span(end - len, end).text) <= ctx.chunk_overlap
        });
        cursor += taken.saturating_sub(overlap).max(1);
    }

    chunks
}
