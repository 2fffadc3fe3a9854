use super::chunk::{Chunk, Fragment};
use super::metric::SizeMetric;
use super::search::{first_satisfying, gallop_last_satisfying};
use super::SplitContext;
use tracing::warn;

/// Greedily coalesce same-level fragments into chunks of at most
/// `chunk_size`, seeding each new chunk with up to `chunk_overlap` of
/// trailing context from the previous one.
///
/// Fragments must be contiguous and in source order when `separator` is
/// empty; that is how the recursive splitter calls this, since look-ahead
/// splitting already keeps each separator attached to its fragment.
///
/// The buffer is a window `front..back` over `fragments`, measured as a
/// slice of the joined text. Growing and trimming it are searches rather
/// than one fragment at a time, so each chunk costs a few measurements of
/// roughly its own length.
pub(crate) fn merge<M>(
    fragments: &[Fragment<'_>],
    separator: &str,
    ctx: &SplitContext<'_, M>,
) -> Vec<Chunk>
where
    M: SizeMetric + ?Sized,
{
    let joined = Joined::new(fragments, separator);
    let total = fragments.len();
    let mut chunks = Vec::new();
    let mut front = 0;
    let mut back = 0;

    while back < total {
        // The pending fragment always goes in: trimming made room for it,
        // or emptied the buffer trying
        back += 1;
        back = gallop_last_satisfying(back, total, |end| ctx.fits(joined.text(front, end)));

        chunks.extend(finalize(fragments[front].start, joined.text(front, back), ctx));
        if back == total {
            break;
        }

        // Keep the tail as overlap, unless it would push the next chunk over budget
        front = first_satisfying(front, back, |start| {
            ctx.measure(joined.text(start, back)) <= ctx.chunk_overlap
                && ctx.fits(joined.text(start, back + 1))
        });
    }

    chunks
}

/// Fragments joined once, with the byte span of each fragment in the result
struct Joined {
    text: String,
    spans: Vec<(usize, usize)>,
}

impl Joined {
    fn new(fragments: &[Fragment<'_>], separator: &str) -> Self {
        let mut text = String::new();
        let mut spans = Vec::with_capacity(fragments.len());

        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                text.push_str(separator);
            }
            let start = text.len();
            text.push_str(fragment.text);
            spans.push((start, text.len()));
        }

        Self { text, spans }
    }

    /// Fragments `from..to` joined by the separator; empty when `from == to`
    fn text(&self, from: usize, to: usize) -> &str {
        if from >= to {
            return "";
        }
        &self.text[self.spans[from].0..self.spans[to - 1].1]
    }
}

/// Oversized chunks are logged but still emitted so coverage has no gaps
fn finalize<M>(start_byte: usize, text: &str, ctx: &SplitContext<'_, M>) -> Option<Chunk>
where
    M: SizeMetric + ?Sized,
{
    if text.is_empty() {
        return None;
    }
    if !ctx.fits(text) {
        warn!(
            start_byte,
            size = ctx.measure(text),
            chunk_size = ctx.chunk_size,
            "chunk exceeds chunk_size"
        );
    }

    Some(Chunk {
        start_byte,
        end_byte: start_byte + text.len(),
        text: text.to_string(),
    })
}
