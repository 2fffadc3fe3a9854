use proptest::prelude::*;
use textchunk::{
    ByteLength, Chunk, ChunkOptions, CodepointCount, Format, SizeMetric, SplitOptions, chunk,
    split_text,
};

fn text_content() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,200}",
        "[a-z \\n]{0,200}",
        "[a-zé日本🦀👍🏽 \\n.,]{0,120}",
        any::<String>(),
    ]
}

fn any_format() -> impl Strategy<Value = Format> {
    prop::sample::select(Format::ALL.to_vec())
}

fn options(format: Format, chunk_size: usize, chunk_overlap: usize) -> SplitOptions {
    SplitOptions::new(chunk_size, chunk_overlap, format.separators().iter().copied())
}

fn assert_spans(text: &str, chunks: &[Chunk]) -> Result<(), TestCaseError> {
    for chunk in chunks {
        prop_assert_eq!(&text[chunk.byte_range()], chunk.text.as_str());
        prop_assert_eq!(chunk.end_byte - chunk.start_byte, chunk.text.len());
    }
    Ok(())
}

proptest! {
    /// With no overlap the chunks tile the input exactly
    #[test]
    fn prop_zero_overlap_reconstructs(
        text in text_content(),
        format in any_format(),
        chunk_size in 1usize..64,
    ) {
        prop_assume!(!text.is_empty());
        let chunks = split_text(&text, &options(format, chunk_size, 0), &CodepointCount);

        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(&rebuilt, &text);
        prop_assert_eq!(chunks.iter().map(Chunk::len).sum::<usize>(), text.len());
        for pair in chunks.windows(2) {
            prop_assert_eq!(pair[0].end_byte, pair[1].start_byte);
        }
    }

    /// Every chunk is the exact byte slice of the input it claims to cover
    #[test]
    fn prop_exact_slices(
        text in text_content(),
        format in any_format(),
        chunk_size in 1usize..64,
        chunk_overlap in 0usize..80,
    ) {
        prop_assume!(!text.is_empty());
        let chunks = split_text(&text, &options(format, chunk_size, chunk_overlap), &CodepointCount);
        assert_spans(&text, &chunks)?;
    }

    /// No chunk exceeds the budget under a monotonic metric
    #[test]
    fn prop_size_bound(
        text in text_content(),
        chunk_size in 4usize..64,
        chunk_overlap in 0usize..32,
        by_bytes in any::<bool>(),
    ) {
        let opts = options(Format::Plaintext, chunk_size, chunk_overlap);
        if by_bytes {
            // Budget of at least 4 bytes so every codepoint fits
            let chunks = split_text(&text, &opts, &ByteLength);
            for chunk in chunks.iter().filter(|c| !c.is_sentinel()) {
                prop_assert!(ByteLength.size(&chunk.text) <= chunk_size);
            }
        } else {
            let chunks = split_text(&text, &opts, &CodepointCount);
            for chunk in chunks.iter().filter(|c| !c.is_sentinel()) {
                prop_assert!(CodepointCount.size(&chunk.text) <= chunk_size);
            }
        }
    }

    /// The first chunk starts at 0 and the last one ends at the input length
    #[test]
    fn prop_coverage_boundary(
        text in text_content(),
        format in any_format(),
        chunk_size in 1usize..64,
        chunk_overlap in 0usize..32,
    ) {
        prop_assume!(!text.is_empty());
        let chunks = split_text(&text, &options(format, chunk_size, chunk_overlap), &CodepointCount);

        prop_assert!(!chunks.is_empty());
        prop_assert_eq!(chunks[0].start_byte, 0);
        prop_assert_eq!(chunks[chunks.len() - 1].end_byte, text.len());
        for pair in chunks.windows(2) {
            prop_assert!(pair[0].start_byte <= pair[1].start_byte);
            prop_assert!(pair[1].start_byte <= pair[0].end_byte);
        }
    }

    /// Same input and options, same chunks
    #[test]
    fn prop_deterministic(
        text in text_content(),
        format in any_format(),
        chunk_size in 1usize..64,
        chunk_overlap in 0usize..32,
    ) {
        let opts = options(format, chunk_size, chunk_overlap);
        prop_assert_eq!(
            split_text(&text, &opts, &CodepointCount),
            split_text(&text, &opts, &CodepointCount)
        );
    }
}

#[test]
fn empty_input_is_always_the_sentinel() {
    for format in Format::ALL {
        let chunks = split_text("", &options(format, 10, 2), &CodepointCount);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_sentinel());
    }
}

fn assert_covers(text: &str, chunks: &[Chunk], chunk_size: usize) {
    assert_eq!(chunks[0].start_byte, 0);
    assert_eq!(chunks[chunks.len() - 1].end_byte, text.len());
    for chunk in chunks {
        assert_eq!(&text[chunk.byte_range()], chunk.text);
        assert!(chunk.text.chars().count() <= chunk_size);
    }
    for pair in chunks.windows(2) {
        assert!(pair[0].start_byte < pair[1].start_byte);
        assert!(pair[1].start_byte <= pair[0].end_byte);
    }
}

#[test]
fn megabyte_token_without_separators() {
    let text = "Zm9vYmFy".repeat(1 << 17);
    let chunks = chunk(&text, &ChunkOptions::new(10, 3)).unwrap();

    assert_covers(&text, &chunks, 10);
    assert_eq!(chunks[1].start_byte, 7);
}

#[test]
fn megabyte_of_short_words_with_default_options() {
    let text = "lorem ipsum dolor sit amet ".repeat(40_000);
    let options = ChunkOptions::default();
    let chunks = chunk(&text, &options).unwrap();

    assert_covers(&text, &chunks, options.chunk_size);
    assert!(chunks.len() > text.len() / options.chunk_size);
}

#[test]
fn megabyte_of_lines_with_byte_metric() {
    let text = "let x = 1;\n".repeat(100_000);
    let chunks = split_text(&text, &options(Format::Rust, 512, 64), &ByteLength);

    assert_covers(&text, &chunks, 512);
    for chunk in &chunks {
        assert!(chunk.text.len() <= 512);
    }
}
