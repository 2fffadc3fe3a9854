use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;
use textchunk::ingest::{self, SourceFile};
use textchunk::{
    ChunkOptions, ChunkRecord, Chunker, Format, MetricKind, Strategy, parse_chunk_overlap,
    parse_chunk_size,
};
use tracing::info;

/// Split text files into size-bounded, overlapping chunks with exact byte offsets
#[derive(Parser, Debug)]
#[command(name = "textchunk", version, about)]
struct Cli {
    /// File or directory to chunk, or `-` for stdin
    path: PathBuf,

    /// Maximum chunk size, in units of --metric [env: TEXTCHUNK_CHUNK_SIZE]
    #[arg(long, value_parser = parse_chunk_size)]
    chunk_size: Option<usize>,

    /// Context repeated between consecutive chunks [env: TEXTCHUNK_CHUNK_OVERLAP]
    #[arg(long, value_parser = parse_chunk_overlap)]
    chunk_overlap: Option<usize>,

    /// Force a format instead of detecting it from file extensions [env: TEXTCHUNK_FORMAT]
    #[arg(long)]
    format: Option<Format>,

    /// Chunking strategy [env: TEXTCHUNK_STRATEGY]
    #[arg(long)]
    strategy: Option<Strategy>,

    /// How chunk size is measured: codepoints, bytes or tokens
    #[arg(long, default_value_t = MetricKind::Codepoints)]
    metric: MetricKind,

    /// Print a single pretty JSON array instead of one record per line
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON output; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textchunk=info".into()),
        )
        .init();

    let start_time = Instant::now();
    let mut options = ChunkOptions::from_env().context("Invalid TEXTCHUNK_* environment")?;
    if let Some(size) = cli.chunk_size {
        options.chunk_size = size;
    }
    if let Some(overlap) = cli.chunk_overlap {
        options.chunk_overlap = overlap;
    }
    if let Some(strategy) = cli.strategy {
        options.strategy = strategy;
    }
    let format_override = cli.format;

    let files = if cli.path.as_os_str() == "-" {
        vec![read_stdin(format_override.unwrap_or(options.format))?]
    } else {
        ingest::collect_files(&cli.path)
            .context(format!("Failed to collect files from {}", cli.path.display()))?
    };

    let mut total_chunks = 0usize;
    let mut pretty_records: Vec<ChunkRecord> = Vec::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for file in &files {
        let format = format_override.unwrap_or(file.format);
        let chunker = Chunker::new(options.clone().format(format))
            .context(format!("Invalid options for {}", file.path))?
            .with_metric(cli.metric);
        let records = ingest::records(file, chunker.chunk(&file.text));
        total_chunks += records.len();

        if cli.pretty {
            pretty_records.extend(records);
            continue;
        }
        for record in &records {
            serde_json::to_writer(&mut out, record)?;
            out.write_all(b"\n")?;
        }
    }

    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &pretty_records)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        "Chunked {} files into {} chunks (size {}, overlap {}, metric {}) [{:.2}s]",
        files.len(),
        total_chunks,
        options.chunk_size,
        options.chunk_overlap,
        cli.metric,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_stdin(format: Format) -> Result<SourceFile> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    let content_hash = ingest::hash_bytes(&bytes);
    let text = String::from_utf8(bytes).context("stdin is not valid UTF-8")?;

    Ok(SourceFile {
        path: "-".to_string(),
        format,
        content_hash,
        text,
    })
}
