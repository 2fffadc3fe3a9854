mod registry;
mod separators;


pub use registry::SeparatorRegistry;

use crate::options::ChunkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Kind of document being chunked; decides which separators are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Plaintext,
    Markdown,
    Elixir,
    Python,
    Ruby,
    Php,
    Javascript,
    Typescript,
    Vue,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    Html,
}

impl Format {
    pub const ALL: [Format; 15] = [
        Format::Plaintext,
        Format::Markdown,
        Format::Elixir,
        Format::Python,
        Format::Ruby,
        Format::Php,
        Format::Javascript,
        Format::Typescript,
        Format::Vue,
        Format::Rust,
        Format::Go,
        Format::Java,
        Format::C,
        Format::Cpp,
        Format::Html,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Plaintext => "plaintext",
            Format::Markdown => "markdown",
            Format::Elixir => "elixir",
            Format::Python => "python",
            Format::Ruby => "ruby",
            Format::Php => "php",
            Format::Javascript => "javascript",
            Format::Typescript => "typescript",
            Format::Vue => "vue",
            Format::Rust => "rust",
            Format::Go => "go",
            Format::Java => "java",
            Format::C => "c",
            Format::Cpp => "cpp",
            Format::Html => "html",
        }
    }

    /// Built-in separator table, most structural first
    pub fn separators(&self) -> &'static [&'static str] {
        match self {
            Format::Plaintext => separators::PLAINTEXT,
            Format::Markdown => separators::MARKDOWN,
            Format::Elixir => separators::ELIXIR,
            Format::Python => separators::PYTHON,
            Format::Ruby => separators::RUBY,
            Format::Php => separators::PHP,
            Format::Javascript => separators::JAVASCRIPT,
            Format::Typescript => separators::TYPESCRIPT,
            Format::Vue => separators::VUE,
            Format::Rust => separators::RUST,
            Format::Go => separators::GO,
            Format::Java => separators::JAVA,
            Format::C => separators::C,
            Format::Cpp => separators::CPP,
            Format::Html => separators::HTML,
        }
    }

    /// Detect format from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        Some(match ext.to_lowercase().as_str() {
            "txt" | "text" | "log" => Format::Plaintext,
            "md" | "markdown" => Format::Markdown,
            "ex" | "exs" => Format::Elixir,
            "py" => Format::Python,
            "rb" => Format::Ruby,
            "php" => Format::Php,
            "js" | "jsx" | "mjs" | "cjs" => Format::Javascript,
            "ts" | "tsx" => Format::Typescript,
            "vue" => Format::Vue,
            "rs" => Format::Rust,
            "go" => Format::Go,
            "java" => Format::Java,
            "c" | "h" => Format::C,
            "cpp" | "cc" | "cxx" | "hpp" => Format::Cpp,
            "html" | "htm" => Format::Html,
            _ => return None,
        })
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl FromStr for Format {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        let format = match tag.as_str() {
            "plaintext" | "text" | "txt" | "plain" => Format::Plaintext,
            "markdown" | "md" => Format::Markdown,
            "elixir" | "ex" => Format::Elixir,
            "python" | "py" => Format::Python,
            "ruby" | "rb" => Format::Ruby,
            "php" => Format::Php,
            "javascript" | "js" => Format::Javascript,
            "typescript" | "ts" => Format::Typescript,
            "vue" => Format::Vue,
            "rust" | "rs" => Format::Rust,
            "go" | "golang" => Format::Go,
            "java" => Format::Java,
            "c" => Format::C,
            "cpp" | "c++" => Format::Cpp,
            "html" => Format::Html,
            _ => return Err(ChunkError::UnknownFormat(s.to_string())),
        };
        Ok(format)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
