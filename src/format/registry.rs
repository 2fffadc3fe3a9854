use super::Format;
use std::collections::HashMap;

/// Resolves a [`Format`] to its ordered separator list.
///
/// Starts out with the built-in tables; callers can override any of them.
/// Each registry owns its tables, nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct SeparatorRegistry {
    /// Format -> separators mapping
    map: HashMap<Format, Vec<String>>,
}

impl SeparatorRegistry {
    /// Create a registry holding every built-in table
    pub fn new() -> Self {
        let map = Format::ALL
            .iter()
            .map(|format| {
                let separators = format.separators().iter().map(|s| s.to_string()).collect();
                (*format, separators)
            })
            .collect();

        Self { map }
    }

    /// Replace the separator list for a format
    ///
    /// Empty strings are dropped; they would match everywhere.
    ///
    /// # Example
    /// ```ignore
    /// registry.register(Format::Markdown, ["\n## ", "\n\n", "\n", " "]);
    /// ```
    pub fn register<I, S>(&mut self, format: Format, separators: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let separators = separators
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        self.map.insert(format, separators);
    }

    /// Separators for a format, falling back to the built-in table
    pub fn separators(&self, format: Format) -> Vec<String> {
        match self.map.get(&format) {
            Some(separators) => separators.clone(),
            None => format.separators().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of formats with a table
    pub fn format_count(&self) -> usize {
        self.map.len()
    }
}

impl Default for SeparatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_loaded() {
        let registry = SeparatorRegistry::new();
        assert_eq!(registry.format_count(), Format::ALL.len());
        assert_eq!(
            registry.separators(Format::Plaintext),
            vec!["\n\n", "\n", " "]
        );
    }

    #[test]
    fn test_register_overrides_table() {
        let mut registry = SeparatorRegistry::new();
        registry.register(Format::Markdown, ["\n## ", "", "\n"]);

        assert_eq!(registry.separators(Format::Markdown), vec!["\n## ", "\n"]);
        // Other formats untouched
        assert_eq!(registry.separators(Format::Python)[0], "\nclass ");
    }
}
