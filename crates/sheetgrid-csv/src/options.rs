//! CSV options

/// Options for reading delimited text
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first row is a header to skip (default: false)
    pub has_header: bool,
    /// Trim whitespace around fields (default: false)
    pub trim: bool,
    /// Allow rows of different lengths (default: true)
    pub flexible: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            trim: false,
            flexible: true,
        }
    }
}

impl CsvReadOptions {
    /// Tab-separated input
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip (or keep) the first row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Trim whitespace around fields
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
