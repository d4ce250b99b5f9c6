//! Generator configuration.

use seqorder_schema::ResolverConfig;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Rendering target for generated order tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Rust source module with a static lookup table.
    #[default]
    Rust,
    /// JSON object of `{ path: { child: position } }`.
    Json,
}

impl OutputFormat {
    /// Parses a format name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rust" | "rs" => Some(Self::Rust),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Returns the format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Json => "json",
        }
    }

    /// Returns the file extension for generated files.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Rust => "rs",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("unknown output format '{s}' (expected rust or json)"))
    }
}

/// Configuration for a generator run over a schema directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory scanned for `*.xsd` files.
    pub schema_dir: PathBuf,
    /// Root directory for generated files.
    pub out_dir: PathBuf,
    /// Rendering target.
    pub format: OutputFormat,
    /// File stem of each generated file.
    pub file_stem: String,
    /// Resolver settings applied to every schema.
    pub resolver: ResolverConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_dir: PathBuf::from("schemas"),
            out_dir: PathBuf::from("generators"),
            format: OutputFormat::default(),
            file_stem: "schema_ordering".to_string(),
            resolver: ResolverConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema directory.
    #[must_use]
    pub fn with_schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = dir.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the resolver configuration.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the output file path for a schema with the given stem.
    #[must_use]
    pub fn output_path(&self, schema_stem: &str) -> PathBuf {
        self.out_dir
            .join(schema_stem)
            .join(format!("{}.{}", self.file_stem, self.format.extension()))
    }
}
