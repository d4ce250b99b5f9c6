//! Schema directory driver.
//!
//! Each schema is walked, resolved and rendered on its own; nothing is shared
//! between documents. The first failing schema stops the run, because a
//! partially indexed document would produce a wrong order table.

use crate::config::{GeneratorConfig, OutputFormat};
use crate::error::CodegenError;
use crate::json::JsonGenerator;
use crate::rust::{OrderTableGenerator, table_ident};
use seqorder_schema::{ResolvedOrderMap, SchemaWalker, XmlTokenSource, resolve};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Main code generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Processes every schema in the schema directory.
    ///
    /// # Returns
    /// Paths of the written files, in schema file name order.
    ///
    /// # Errors
    /// Returns `CodegenError` for the first schema that cannot be read,
    /// resolved or written.
    pub fn run(&self) -> Result<Vec<PathBuf>, CodegenError> {
        let schemas = self.schema_files()?;
        tracing::info!(
            "Generating order tables for {} schema(s) from {}",
            schemas.len(),
            self.config.schema_dir.display()
        );

        let mut written = Vec::with_capacity(schemas.len());
        for schema in &schemas {
            written.push(self.process_file(schema)?);
        }

        Ok(written)
    }

    /// Lists the `*.xsd` files of the schema directory, sorted by name.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the directory cannot be read.
    pub fn schema_files(&self) -> Result<Vec<PathBuf>, CodegenError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.config.schema_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "xsd") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Resolves one schema file and writes its table.
    ///
    /// # Returns
    /// Path of the written file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema cannot be read or resolved, or
    /// the output cannot be written.
    pub fn process_file(&self, schema: &Path) -> Result<PathBuf, CodegenError> {
        let stem = schema
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                CodegenError::generation(format!("invalid schema file name: {}", schema.display()))
            })?;

        let orders = self.resolve_file(schema)?;
        let source = schema
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        let rendered = self.render(&orders, stem, Some(source))?;

        let out_path = self.config.output_path(stem);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, rendered)?;

        tracing::info!(
            "Wrote {} keys for {} to {}",
            orders.len(),
            schema.display(),
            out_path.display()
        );

        Ok(out_path)
    }

    /// Walks and resolves one schema file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be opened or the schema is
    /// malformed or cyclic under the configured policy.
    pub fn resolve_file(&self, schema: &Path) -> Result<ResolvedOrderMap, CodegenError> {
        let file = fs::File::open(schema)?;
        let mut source = XmlTokenSource::from_reader(BufReader::new(file));
        let index = SchemaWalker::new().walk(&mut source)?;
        Ok(resolve(index, &self.config.resolver)?)
    }

    /// Renders an order map in the configured format.
    ///
    /// # Errors
    /// Returns `CodegenError::Json` if JSON rendering fails.
    pub fn render(
        &self,
        orders: &ResolvedOrderMap,
        stem: &str,
        source: Option<&str>,
    ) -> Result<String, CodegenError> {
        match self.config.format {
            OutputFormat::Rust => {
                let ident = table_ident(stem);
                let mut table = OrderTableGenerator::new(orders, &ident);
                if let Some(source) = source {
                    table = table.with_source(source);
                }
                Ok(table.generate())
            }
            OutputFormat::Json => JsonGenerator::new(orders).generate(),
        }
    }
}
