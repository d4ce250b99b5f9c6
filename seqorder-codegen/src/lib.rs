//! # seqorder Codegen
//!
//! Generation of field-order tables from XSD schemas.
//!
//! This crate provides:
//! - Rust module generation with a static, sorted lookup table
//! - JSON rendering of the same table
//! - A driver that processes a directory of schemas
//! - The `seqorder` command line tool

pub mod config;
pub mod error;
pub mod generator;
pub mod json;
pub mod rust;

pub use config::{GeneratorConfig, OutputFormat};
pub use error::CodegenError;
pub use generator::Generator;

use seqorder_schema::{ResolverConfig, order_schema};

/// Generates a Rust order table module from an XSD schema string.
///
/// # Arguments
/// * `xml` - XSD schema content
/// * `stem` - Schema name used to derive the table identifier
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if walking or resolving the schema fails.
pub fn generate_from_xml(xml: &str, stem: &str) -> Result<String, CodegenError> {
    let orders = order_schema(xml, &ResolverConfig::default())?;
    let ident = rust::table_ident(stem);
    Ok(rust::OrderTableGenerator::new(&orders, &ident).generate())
}

/// Generates a Rust order table module from an XSD schema file.
///
/// # Arguments
/// * `path` - Path to the XSD schema file
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, walking or resolving fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let generator = Generator::default();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CodegenError::generation("schema path has no file stem"))?;
    let orders = generator.resolve_file(path)?;
    generator.render(&orders, stem, path.file_name().and_then(|s| s.to_str()))
}
