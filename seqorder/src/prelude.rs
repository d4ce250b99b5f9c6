//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use seqorder::prelude::*;
//! ```

// Schema types
pub use seqorder_schema::{
    CyclePolicy, IterTokenSource, NodeKind, ParseError, ResolvedOrderMap, ResolverConfig,
    SchemaError, SchemaIndex, SchemaToken, SchemaWalker, StructuralPath, TokenSource,
    XmlTokenSource, order_schema, resolve, walk_schema,
};

// Codegen types
pub use seqorder_codegen::{CodegenError, Generator, GeneratorConfig, OutputFormat};
