//! # seqorder
//!
//! Field-order extraction and resolution for XSD schemas.
//!
//! seqorder walks an XSD document once, records the declared order of the
//! fields of every `sequence`, and propagates those orders through named type
//! references so that every reachable field path has a known child order.
//!
//! ## Features
//!
//! - **Single-pass walk** - Forward-only token stream, no DOM
//! - **Forward references** - Types may be declared after their first use
//! - **Cycle handling** - Recursive types are rejected or truncated, by policy
//! - **Code generation** - Static Rust lookup tables or JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use seqorder::prelude::*;
//!
//! let orders = order_schema(xsd, &ResolverConfig::default())?;
//! assert_eq!(orders.position("Invoice", "Header"), Some(0));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Token model, walker and resolver
//! - [`codegen`] - Rendering of order tables and the directory driver

pub mod prelude;

/// Schema walking and order resolution.
pub mod schema {
    pub use seqorder_schema::*;
}

/// Code generation from resolved orders.
pub mod codegen {
    pub use seqorder_codegen::*;
}

// Re-export commonly used items at the crate root
pub use seqorder_schema::{
    CyclePolicy, ResolvedOrderMap, ResolverConfig, SchemaError, SchemaIndex, order_schema,
    resolve, walk_schema,
};

pub use seqorder_codegen::{Generator, GeneratorConfig, OutputFormat};
