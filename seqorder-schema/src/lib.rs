//! # seqorder Schema
//!
//! Streaming XSD walker and field-order resolver.
//!
//! This crate provides:
//! - A structural token model and a `quick-xml` backed token source
//! - Path normalization that elides structural wrapper nodes
//! - A single-pass walker building path-addressed sequence and type indexes
//! - A resolver that propagates declared orders through type references
//!
//! ```ignore
//! use seqorder_schema::{order_schema, ResolverConfig};
//!
//! let orders = order_schema(xsd, &ResolverConfig::default())?;
//! for (path, children) in orders.iter() {
//!     println!("{path}: {children:?}");
//! }
//! ```

pub mod error;
pub mod parser;
pub mod path;
pub mod resolver;
pub mod token;
pub mod walker;

pub use error::{ParseError, SchemaError};
pub use parser::{XmlTokenSource, order_schema, walk_schema};
pub use path::{NodeKind, StructuralPath, child_key, strip_namespace};
pub use resolver::{CyclePolicy, OrderResolver, ResolvedOrderMap, ResolverConfig, resolve};
pub use token::{IterTokenSource, SchemaToken, TokenSource};
pub use walker::{SchemaIndex, SchemaWalker};
