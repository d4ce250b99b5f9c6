//! Error types for schema walking and order resolution.

use crate::walker::SchemaIndex;
use thiserror::Error;

/// Error type for token-level problems in a schema document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute.
    #[error("attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Bytes that are not valid in the document's declared encoding.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A close token arrived while no node was open.
    #[error("close token without a matching open node")]
    UnbalancedClose,

    /// The stream ended while nodes were still open.
    #[error("stream ended with {} unclosed node(s): {}", .open.len(), .open.join("/"))]
    UnexpectedEof {
        /// Logical names of the nodes left open, outermost first.
        open: Vec<String>,
    },
}

/// Error type for walking and resolving a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The token stream was not well-formed. The walk stopped at the first
    /// problem and `partial` holds everything indexed up to that point.
    #[error("malformed schema input: {source}")]
    Malformed {
        /// Underlying token-level error.
        #[source]
        source: ParseError,
        /// Indexes built before the walk stopped.
        partial: Box<SchemaIndex>,
    },

    /// Circular type reference.
    #[error("circular type reference detected at '{path}': {}", .cycle.join(" -> "))]
    CircularReference {
        /// Field path at which the cycle was re-entered.
        path: String,
        /// Type names on the active resolution stack, ending with the revisited one.
        cycle: Vec<String>,
    },
}

impl SchemaError {
    /// Creates a malformed input error carrying the partial indexes.
    pub fn malformed(source: ParseError, partial: SchemaIndex) -> Self {
        Self::Malformed {
            source,
            partial: Box::new(partial),
        }
    }

    /// Returns `true` if the input stream was malformed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns `true` if resolution hit a cyclic type graph.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CircularReference { .. })
    }

    /// Returns the partial indexes of a malformed walk, if any.
    #[must_use]
    pub fn into_partial(self) -> Option<SchemaIndex> {
        match self {
            Self::Malformed { partial, .. } => Some(*partial),
            Self::CircularReference { .. } => None,
        }
    }
}
