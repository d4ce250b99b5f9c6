//! Single-pass schema walker.
//!
//! The walker consumes structural tokens strictly forward and builds the
//! path-addressed indexes the resolver works from. Field order inside a
//! sequence is exactly document order.

use crate::error::{ParseError, SchemaError};
use crate::path::{NodeKind, StructuralPath, child_key, strip_namespace};
use crate::token::{SchemaToken, TokenSource};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Indexes collected from one schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIndex {
    /// Names declared as complex types.
    pub complex_types: BTreeSet<String>,
    /// Declared field order per sequence scope, keyed by normalized path.
    pub sequence_order: BTreeMap<String, Vec<String>>,
    /// Referenced type name per field path (`<path>.<field>`), prefix stripped.
    pub field_types: BTreeMap<String, String>,
}

impl SchemaIndex {
    /// Creates empty indexes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` was declared as a complex type.
    #[must_use]
    pub fn is_complex_type(&self, name: &str) -> bool {
        self.complex_types.contains(name)
    }

    /// Returns the declared field order at `path`, if a sequence was seen there.
    #[must_use]
    pub fn sequence(&self, path: &str) -> Option<&[String]> {
        self.sequence_order.get(path).map(Vec::as_slice)
    }

    /// Returns the type referenced by the field at `field_path`.
    #[must_use]
    pub fn field_type(&self, field_path: &str) -> Option<&str> {
        self.field_types.get(field_path).map(String::as_str)
    }

    /// Returns `true` if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.complex_types.is_empty()
            && self.sequence_order.is_empty()
            && self.field_types.is_empty()
    }
}

/// Streaming walker building a [`SchemaIndex`].
#[derive(Debug, Default)]
pub struct SchemaWalker {
    path: StructuralPath,
    index: SchemaIndex,
}

impl SchemaWalker {
    /// Creates a walker with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `source` to its end and returns the collected indexes.
    ///
    /// # Errors
    /// Returns `SchemaError::Malformed` with the partial indexes if the source
    /// fails, a close arrives with nothing open, or the stream ends inside a node.
    pub fn walk<S: TokenSource + ?Sized>(
        mut self,
        source: &mut S,
    ) -> Result<SchemaIndex, SchemaError> {
        loop {
            let token = match source.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(e) => return Err(self.abort(e)),
            };
            if let Err(e) = self.feed(token) {
                return Err(self.abort(e));
            }
        }
        self.finish()
    }

    /// Applies a single token.
    ///
    /// # Errors
    /// Returns `ParseError::UnbalancedClose` for a close with no open node.
    pub fn feed(&mut self, token: SchemaToken) -> Result<(), ParseError> {
        match token {
            SchemaToken::Open { .. } => {
                self.open(&token);
                Ok(())
            }
            SchemaToken::Close => self.close(),
        }
    }

    /// Ends the walk and returns the indexes.
    ///
    /// # Errors
    /// Returns `SchemaError::Malformed` if nodes are still open.
    pub fn finish(self) -> Result<SchemaIndex, SchemaError> {
        if !self.path.is_empty() {
            let open = self.path.open_names();
            return Err(self.abort(ParseError::UnexpectedEof { open }));
        }

        tracing::debug!(
            "Schema walk complete: {} complex types, {} sequences, {} typed fields",
            self.index.complex_types.len(),
            self.index.sequence_order.len(),
            self.index.field_types.len()
        );

        Ok(self.index)
    }

    /// Returns the indexes collected so far.
    #[must_use]
    pub fn index(&self) -> &SchemaIndex {
        &self.index
    }

    /// Returns the current structural path.
    #[must_use]
    pub fn path(&self) -> &StructuralPath {
        &self.path
    }

    fn abort(self, source: ParseError) -> SchemaError {
        tracing::debug!(
            "Schema walk aborted at depth {}: {}",
            self.path.depth(),
            source
        );
        SchemaError::malformed(source, self.index)
    }

    fn open(&mut self, token: &SchemaToken) {
        let SchemaToken::Open { tag, .. } = token else {
            return;
        };
        let kind = NodeKind::classify(tag);
        let name = token.attribute("name");

        match kind {
            NodeKind::ComplexType => {
                if let Some(name) = name {
                    tracing::debug!("Registered complex type '{}'", name);
                    self.index.complex_types.insert(name.to_string());
                }
            }
            NodeKind::Sequence => {
                let key = self.path.key();
                if !self.index.sequence_order.contains_key(key) {
                    tracing::debug!("Found sequence at '{}'", key);
                    self.index.sequence_order.insert(key.to_string(), Vec::new());
                }
            }
            NodeKind::Field => {
                self.open_field(tag, token);
                return;
            }
            NodeKind::Marker | NodeKind::Other => {}
        }

        match name {
            Some(name) => self.path.push(name, false),
            None => self.path.push(tag.as_str(), kind.is_structural()),
        }
    }

    fn open_field(&mut self, tag: &str, token: &SchemaToken) {
        let field = token
            .attribute("name")
            .or_else(|| token.attribute("ref").map(strip_namespace));

        let Some(field) = field else {
            tracing::warn!(
                "Skipping field without name or ref at '{}'",
                self.path.key()
            );
            self.path.push(tag, true);
            return;
        };

        let key = self.path.key();
        tracing::trace!("Appending field '{}' to '{}'", field, key);

        if let Some(type_name) = token.attribute("type") {
            self.index
                .field_types
                .insert(child_key(key, field), strip_namespace(type_name).to_string());
        }

        match self.index.sequence_order.get_mut(key) {
            Some(order) => order.push(field.to_string()),
            None => {
                self.index
                    .sequence_order
                    .insert(key.to_string(), vec![field.to_string()]);
            }
        }

        self.path.push(field, false);
    }

    fn close(&mut self) -> Result<(), ParseError> {
        self.path.pop().map(|_| ()).ok_or(ParseError::UnbalancedClose)
    }
}
