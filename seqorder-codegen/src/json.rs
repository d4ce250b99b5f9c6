//! JSON rendering of order tables.

use crate::error::CodegenError;
use seqorder_schema::ResolvedOrderMap;
use std::collections::BTreeMap;

/// Generator for a `{ path: { child: position } }` JSON document.
pub struct JsonGenerator<'a> {
    orders: &'a ResolvedOrderMap,
}

impl<'a> JsonGenerator<'a> {
    /// Creates a new JSON generator.
    #[must_use]
    pub fn new(orders: &'a ResolvedOrderMap) -> Self {
        Self { orders }
    }

    /// Generates the pretty-printed document.
    ///
    /// A child name repeated within one sequence keeps its first position.
    ///
    /// # Errors
    /// Returns `CodegenError::Json` if serialization fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut table: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();

        for (path, children) in self.orders.iter() {
            let positions = table.entry(path).or_default();
            for (position, child) in children.iter().enumerate() {
                positions.entry(child.as_str()).or_insert(position);
            }
        }

        let mut output = serde_json::to_string_pretty(&table)?;
        output.push('\n');
        Ok(output)
    }
}
