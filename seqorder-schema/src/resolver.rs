//! Order resolution over a walked schema.
//!
//! Every declared sequence keeps its own order. On top of that, each field
//! that references a type with a declared sequence gets that type's order at
//! its own path, recursively through the referenced type's typed fields and
//! anonymous inline children, so that `Invoice.Seller.Address` resolves even
//! though `Address` was only ever declared once as a named type.

use crate::error::SchemaError;
use crate::path::child_key;
use crate::walker::SchemaIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What to do when a type is reached again while it is still being expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Fail with `SchemaError::CircularReference`.
    #[default]
    Reject,
    /// Record the revisited type's declared order and stop descending.
    Truncate,
}

impl CyclePolicy {
    /// Parses a policy name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reject" => Some(Self::Reject),
            "truncate" => Some(Self::Truncate),
            _ => None,
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Truncate => "truncate",
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("unknown cycle policy '{s}' (expected reject or truncate)"))
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Handling of cyclic type graphs.
    pub cycle_policy: CyclePolicy,
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cycle policy.
    #[must_use]
    pub const fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }
}

/// Fully resolved child order per path or type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedOrderMap {
    orders: BTreeMap<String, Vec<String>>,
}

impl ResolvedOrderMap {
    /// Returns the ordered children at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.orders.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if `key` has an entry, empty or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.orders.contains_key(key)
    }

    /// Returns the position of `child` among the children at `key`.
    #[must_use]
    pub fn position(&self, key: &str, child: &str) -> Option<usize> {
        self.get(key)?.iter().position(|c| c == child)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.orders
            .iter()
            .map(|(key, children)| (key.as_str(), children.as_slice()))
    }

    /// Iterates keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.orders.keys().map(String::as_str)
    }

    /// Consumes the map and returns the underlying storage.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.orders
    }
}

impl From<BTreeMap<String, Vec<String>>> for ResolvedOrderMap {
    fn from(orders: BTreeMap<String, Vec<String>>) -> Self {
        Self { orders }
    }
}

/// Depth-first expander of type references.
#[derive(Debug)]
pub struct OrderResolver<'a> {
    index: &'a SchemaIndex,
    config: ResolverConfig,
    /// Types currently being expanded, outermost first.
    active: Vec<&'a str>,
    expanded: BTreeMap<String, Vec<String>>,
}

impl<'a> OrderResolver<'a> {
    /// Creates a resolver over `index`.
    #[must_use]
    pub fn new(index: &'a SchemaIndex, config: ResolverConfig) -> Self {
        Self {
            index,
            config,
            active: Vec::new(),
            expanded: BTreeMap::new(),
        }
    }

    /// Expands every typed field path and returns the orders found through
    /// type references, keyed by field path.
    ///
    /// # Errors
    /// Returns `SchemaError::CircularReference` under `CyclePolicy::Reject`
    /// when a type is reached while it is still being expanded.
    pub fn expand_all(mut self) -> Result<BTreeMap<String, Vec<String>>, SchemaError> {
        let index = self.index;
        for (field_path, type_name) in &index.field_types {
            self.expand(field_path.clone(), type_name)?;
        }
        Ok(self.expanded)
    }

    fn expand(&mut self, path: String, type_name: &'a str) -> Result<(), SchemaError> {
        let index = self.index;

        // Primitive and simple types have no sequence to propagate.
        let Some(order) = index.sequence_order.get(type_name) else {
            return Ok(());
        };

        self.active.push(type_name);
        self.expand_children(&path, type_name)?;
        self.active.pop();

        tracing::trace!("Resolved '{}' as type '{}'", path, type_name);
        self.expanded.insert(path, order.clone());

        Ok(())
    }

    /// Expands the fields declared under `scope` into `path`. `scope` is a
    /// named type or the key of an anonymous type nested inside one.
    fn expand_children(&mut self, path: &str, scope: &str) -> Result<(), SchemaError> {
        let index = self.index;
        let Some(order) = index.sequence_order.get(scope) else {
            return Ok(());
        };

        for field in order {
            let scope_key = child_key(scope, field);
            let field_path = child_key(path, field);

            let Some(field_type) = index.field_types.get(&scope_key) else {
                // Anonymous inline type, declared under the enclosing scope.
                if let Some(inline_order) = index.sequence_order.get(&scope_key) {
                    self.expand_children(&field_path, &scope_key)?;
                    self.expanded.insert(field_path, inline_order.clone());
                }
                continue;
            };
            let field_type = field_type.as_str();
            let Some(field_order) = index.sequence_order.get(field_type) else {
                continue;
            };

            if self.active.contains(&field_type) {
                match self.config.cycle_policy {
                    CyclePolicy::Reject => {
                        let mut cycle: Vec<String> =
                            self.active.iter().map(|t| (*t).to_string()).collect();
                        cycle.push(field_type.to_string());
                        return Err(SchemaError::CircularReference {
                            path: field_path,
                            cycle,
                        });
                    }
                    CyclePolicy::Truncate => {
                        tracing::debug!(
                            "Truncating recursive type '{}' at '{}'",
                            field_type,
                            field_path
                        );
                        self.expanded.insert(field_path, field_order.clone());
                        continue;
                    }
                }
            }

            self.expand(field_path, field_type)?;
        }

        Ok(())
    }
}

/// Resolves the indexes of one document into its final order map.
///
/// Declared sequences are copied unchanged. Orders reached through type
/// references are added under their field paths. Where a field path already
/// has a declared sequence of its own, the declared order is kept.
///
/// # Errors
/// Returns `SchemaError::CircularReference` if the type graph is cyclic and
/// the configured policy is `CyclePolicy::Reject`.
pub fn resolve(
    index: SchemaIndex,
    config: &ResolverConfig,
) -> Result<ResolvedOrderMap, SchemaError> {
    let expanded = OrderResolver::new(&index, *config).expand_all()?;
    let mut orders = index.sequence_order;
    let declared = orders.len();

    for (path, order) in expanded {
        match orders.get(&path) {
            Some(existing) if *existing != order => {
                tracing::warn!(
                    "Keeping declared order at '{}' over the order of its referenced type",
                    path
                );
            }
            Some(_) => {}
            None => {
                orders.insert(path, order);
            }
        }
    }

    tracing::debug!(
        "Resolved {} keys ({} declared, {} through type references)",
        orders.len(),
        declared,
        orders.len() - declared
    );

    Ok(ResolvedOrderMap::from(orders))
}
