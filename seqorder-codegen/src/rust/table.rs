//! Order table code generation.

use seqorder_schema::ResolvedOrderMap;

/// Generator for a static child-order lookup table.
pub struct OrderTableGenerator<'a> {
    orders: &'a ResolvedOrderMap,
    ident: &'a str,
    source: Option<&'a str>,
}

impl<'a> OrderTableGenerator<'a> {
    /// Creates a new table generator. `ident` prefixes the generated static.
    #[must_use]
    pub fn new(orders: &'a ResolvedOrderMap, ident: &'a str) -> Self {
        Self {
            orders,
            ident,
            source: None,
        }
    }

    /// Names the schema file the table was generated from.
    #[must_use]
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the name of the generated static.
    #[must_use]
    pub fn static_name(&self) -> String {
        format!("{}_CHILDREN_ORDER", self.ident)
    }

    /// Generates the complete module source.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.generate_header());
        output.push_str(&self.generate_table());
        output.push_str(&self.generate_lookups());

        output
    }

    fn generate_header(&self) -> String {
        let mut output = String::new();

        match self.source {
            Some(source) => output.push_str(&format!(
                "// @generated by seqorder from `{}`. Do not edit manually.\n\n",
                source
            )),
            None => output.push_str("// @generated by seqorder. Do not edit manually.\n\n"),
        }

        output
    }

    fn generate_table(&self) -> String {
        let mut output = String::new();

        output.push_str("/// Declared child order per path, sorted by path.\n");
        output.push_str(&format!(
            "pub static {}: &[(&str, &[(&str, usize)])] = &[\n",
            self.static_name()
        ));

        for (path, children) in self.orders.iter() {
            output.push_str(&format!("    ({:?}, &[", path));
            for (position, child) in children.iter().enumerate() {
                if position > 0 {
                    output.push_str(", ");
                }
                output.push_str(&format!("({:?}, {})", child, position));
            }
            output.push_str("]),\n");
        }

        output.push_str("];\n\n");

        output
    }

    fn generate_lookups(&self) -> String {
        let mut output = String::new();
        let table = self.static_name();

        output.push_str("/// Returns the ordered children declared for `path`.\n");
        output.push_str("#[must_use]\n");
        output.push_str(
            "pub fn children_order(path: &str) -> Option<&'static [(&'static str, usize)]> {\n",
        );
        output.push_str(&format!("    {}\n", table));
        output.push_str("        .binary_search_by(|(key, _)| (*key).cmp(path))\n");
        output.push_str("        .ok()\n");
        output.push_str(&format!("        .map(|index| {}[index].1)\n", table));
        output.push_str("}\n\n");

        output.push_str("/// Returns the position of `child` among the children of `path`.\n");
        output.push_str("#[must_use]\n");
        output.push_str("pub fn child_position(path: &str, child: &str) -> Option<usize> {\n");
        output.push_str("    children_order(path)?\n");
        output.push_str("        .iter()\n");
        output.push_str("        .find(|(name, _)| *name == child)\n");
        output.push_str("        .map(|(_, position)| *position)\n");
        output.push_str("}\n");

        output
    }
}
