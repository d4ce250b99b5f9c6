//! Synthetic schema generators.

use std::fmt::Write;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:bench">
"#;

/// Builds a schema of `types` independent complex types with `fields`
/// primitive fields each.
#[must_use]
pub fn wide_schema(types: usize, fields: usize) -> String {
    let mut xml = String::from(HEADER);

    for t in 0..types {
        let _ = writeln!(xml, "  <xs:complexType name=\"T{t}\">\n    <xs:sequence>");
        for f in 0..fields {
            let _ = writeln!(
                xml,
                "      <xs:element name=\"f{f}\" type=\"xs:string\"/>"
            );
        }
        xml.push_str("    </xs:sequence>\n  </xs:complexType>\n");
    }

    xml.push_str("</xs:schema>\n");
    xml
}

/// Builds a chain `T0 -> T1 -> ... -> T{depth-1}` where every type has
/// `fields` primitive fields and a `next` field typed as the following type.
/// Types are declared in reverse so every reference is a forward reference.
#[must_use]
pub fn chain_schema(depth: usize, fields: usize) -> String {
    let mut xml = String::from(HEADER);
    let _ = writeln!(xml, "  <xs:element name=\"Root\" type=\"tns:T0\"/>");

    for t in (0..depth).rev() {
        let _ = writeln!(xml, "  <xs:complexType name=\"T{t}\">\n    <xs:sequence>");
        for f in 0..fields {
            let _ = writeln!(xml, "      <xs:element name=\"f{f}\" type=\"xs:int\"/>");
        }
        if t + 1 < depth {
            let _ = writeln!(
                xml,
                "      <xs:element name=\"next\" type=\"tns:T{}\"/>",
                t + 1
            );
        }
        xml.push_str("    </xs:sequence>\n  </xs:complexType>\n");
    }

    xml.push_str("</xs:schema>\n");
    xml
}
