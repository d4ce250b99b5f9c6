//! Example resolving the field order of a small invoice schema.
//!
//! Run with: `cargo run --example order_schema`

use seqorder::prelude::*;

const SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:invoice">
    <xs:element name="Invoice" type="tns:TInvoice"/>
    <xs:complexType name="TInvoice">
        <xs:sequence>
            <xs:element name="Header" type="tns:THeader"/>
            <xs:element name="Total" type="xs:decimal"/>
        </xs:sequence>
    </xs:complexType>
    <xs:complexType name="THeader">
        <xs:sequence>
            <xs:element name="Number" type="xs:string"/>
            <xs:element name="IssueDate" type="xs:date"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let orders = order_schema(SCHEMA, &ResolverConfig::default())?;

    for (path, children) in orders.iter() {
        println!("{:<20} {}", path, children.join(", "));
    }

    let code = seqorder::codegen::generate_from_xml(SCHEMA, "invoice")?;
    println!("\n{}", code);

    Ok(())
}
