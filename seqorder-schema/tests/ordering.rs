//! End-to-end ordering behaviour over XSD documents.

use seqorder_schema::{
    CyclePolicy, IterTokenSource, ResolverConfig, SchemaError, SchemaToken, SchemaWalker,
    order_schema, resolve, walk_schema,
};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn order(xml: &str) -> seqorder_schema::ResolvedOrderMap {
    order_schema(xml, &ResolverConfig::default()).expect("Failed to order schema")
}

#[test]
fn forward_reference_resolves() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:t">
    <xs:complexType name="A">
        <xs:sequence>
            <xs:element name="x" type="tns:B"/>
            <xs:element name="y" type="xs:string"/>
        </xs:sequence>
    </xs:complexType>
    <xs:complexType name="B">
        <xs:sequence>
            <xs:element name="m" type="xs:string"/>
            <xs:element name="n" type="xs:string"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("A"), Some(&names(&["x", "y"])[..]));
    assert_eq!(map.get("B"), Some(&names(&["m", "n"])[..]));
    assert_eq!(map.get("A.x"), Some(&names(&["m", "n"])[..]));
}

#[test]
fn declaration_order_does_not_matter() {
    let type_a = r#"<xs:complexType name="A"><xs:sequence>
        <xs:element name="x" type="B"/><xs:element name="y" type="xs:int"/>
    </xs:sequence></xs:complexType>"#;
    let type_b = r#"<xs:complexType name="B"><xs:sequence>
        <xs:element name="m" type="xs:int"/><xs:element name="n" type="xs:int"/>
    </xs:sequence></xs:complexType>"#;

    let before = order(&format!(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">{type_b}{type_a}</xs:schema>"#
    ));
    let after = order(&format!(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">{type_a}{type_b}</xs:schema>"#
    ));

    assert_eq!(before, after);
}

#[test]
fn order_matches_document_order_across_interleaved_scopes() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Outer">
        <xs:sequence>
            <xs:element name="c"/>
            <xs:element name="inner">
                <xs:complexType>
                    <xs:sequence>
                        <xs:element name="z"/>
                        <xs:element name="a"/>
                    </xs:sequence>
                </xs:complexType>
            </xs:element>
            <xs:element name="b"/>
            <xs:element name="a"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("Outer"), Some(&names(&["c", "inner", "b", "a"])[..]));
    assert_eq!(map.get("Outer.inner"), Some(&names(&["z", "a"])[..]));
}

#[test]
fn wrapper_markers_do_not_change_keys() {
    let plain = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="T"><xs:sequence>
        <xs:element name="a"/><xs:element name="b"/>
    </xs:sequence></xs:complexType>
</xs:schema>"#;
    let wrapped = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="T">
        <xs:annotation><xs:documentation>T</xs:documentation></xs:annotation>
        <xs:sequence>
            <xs:choice>
                <xs:element name="a"/>
            </xs:choice>
            <xs:element name="b"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    assert_eq!(order(plain), order(wrapped));
}

#[test]
fn empty_sequence_is_distinct_from_absent() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="Empty"><xs:sequence/></xs:complexType>
    <xs:complexType name="NoSequence"><xs:attribute name="id" type="xs:string"/></xs:complexType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("Empty"), Some(&[][..]));
    assert!(!map.contains_key("NoSequence"));
}

#[test]
fn inline_children_of_referenced_type_resolve() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:tns="urn:t">
    <xs:element name="Doc" type="tns:TDoc"/>
    <xs:complexType name="TDoc">
        <xs:sequence>
            <xs:element name="id" type="xs:string"/>
            <xs:element name="party">
                <xs:complexType>
                    <xs:sequence>
                        <xs:element name="b" type="xs:string"/>
                        <xs:element name="a" type="tns:TAddr"/>
                    </xs:sequence>
                </xs:complexType>
            </xs:element>
        </xs:sequence>
    </xs:complexType>
    <xs:complexType name="TAddr">
        <xs:sequence>
            <xs:element name="city" type="xs:string"/>
            <xs:element name="zip" type="xs:string"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("TDoc.party"), Some(&names(&["b", "a"])[..]));
    assert_eq!(map.get("Doc"), Some(&names(&["id", "party"])[..]));
    assert_eq!(map.get("Doc.party"), Some(&names(&["b", "a"])[..]));
    assert_eq!(map.get("Doc.party.a"), Some(&names(&["city", "zip"])[..]));
    assert_eq!(map.position("Doc.party", "a"), Some(1));
}

#[test]
fn leaf_types_are_not_errors() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="T"><xs:sequence>
        <xs:element name="code" type="tns:TCode"/>
        <xs:element name="when" type="xs:dateTime"/>
    </xs:sequence></xs:complexType>
    <xs:simpleType name="TCode">
        <xs:restriction base="xs:string"><xs:enumeration value="A"/></xs:restriction>
    </xs:simpleType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("T"), Some(&names(&["code", "when"])[..]));
    assert!(!map.contains_key("T.code"));
    assert!(!map.contains_key("T.when"));
}

#[test]
fn self_reference_is_rejected_by_default() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:complexType name="C"><xs:sequence>
        <xs:element name="self" type="C"/>
    </xs:sequence></xs:complexType>
</xs:schema>"#;

    let err = order_schema(xml, &ResolverConfig::default()).unwrap_err();
    match err {
        SchemaError::CircularReference { path, cycle } => {
            assert_eq!(path, "C.self.self");
            assert_eq!(cycle, names(&["C", "C"]));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let config = ResolverConfig::new().with_cycle_policy(CyclePolicy::Truncate);
    let map = order_schema(xml, &config).expect("truncate policy");
    assert_eq!(map.get("C"), Some(&names(&["self"])[..]));
    assert_eq!(map.get("C.self"), Some(&names(&["self"])[..]));
}

#[test]
fn deep_type_chain_expands_every_level() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
    <xs:element name="Doc" type="TDoc"/>
    <xs:complexType name="TDoc"><xs:sequence><xs:element name="party" type="TParty"/></xs:sequence></xs:complexType>
    <xs:complexType name="TParty"><xs:sequence>
        <xs:element name="name" type="xs:string"/>
        <xs:element name="address" type="TAddress"/>
    </xs:sequence></xs:complexType>
    <xs:complexType name="TAddress"><xs:sequence>
        <xs:element name="country" type="xs:string"/>
        <xs:element name="city" type="xs:string"/>
    </xs:sequence></xs:complexType>
</xs:schema>"#;

    let map = order(xml);
    assert_eq!(map.get("Doc"), Some(&names(&["party"])[..]));
    assert_eq!(map.get("Doc.party"), Some(&names(&["name", "address"])[..]));
    assert_eq!(
        map.get("Doc.party.address"),
        Some(&names(&["country", "city"])[..])
    );
}

#[test]
fn malformed_stream_reports_partial_index() {
    let tokens = vec![
        SchemaToken::open_bare("schema"),
        SchemaToken::open("complexType", [("name", "A")]),
        SchemaToken::open_bare("sequence"),
        SchemaToken::open("element", [("name", "x")]),
        SchemaToken::Close,
    ];

    let err = SchemaWalker::new()
        .walk(&mut IterTokenSource::new(tokens))
        .unwrap_err();
    assert!(err.is_malformed());

    let partial = err.into_partial().expect("partial index");
    assert!(partial.is_complex_type("A"));
    assert_eq!(partial.sequence("A"), Some(&names(&["x"])[..]));
}

#[test]
fn walk_then_resolve_matches_order_schema() {
    let xml = r#"<schema><complexType name="A"><sequence><element name="x" type="B"/></sequence></complexType>
<complexType name="B"><sequence><element name="m"/></sequence></complexType></schema>"#;

    let index = walk_schema(xml).expect("walk");
    let staged = resolve(index, &ResolverConfig::default()).expect("resolve");
    assert_eq!(staged, order(xml));
}

#[test]
fn resolved_map_serializes_as_plain_object() {
    let map = order(
        r#"<schema><complexType name="A"><sequence><element name="x"/></sequence></complexType></schema>"#,
    );
    let json = serde_json::to_value(&map).expect("serialize");
    assert_eq!(json["A"], serde_json::json!(["x"]));
}
