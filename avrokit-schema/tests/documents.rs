//! Whole-document parse and canonicalize tests.

use avrokit_schema::{
    ErrorKind, LogicalType, NamedSchema, PrimitiveType, Schema, TypeName, parse_schema,
    parse_schema_str, to_json,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn documents() -> Vec<(TypeName, Value)> {
    use avrokit_schema::ComplexType::*;
    vec![
        (
            TypeName::Complex(Record),
            json!({"type":"record","name":"person","fields":[
                {"name":"id","type":"int"},
                {"name":"guid","type":"string"},
                {"name":"isActive","type":"boolean"},
                {"name":"latitude","type":"double"},
                {"name":"tags","type":{"type":"array","items":"string"}},
                {"name":"friends","type":{"type":"array","items":{"type":"record","name":"friends_record","fields":[
                    {"name":"id","type":"int"},
                    {"name":"name","type":"string"}]}}}]}),
        ),
        (
            TypeName::Complex(Record),
            json!({"type":"record","namespace":"test","name":"LongList","aliases":["LinkedLongs"],
                "doc":"list of 64 bits integers","fields":[
                {"name":"value","type":"long"},
                {"name":"next","type":["null","LongList"]}]}),
        ),
        (
            TypeName::Complex(Record),
            json!({"type":"record","name":"LongList","aliases":["LinkedLongs"],"fields":[
                {"name":"value","type":"long","order":"ignore","default":0},
                {"name":"next","type":["null","LongList"]}]}),
        ),
        (TypeName::Complex(Array), json!({"type":"array","items":["null","string"]})),
        (TypeName::Complex(Map), json!({"type":"map","values":["null","long"]})),
        (
            TypeName::Complex(Enum),
            json!({"type":"enum","name":"Suit","symbols":["SPADES","HEARTS","DIAMONDS","CLUBS"]}),
        ),
        (TypeName::Complex(Fixed), json!({"type":"fixed","name":"md5","size":16})),
        (
            TypeName::Logical(LogicalType::Duration),
            json!({"type":"fixed","logicalType":"duration","name":"span","size":12}),
        ),
        (TypeName::Complex(Union), json!(["null","string"])),
        (TypeName::Logical(LogicalType::Timestamp), json!({"type":"long","logicalType":"timestamp"})),
        (TypeName::Logical(LogicalType::Date), json!({"type":"int","logicalType":"date"})),
        (
            TypeName::Logical(LogicalType::Decimal),
            json!({"type":"bytes","logicalType":"decimal","precision":5,"scale":2}),
        ),
        (TypeName::Primitive(PrimitiveType::String), json!("string")),
        (
            TypeName::Complex(Record),
            json!({"type":"record","name":"Outer","namespace":"a","fields":[
                {"name":"x","type":{"type":"fixed","name":"F","namespace":"a","size":4}},
                {"name":"y","type":"a.F"}]}),
        ),
        (TypeName::Complex(Fixed), json!({"type":"fixed","name":"a.F","size":4})),
        (
            TypeName::Complex(Record),
            json!({"type":"record","name":"Event","namespace":"","fields":[
                {"name":"at","type":"long","doc":"seconds since boot"},
                {"name":"source","type":{"type":"record","name":"org.Source","fields":[
                    {"name":"host","type":"string","aliases":["hostname"],"doc":"origin host"}]}}]}),
        ),
        (
            TypeName::Logical(LogicalType::Decimal),
            json!({"type":"fixed","name":"money","size":8,"logicalType":"decimal","precision":10,"scale":2}),
        ),
        (
            TypeName::Complex(Enum),
            json!({"type":"enum","name":"Suit","namespace":"cards","aliases":["Kind"],
                "doc":"card suits","symbols":["SPADES","HEARTS"]}),
        ),
        (
            TypeName::Complex(Fixed),
            json!({"type":"fixed","name":"md5","aliases":["digest"],"doc":"MD5 hash","size":16}),
        ),
    ]
}

#[test]
fn test_documents_roundtrip() {
    for (expected_type, document) in documents() {
        let schema = parse_schema(&document)
            .unwrap_or_else(|e| panic!("failed to parse {document}: {e}"));
        assert_eq!(schema.type_name(), expected_type, "{document}");

        let canonical = to_json(&schema);
        assert_eq!(canonical, document);

        let reparsed = parse_schema(&canonical).unwrap();
        assert_eq!(to_json(&reparsed), canonical);
    }
}

#[test]
fn test_rejections() {
    let cases = [
        (r#"{"type":"record","name":"LongList","fields":[{"name":"value","type":"something"}]}"#, ErrorKind::UnsupportedType),
        (r#"{"type":"record","name":"LongList","aliases":"something","fields":[{"name":"value","type":"long"}]}"#, ErrorKind::InvalidSchema),
        (r#"{"type":"record","name":"LongList","fields":"something"}"#, ErrorKind::InvalidSchema),
        (r#"{"type":"array","items":"something"}"#, ErrorKind::UnsupportedType),
        (r#"{"type":"enum","name":"Suit","symbols":["SPADES",11]}"#, ErrorKind::InvalidSchema),
        (r#"{"type":"fixed","name":"md5","size":"16"}"#, ErrorKind::InvalidSchema),
        (r#"["something","string"]"#, ErrorKind::UnsupportedType),
        (r#"[0,"string"]"#, ErrorKind::InvalidSchema),
        (r#"{"type":"something","name":"something"}"#, ErrorKind::UnsupportedType),
        (r#"{"type":"bytes","logicalType":"decimal","precision":"something"}"#, ErrorKind::InvalidSchema),
        (r#"{"type":"fixed","name":"f","size":16,"logicalType":"uuid"}"#, ErrorKind::InvalidSchema),
        (r#"{"type":"array","items":"int","logicalType":"date"}"#, ErrorKind::InvalidSchema),
        (r#"["null","date"]"#, ErrorKind::InvalidSchema),
    ];
    for (document, expected) in cases {
        let err = parse_schema_str(document).unwrap_err();
        assert_eq!(err.kind(), expected, "{document}: {err}");
    }
}

#[test]
fn test_linked_list_shares_record() {
    let schema = parse_schema_str(
        r#"{"type":"record","name":"Node","fields":[
            {"name":"value","type":"long"},
            {"name":"next","type":["null","Node"]},
            {"name":"children","type":{"type":"map","values":"Node"}}]}"#,
    )
    .unwrap();
    let Schema::Record(node) = &schema else {
        panic!("expected record");
    };

    let next = match &node.fields[1].schema {
        Schema::Union(union) => &union.variants()[1],
        other => panic!("expected union, got {other:?}"),
    };
    let children = match &node.fields[2].schema {
        Schema::Map(values) => values.as_ref(),
        other => panic!("expected map, got {other:?}"),
    };
    for reference in [next, children] {
        match reference.as_named() {
            Some(NamedSchema::Record(target)) => assert!(Arc::ptr_eq(&target, node)),
            other => panic!("expected shared record, got {other:?}"),
        }
    }
}

#[test]
fn test_concurrent_parses_are_isolated() {
    let document = json!({"type":"record","name":"Shared","fields":[
        {"name":"id","type":"long"},
        {"name":"kind","type":{"type":"enum","name":"Kind","symbols":["A","B"]}}]});

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| parse_schema(&document)))
            .collect();
        for handle in handles {
            let schema = handle.join().unwrap().unwrap();
            assert_eq!(to_json(&schema), document);
        }
    });
}
