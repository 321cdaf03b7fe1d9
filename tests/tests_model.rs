//! Entity Model Tests - Construction, Validation, and Defaulting
//!
//! Builds entities from YAML definition records, the same records the
//! loader produces, and checks the validation and defaulting rules.

use ifgen::model::raw::{RawInterface, RawProperty};
use ifgen::model::{Interface, ModelError, Property};
use ifgen::parser::Role;
use rstest::rstest;

fn interface(yaml: &str) -> Result<Interface, ModelError> {
    Interface::from_raw("a.b.C", serde_yaml::from_str(yaml).unwrap())
}

fn property(yaml: &str) -> Property {
    let raw: RawProperty = serde_yaml::from_str(yaml).unwrap();
    Property::from_raw(raw).unwrap()
}

// ============================================================================
// Interface Construction
// ============================================================================

#[test]
fn test_full_interface_builds() {
    let iface = interface(
        "
description: A widget.
properties:
  - name: Reading
    type: double
    default: nan
  - name: Hue
    type: enum[self.Color]
    default: Red
methods:
  - name: Recalibrate
    parameters:
      - name: Factor
        type: double
    returns:
      - name: Applied
        type: boolean
    flags: [no_reply]
    errors: [self.Error.Busy]
signals:
  - name: ReadingChanged
    properties:
      - name: NewReading
        type: double
enumerations:
  - name: Color
    values: [{name: Red}, {name: Green}]
    default: Red
paths:
  - namespace: /a/b
service_names:
  - default: a.b.C
associations:
  - name: chassis
    reverse_name: widgets
",
    )
    .unwrap();

    assert_eq!(iface.properties().len(), 2);
    assert_eq!(iface.methods().len(), 1);
    assert_eq!(iface.signals().len(), 1);
    assert_eq!(iface.enums().len(), 1);
    assert_eq!(iface.paths().len(), 1);
    assert_eq!(iface.service_names().len(), 1);
    assert_eq!(iface.associations()[0].reverse().name(), "widgets");
    assert_eq!(iface.named().description(), "A widget.");
}

#[test]
fn test_declaration_order_is_preserved() {
    let iface = interface(
        "{properties: [{name: Zed, type: byte}, {name: Alpha, type: byte}]}",
    )
    .unwrap();
    let names: Vec<&str> = iface.properties().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Zed", "Alpha"]);
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_property_flags_combine_in_declaration_order() {
    let p = property("{name: P, type: int32, flags: [deprecated, hidden]}");
    assert_eq!(
        p.cpp_flags(),
        "vtable::common_::deprecated | vtable::common_::hidden"
    );
}

#[test]
fn test_unknown_flag_is_fatal_and_named() {
    let iface = interface("{properties: [{name: P, type: int32, flags: [bogus]}]}");
    match iface {
        Err(ModelError::Flag { flag, .. }) => assert_eq!(flag, "bogus"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_method_flag_vocabulary_is_narrower() {
    assert!(interface("{methods: [{name: M, flags: [emits_change]}]}").is_err());
    assert!(interface("{methods: [{name: M, flags: [no_reply]}]}").is_ok());
}

// ============================================================================
// Default Literals
// ============================================================================

#[rstest]
#[case("{name: P, type: boolean, default: true}", "true")]
#[case("{name: P, type: string, default: widget}", "\"widget\"")]
#[case("{name: P, type: double, default: NaN}", "std::numeric_limits<double>::quiet_NaN()")]
#[case(
    "{name: P, type: double, default: Infinity}",
    "std::numeric_limits<double>::infinity()"
)]
#[case(
    "{name: P, type: double, default: '-Infinity'}",
    "-std::numeric_limits<double>::infinity()"
)]
#[case(
    "{name: P, type: double, default: epsilon}",
    "std::numeric_limits<double>::epsilon()"
)]
#[case("{name: P, type: int64, default: maxint}", "std::numeric_limits<int64_t>::max()")]
#[case("{name: P, type: uint16, default: MinInt}", "std::numeric_limits<uint16_t>::min()")]
#[case("{name: P, type: uint32, default: 42}", "42")]
fn test_default_literals(#[case] yaml: &str, #[case] expected: &str) {
    let p = property(yaml);
    assert_eq!(p.default_literal(None, Role::Common).as_deref(), Some(expected));
}

#[test]
fn test_enum_default_is_qualified() {
    let p = property("{name: Hue, type: 'enum[self.Color]', default: Red}");
    assert_eq!(
        p.default_literal(Some("a.b.C"), Role::Common).as_deref(),
        Some("ifgen::common::a::b::C::Color::Red")
    );
}

#[test]
fn test_missing_default_renders_nothing() {
    let p = property("{name: P, type: int32}");
    assert_eq!(p.default_literal(None, Role::Common), None);
}

// ============================================================================
// Enumerations
// ============================================================================

#[test]
fn test_dangling_enum_default_rejected() {
    let err = interface(
        "{enumerations: [{name: Color, values: [{name: Red}], default: Blue}]}",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::Schema { .. }));
}

// ============================================================================
// Paths and Service Names
// ============================================================================

#[rstest]
#[case("{paths: [{namespace: no_leading_slash}]}")]
#[case("{paths: [{namespace: /a//b}]}")]
#[case("{paths: [{namespace: /a/b, instance: /c}]}")]
#[case("{paths: [{name: X, value: '/has-dash'}]}")]
#[case("{service_names: [{default: a..B}]}")]
#[case("{service_names: [{default: a.1b.C}]}")]
#[case("{service_names: [{default: a.B, value: c.D, name: N}]}")]
fn test_invalid_paths_and_service_names(#[case] yaml: &str) {
    assert!(interface(yaml).is_err(), "accepted: {yaml}");
}

#[test]
fn test_path_segments_nest() {
    let iface = interface(
        "{paths: [{namespace: /a/b, segments: [{name: SomeLeaf}, {name: Other, value: leaf2}]}]}",
    )
    .unwrap();
    let path = &iface.paths()[0];
    assert_eq!(path.value(), "/a/b");
    assert_eq!(path.segments()[0].value(), "some_leaf");
    assert_eq!(path.segments()[1].value(), "leaf2");
}

// ============================================================================
// Unknown Keys
// ============================================================================

#[test]
fn test_unknown_keys_are_rejected_at_deserialization() {
    let result: Result<RawInterface, _> =
        serde_yaml::from_str("{properties: [{name: P, type: int32, typo_key: 1}]}");
    assert!(result.is_err());
}
