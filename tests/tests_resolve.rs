//! Cross-Reference Resolver Tests - Determinism and Dependency Sets

use ifgen::model::Interface;
use ifgen::model::raw::RawInterface;
use ifgen::parser::Role;
use once_cell::sync::Lazy;

fn interface(name: &str, yaml: &str) -> Interface {
    let raw: RawInterface = serde_yaml::from_str(yaml).unwrap();
    Interface::from_raw(name, raw).unwrap()
}

/// Shared fixture with one of every reference style.
static SAMPLE: Lazy<Interface> = Lazy::new(|| {
    interface(
        "a.b.C",
        "{methods: [{name: M, errors: [self.Error.Busy, x.y.Common.Error.Timeout, x.y.Logging.Cleared]}]}",
    )
});

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_resolver_output_is_order_independent() {
    let forward = interface(
        "a.b.C",
        "{properties: [{name: P1, type: 'enum[z.z.Last.Kind]', errors: [x.y.Q.Error.B]},\
                       {name: P2, type: 'enum[a.a.First.Kind]', errors: [x.y.Q.Error.A]}]}",
    );
    let reversed = interface(
        "a.b.C",
        "{properties: [{name: P2, type: 'enum[a.a.First.Kind]', errors: [x.y.Q.Error.A]},\
                       {name: P1, type: 'enum[z.z.Last.Kind]', errors: [x.y.Q.Error.B]}]}",
    );

    assert_eq!(
        forward.resolver().enum_headers(),
        reversed.resolver().enum_headers()
    );
    assert_eq!(
        forward.resolver().error_headers(),
        reversed.resolver().error_headers()
    );
    assert_eq!(forward.resolver().includes(), reversed.resolver().includes());
}

#[test]
fn test_duplicate_references_deduplicate() {
    let iface = interface(
        "a.b.C",
        "{properties: [{name: P1, type: 'enum[x.y.Other.Kind]'}],\
          methods: [{name: M,\
                     parameters: [{name: A, type: 'enum[x.y.Other.Kind]'}],\
                     returns: [{name: R, type: 'array[enum[x.y.Other.Kind]]'}],\
                     errors: [x.y.Q.Error.Oops, x.y.Q.Error.Oops]}],\
          signals: [{name: S, properties: [{name: V, type: 'enum[x.y.Other.Kind]'}]}]}",
    );
    assert_eq!(
        iface.resolver().enum_headers(),
        vec!["x/y/Other/common.hpp"]
    );
    assert_eq!(iface.resolver().error_headers(), vec!["x/y/Q/error.hpp"]);
    assert_eq!(
        iface.resolver().includes(),
        vec!["x/y/Other/common.hpp", "x/y/Q/error.hpp"]
    );
}

// ============================================================================
// Error References
// ============================================================================

#[test]
fn test_error_reference_styles() {
    let resolver = SAMPLE.resolver();
    assert_eq!(
        resolver.error_headers(),
        vec![
            "a/b/C/error.hpp",
            "x/y/Common/error.hpp",
            "x/y/Logging/event.hpp",
        ]
    );
    assert_eq!(resolver.error_class("self.Error.Busy"), "ifgen::a::b::C::Error::Busy");
    assert_eq!(
        resolver.error_class("x.y.Logging.Cleared"),
        "ifgen::error::x::y::Logging::Cleared"
    );
}

// ============================================================================
// End-to-End: Local Enum
// ============================================================================

#[test]
fn test_local_enum_property_resolves_in_unit() {
    let iface = interface(
        "a.b.C",
        "{properties: [{name: Hue, type: 'enum[self.Color]'}],\
          enumerations: [{name: Color, values: [{name: Red}, {name: Green}]}]}",
    );

    // Local references need no external headers.
    assert!(iface.resolver().enum_headers().is_empty());
    assert!(iface.resolver().includes().is_empty());

    // Unqualified rendering stays in scope; qualified rendering resolves
    // into the interface's own namespace.
    let hue = &iface.properties()[0];
    assert!(hue.is_enum());
    assert_eq!(hue.cpp_type(Some(iface.name()), Role::Server, false), "Color");
    assert_eq!(
        hue.cpp_type(Some(iface.name()), Role::Server, true),
        "ifgen::server::a::b::C::Color"
    );
}
