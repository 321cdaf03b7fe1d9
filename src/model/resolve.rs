//! Cross-reference resolution.
//!
//! Walks an interface's entities to compute the external dependencies the
//! generated bindings need: enumeration headers (from every property,
//! parameter, return, and signal property type) and error headers (from
//! every permitted-error list). Results are deduplicated and sorted, so
//! two runs over differently ordered input collections produce identical
//! output.

use std::collections::BTreeSet;

use crate::base::constants::{CPP_NAMESPACE_ROOT, ERROR_HEADER, EVENT_HEADER};
use crate::base::keywords::escape_reserved;

use super::interface::Interface;
use super::property::Property;

/// Borrowing view over an [`Interface`] answering dependency queries.
pub struct Resolver<'a> {
    interface: &'a Interface,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(interface: &'a Interface) -> Self {
        Self { interface }
    }

    fn typed_entities(&self) -> impl Iterator<Item = &'a Property> {
        let iface = self.interface;
        iface
            .properties()
            .iter()
            .chain(iface.signals().iter().flat_map(|s| s.properties()))
            .chain(
                iface
                    .methods()
                    .iter()
                    .flat_map(|m| m.parameters().iter().chain(m.returns())),
            )
    }

    fn permitted_errors(&self) -> impl Iterator<Item = &'a str> {
        let iface = self.interface;
        iface
            .properties()
            .iter()
            .flat_map(|p| p.errors())
            .chain(iface.methods().iter().flat_map(|m| m.errors()))
            .map(|e| e.as_str())
    }

    /// Headers of every external enumeration referenced by a type in this
    /// interface. Local references resolve in-unit and contribute nothing.
    pub fn enum_headers(&self) -> Vec<String> {
        let mut headers = BTreeSet::new();
        for property in self.typed_entities() {
            headers.extend(property.enum_headers(None));
        }
        headers.into_iter().collect()
    }

    /// Headers of every permitted error named by this interface's
    /// properties and methods.
    pub fn error_headers(&self) -> Vec<String> {
        let mut headers = BTreeSet::new();
        for error in self.permitted_errors() {
            headers.insert(self.error_header(error));
        }
        headers.into_iter().collect()
    }

    /// The union of [`Self::enum_headers`] and [`Self::error_headers`].
    pub fn includes(&self) -> Vec<String> {
        let mut headers: BTreeSet<String> = self.enum_headers().into_iter().collect();
        headers.extend(self.error_headers());
        headers.into_iter().collect()
    }

    /// Header path for one permitted-error name.
    ///
    /// Classic `….Error.Name` references drop their trailing two components
    /// and live in the unit's error header; event-style references drop one
    /// component and live in the event header.
    pub fn error_header(&self, error: &str) -> String {
        let expanded = self.expand_self(error);
        let segments: Vec<&str> = expanded.split('.').collect();
        if expanded.contains(".Error.") {
            format!(
                "{}/{}",
                segments[..segments.len() - 2].join("/"),
                ERROR_HEADER
            )
        } else {
            format!(
                "{}/{}",
                segments[..segments.len() - 1].join("/"),
                EVENT_HEADER
            )
        }
    }

    /// Fully namespaced exception-class path for one permitted-error name.
    ///
    /// Event-style names (no `.Error` segment) resolve under the `error`
    /// namespace.
    pub fn error_class(&self, error: &str) -> String {
        let mut expanded = self.expand_self(error);
        if !expanded.contains(".Error") {
            expanded = format!("error.{expanded}");
        }
        let path = expanded
            .split('.')
            .map(escape_reserved)
            .collect::<Vec<_>>()
            .join("::");
        format!("{CPP_NAMESPACE_ROOT}::{path}")
    }

    fn expand_self(&self, error: &str) -> String {
        error.replace("self.", &format!("{}.", self.interface.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw::RawInterface;

    fn interface(yaml: &str) -> Interface {
        let raw: RawInterface = serde_yaml::from_str(yaml).unwrap();
        Interface::from_raw("a.b.C", raw).unwrap()
    }

    #[test]
    fn test_error_header_styles() {
        let iface = interface("{}");
        let resolver = iface.resolver();
        assert_eq!(
            resolver.error_header("x.y.Common.Error.Timeout"),
            "x/y/Common/error.hpp"
        );
        assert_eq!(resolver.error_header("x.y.Common.Timeout"), "x/y/Common/event.hpp");
        assert_eq!(resolver.error_header("self.Error.Busy"), "a/b/C/error.hpp");
    }

    #[test]
    fn test_error_class() {
        let iface = interface("{}");
        let resolver = iface.resolver();
        assert_eq!(
            resolver.error_class("x.y.Common.Error.Timeout"),
            "ifgen::x::y::Common::Error::Timeout"
        );
        assert_eq!(
            resolver.error_class("x.y.Common.Timeout"),
            "ifgen::error::x::y::Common::Timeout"
        );
        assert_eq!(
            resolver.error_class("self.Error.Busy"),
            "ifgen::a::b::C::Error::Busy"
        );
    }

    #[test]
    fn test_enum_headers_deduplicate_and_sort() {
        let iface = interface(
            "{properties: [{name: P1, type: 'enum[z.z.Last.Kind]'},\
                           {name: P2, type: 'enum[a.a.First.Kind]'},\
                           {name: P3, type: 'array[enum[z.z.Last.Kind]]'},\
                           {name: P4, type: 'enum[self.Local]'}]}",
        );
        assert_eq!(
            iface.resolver().enum_headers(),
            vec!["a/a/First/common.hpp", "z/z/Last/common.hpp"]
        );
    }
}
