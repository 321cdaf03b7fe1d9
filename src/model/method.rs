//! Methods: named operations with parameters and returns.

use smol_str::SmolStr;

use crate::parser::Role;

use super::errors::ModelError;
use super::flags::{MethodFlag, parse_method_flags};
use super::named::NamedElement;
use super::property::Property;
use super::raw::RawMethod;

#[derive(Debug, Clone)]
pub struct Method {
    named: NamedElement,
    parameters: Vec<Property>,
    returns: Vec<Property>,
    flags: Vec<MethodFlag>,
    cpp_flags: String,
    errors: Vec<SmolStr>,
}

impl Method {
    pub fn from_raw(raw: RawMethod) -> Result<Self, ModelError> {
        let named = NamedElement::new(&raw.name, raw.description.unwrap_or_default())?;
        let parameters = raw
            .parameters
            .into_iter()
            .map(Property::from_raw)
            .collect::<Result<_, _>>()?;
        let returns = raw
            .returns
            .into_iter()
            .map(Property::from_raw)
            .collect::<Result<_, _>>()?;
        let (flags, cpp_flags) = parse_method_flags(&raw.flags, &raw.name)?;

        Ok(Self {
            named,
            parameters,
            returns,
            flags,
            cpp_flags,
            errors: raw.errors.into_iter().map(SmolStr::from).collect(),
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn parameters(&self) -> &[Property] {
        &self.parameters
    }

    pub fn returns(&self) -> &[Property] {
        &self.returns
    }

    pub fn flags(&self) -> &[MethodFlag] {
        &self.flags
    }

    pub fn cpp_flags(&self) -> &str {
        &self.cpp_flags
    }

    pub fn errors(&self) -> &[SmolStr] {
        &self.errors
    }

    /// The C++ return type: `void`, the single return's type, or a tuple.
    pub fn cpp_return_type(&self, interface: &str, role: Role) -> String {
        match self.returns.len() {
            0 => "void".to_owned(),
            1 => self.returns[0].cpp_type_param(interface, role),
            _ => format!("std::tuple<{}>", self.returns_as_list(interface, role)),
        }
    }

    /// Comma-joined fully qualified return types, declaration order.
    pub fn returns_as_list(&self, interface: &str, role: Role) -> String {
        join_types(&self.returns, interface, role)
    }

    /// Comma-joined fully qualified parameter types, declaration order.
    pub fn parameter_types_as_list(&self, interface: &str, role: Role) -> String {
        join_types(&self.parameters, interface, role)
    }
}

fn join_types(properties: &[Property], interface: &str, role: Role) -> String {
    properties
        .iter()
        .map(|p| p.cpp_type_param(interface, role))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(yaml: &str) -> Method {
        let raw: RawMethod = serde_yaml::from_str(yaml).unwrap();
        Method::from_raw(raw).unwrap()
    }

    #[test]
    fn test_void_return() {
        let m = method("{name: Reset}");
        assert_eq!(m.cpp_return_type("a.b.C", Role::Common), "void");
    }

    #[test]
    fn test_single_return() {
        let m = method("{name: Read, returns: [{name: Value, type: int32}]}");
        assert_eq!(m.cpp_return_type("a.b.C", Role::Common), "int32_t");
    }

    #[test]
    fn test_tuple_return() {
        let m = method(
            "{name: Query, returns: [{name: Value, type: int32}, {name: Unit, type: string}]}",
        );
        assert_eq!(
            m.cpp_return_type("a.b.C", Role::Common),
            "std::tuple<int32_t, std::string>"
        );
    }

    #[test]
    fn test_parameter_failure_aborts_method() {
        let raw: RawMethod = serde_yaml::from_str(
            "{name: Bad, parameters: [{name: P, type: 'array[int32,byte]'}]}",
        )
        .unwrap();
        assert!(Method::from_raw(raw).is_err());
    }
}
