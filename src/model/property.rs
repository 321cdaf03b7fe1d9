//! Properties: the typed leaves of the model.
//!
//! A property owns its parsed [`TypeNode`] — the signature is parsed when
//! the property is constructed, so a malformed type aborts the whole unit
//! before any render work starts.

use smol_str::SmolStr;

use crate::parser::{Role, ScalarKind, TypeNode, parse_signature};

use super::errors::ModelError;
use super::flags::{PropertyFlag, parse_property_flags};
use super::named::NamedElement;
use super::raw::{RawProperty, default_to_string};

/// A property, method parameter/return, or signal property.
#[derive(Debug, Clone)]
pub struct Property {
    named: NamedElement,
    type_node: TypeNode,
    signature: SmolStr,
    default: Option<String>,
    flags: Vec<PropertyFlag>,
    cpp_flags: String,
    errors: Vec<SmolStr>,
}

impl Property {
    pub fn from_raw(raw: RawProperty) -> Result<Self, ModelError> {
        let named = NamedElement::new(&raw.name, raw.description.unwrap_or_default())?;
        let type_node = parse_signature(&raw.signature)
            .map_err(|source| ModelError::signature(&raw.name, source))?;
        let (flags, cpp_flags) = parse_property_flags(&raw.flags, &raw.name)?;
        let default = raw
            .default
            .as_ref()
            .map(|value| default_to_string(value, &raw.name))
            .transpose()?;

        Ok(Self {
            named,
            type_node,
            signature: raw.signature.into(),
            default,
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

    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }

    /// The signature text as written in the definition.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn flags(&self) -> &[PropertyFlag] {
        &self.flags
    }

    /// The precomputed OR-expression of the vtable flags, declaration order.
    pub fn cpp_flags(&self) -> &str {
        &self.cpp_flags
    }

    /// Permitted error names, declaration order.
    pub fn errors(&self) -> &[SmolStr] {
        &self.errors
    }

    pub fn is_enum(&self) -> bool {
        self.type_node.is_enum()
    }

    /// Render this property's type as a C++ type expression.
    pub fn cpp_type(&self, enclosing: Option<&str>, role: Role, qualify: bool) -> String {
        self.type_node.render(enclosing, role, qualify)
    }

    /// Fully qualified type expression for use in another unit's text.
    pub fn cpp_type_param(&self, interface: &str, role: Role) -> String {
        self.type_node.render(Some(interface), role, true)
    }

    /// Header paths of every enumeration this property's type references.
    pub fn enum_headers(&self, enclosing: Option<&str>) -> Vec<String> {
        self.type_node.enum_headers(enclosing)
    }

    /// The coarse registry parameter class of this property's type.
    pub fn registry_type(&self) -> &'static str {
        match &self.type_node {
            TypeNode::Scalar(kind) => kind.registry_type(),
            _ => "string",
        }
    }

    /// Format the declared default as a C++ literal expression.
    ///
    /// Booleans lowercase, strings quote-wrap, the numeric sentinels map to
    /// `std::numeric_limits` expressions, and enum defaults are prefixed
    /// with the qualified enum type. Sentinels are case-insensitive.
    pub fn default_literal(&self, enclosing: Option<&str>, role: Role) -> Option<String> {
        let value = self.default.as_ref()?;
        let literal = match &self.type_node {
            TypeNode::Scalar(ScalarKind::Boolean) => value.to_ascii_lowercase(),
            TypeNode::Scalar(ScalarKind::String) => format!("\"{value}\""),
            TypeNode::Scalar(kind) if kind.is_numeric() => {
                numeric_literal(value, kind.cpp_type())
            }
            node if node.is_enum() => {
                let qualified = node.render(enclosing, role, true);
                // A dotted default names the value through its enum; only
                // the final segment matters once the type is qualified.
                let leaf = value.rsplit('.').next().unwrap_or(value);
                format!("{qualified}::{leaf}")
            }
            _ => value.clone(),
        };
        Some(literal)
    }
}

fn numeric_literal(value: &str, cpp: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "nan" => format!("std::numeric_limits<{cpp}>::quiet_NaN()"),
        "infinity" => format!("std::numeric_limits<{cpp}>::infinity()"),
        "-infinity" => format!("-std::numeric_limits<{cpp}>::infinity()"),
        "epsilon" => format!("std::numeric_limits<{cpp}>::epsilon()"),
        "maxint" => format!("std::numeric_limits<{cpp}>::max()"),
        "minint" => format!("std::numeric_limits<{cpp}>::min()"),
        _ => value.to_owned(),
    }
}
