//! The parsed type tree and its render-time operations.

use std::collections::BTreeSet;

use smol_str::SmolStr;

use crate::base::constants::{COMMON_HEADER, CPP_NAMESPACE_ROOT};
use crate::base::keywords::escape_reserved;

// ============================================================================
// Kind vocabularies
// ============================================================================

/// Zero-arity type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Byte,
    Boolean,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Size,
    Ssize,
    Double,
    UnixFd,
    String,
    Path,
    Signature,
}

impl ScalarKind {
    /// The signature-grammar token for this kind.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Boolean => "boolean",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Size => "size",
            Self::Ssize => "ssize",
            Self::Double => "double",
            Self::UnixFd => "unixfd",
            Self::String => "string",
            Self::Path => "path",
            Self::Signature => "signature",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "byte" => Self::Byte,
            "boolean" => Self::Boolean,
            "int16" => Self::Int16,
            "uint16" => Self::Uint16,
            "int32" => Self::Int32,
            "uint32" => Self::Uint32,
            "int64" => Self::Int64,
            "uint64" => Self::Uint64,
            "size" => Self::Size,
            "ssize" => Self::Ssize,
            "double" => Self::Double,
            "unixfd" => Self::UnixFd,
            "string" => Self::String,
            "path" => Self::Path,
            "signature" => Self::Signature,
            _ => return None,
        })
    }

    /// The C++ spelling this kind renders to.
    pub fn cpp_type(&self) -> &'static str {
        match self {
            Self::Byte => "uint8_t",
            Self::Boolean => "bool",
            Self::Int16 => "int16_t",
            Self::Uint16 => "uint16_t",
            Self::Int32 => "int32_t",
            Self::Uint32 => "uint32_t",
            Self::Int64 => "int64_t",
            Self::Uint64 => "uint64_t",
            Self::Size => "size_t",
            Self::Ssize => "ssize_t",
            Self::Double => "double",
            Self::UnixFd => "ifgen::message::unix_fd",
            Self::String => "std::string",
            Self::Path => "ifgen::message::object_path",
            Self::Signature => "ifgen::message::signature",
        }
    }

    /// Whether this kind accepts the numeric default-value sentinels.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Self::Boolean | Self::String | Self::Path | Self::Signature | Self::UnixFd
        )
    }

    /// The coarse parameter class used in registry documents.
    pub fn registry_type(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String | Self::Path | Self::Signature => "string",
            _ => "number",
        }
    }
}

/// Fixed- and variable-arity container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Array,
    Set,
    Dict,
    Struct,
    Variant,
}

/// Child-count constraint of a container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == *n,
            Self::AtLeast(n) => count >= *n,
        }
    }

    /// Human-readable constraint for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Exact(0) => "no parameters",
            Self::Exact(1) => "exactly 1 parameter",
            Self::Exact(2) => "exactly 2 parameters",
            Self::Exact(_) => "a fixed number of parameters",
            Self::AtLeast(1) => "at least 1 parameter",
            Self::AtLeast(_) => "several parameters",
        }
    }
}

impl ContainerKind {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Set => "set",
            Self::Dict => "dict",
            Self::Struct => "struct",
            Self::Variant => "variant",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "array" => Self::Array,
            "set" => Self::Set,
            "dict" => Self::Dict,
            "struct" => Self::Struct,
            "variant" => Self::Variant,
            _ => return None,
        })
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Array | Self::Set => Arity::Exact(1),
            Self::Dict => Arity::Exact(2),
            Self::Struct | Self::Variant => Arity::AtLeast(1),
        }
    }

    /// The C++ generic container this kind renders to.
    pub fn cpp_template(&self) -> &'static str {
        match self {
            Self::Array => "std::vector",
            Self::Set => "std::set",
            Self::Dict => "std::map",
            Self::Struct => "std::tuple",
            Self::Variant => "std::variant",
        }
    }
}

/// Whether an enum reference resolves inside the interface being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locality {
    /// Declared by the interface currently being compiled (`self.` prefix).
    Local,
    /// Declared elsewhere; requires an external header.
    External,
}

/// The generation perspective a render call is producing.
///
/// The same parsed tree is rendered once per role, so the role is always an
/// explicit argument, never state on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Server,
    Client,
    Common,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Client => "client",
            Self::Common => "common",
        }
    }
}

// ============================================================================
// TypeNode
// ============================================================================

/// The parsed, recursive representation of a type signature.
///
/// Arity is enforced at construction ([`super::parse_signature`]); render
/// operations never re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Scalar(ScalarKind),
    Container(ContainerKind, Vec<TypeNode>),
    EnumRef {
        locality: Locality,
        /// The referenced enumeration's dotted name. For [`Locality::Local`]
        /// references the `self.` prefix is already stripped.
        path: SmolStr,
    },
}

impl TypeNode {
    /// True iff the root of the tree is an enumeration reference.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::EnumRef { .. })
    }

    /// Render the tree back into the compact signature language.
    ///
    /// Round-trips through [`super::parse_signature`] to a structurally
    /// equal tree.
    pub fn signature(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.token().to_owned(),
            Self::Container(kind, children) => {
                let inner: Vec<String> = children.iter().map(TypeNode::signature).collect();
                format!("{}[{}]", kind.token(), inner.join(","))
            }
            Self::EnumRef { locality, path } => match locality {
                Locality::Local => format!("enum[self.{path}]"),
                Locality::External => format!("enum[{path}]"),
            },
        }
    }

    /// Render the tree as a C++ type expression.
    ///
    /// `enclosing` is the dotted name of the interface that owns the
    /// property (needed to qualify local enum references); `role` selects
    /// the generated namespace an external or qualified enum reference
    /// resolves into; `qualify` requests full qualification of local
    /// references (without it they render as in-scope bare names).
    pub fn render(&self, enclosing: Option<&str>, role: Role, qualify: bool) -> String {
        match self {
            Self::Scalar(kind) => kind.cpp_type().to_owned(),
            Self::Container(kind, children) => {
                let inner: Vec<String> = children
                    .iter()
                    .map(|c| c.render(enclosing, role, qualify))
                    .collect();
                format!("{}<{}>", kind.cpp_template(), inner.join(", "))
            }
            Self::EnumRef { locality, path } => match locality {
                Locality::External => cpp_enum_path(role, path),
                Locality::Local => match enclosing {
                    Some(interface) if qualify => {
                        cpp_enum_path(role, &format!("{interface}.{path}"))
                    }
                    _ => escape_segments(path),
                },
            },
        }
    }

    /// Collect the deduplicated, sorted header paths of every enumeration
    /// referenced anywhere in the tree.
    ///
    /// Local references resolve inside the compiling unit and emit nothing
    /// unless `enclosing` names the interface explicitly (used only when
    /// re-exporting a type through another unit).
    pub fn enum_headers(&self, enclosing: Option<&str>) -> Vec<String> {
        let mut headers = BTreeSet::new();
        self.collect_enum_headers(enclosing, &mut headers);
        headers.into_iter().collect()
    }

    fn collect_enum_headers(&self, enclosing: Option<&str>, headers: &mut BTreeSet<String>) {
        match self {
            Self::Scalar(_) => {}
            Self::Container(_, children) => {
                for child in children {
                    child.collect_enum_headers(enclosing, headers);
                }
            }
            Self::EnumRef { locality, path } => {
                let full = match locality {
                    Locality::External => path.to_string(),
                    Locality::Local => match enclosing {
                        Some(interface) => format!("{interface}.{path}"),
                        None => return,
                    },
                };
                headers.insert(enum_header(&full));
            }
        }
    }
}

/// Header path for an enum reference: the dotted name minus its final
/// (enum-name) segment, slash-joined, under the unit's common header.
fn enum_header(dotted: &str) -> String {
    let mut segments: Vec<&str> = dotted.split('.').collect();
    segments.pop();
    format!("{}/{}", segments.join("/"), COMMON_HEADER)
}

/// Fully qualified C++ path for an enum reference in a given role.
fn cpp_enum_path(role: Role, dotted: &str) -> String {
    format!(
        "{}::{}::{}",
        CPP_NAMESPACE_ROOT,
        role.as_str(),
        escape_segments(dotted)
    )
}

fn escape_segments(dotted: &str) -> String {
    dotted
        .split('.')
        .map(escape_reserved)
        .collect::<Vec<_>>()
        .join("::")
}
