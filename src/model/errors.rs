//! Error types for model construction.

use thiserror::Error;

use crate::parser::SignatureError;

/// A definition unit that failed validation.
///
/// Every variant is fatal: it aborts construction of the owning entity,
/// which aborts the owning aggregate, which aborts the generation run. The
/// transform is deterministic, so identical input always produces the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Required field missing or a shape constraint violated.
    #[error("schema validation failed for `{entity}`: {message}")]
    Schema { entity: String, message: String },

    /// A raw name outside the identifier grammar.
    #[error("invalid name `{name}`: {message}")]
    Name { name: String, message: String },

    /// An unrecognized flag token on a property or method.
    #[error("invalid flag `{flag}` on `{entity}`")]
    Flag { flag: String, entity: String },

    /// A malformed type signature on a property or parameter.
    #[error("invalid type for `{entity}`: {source}")]
    Signature {
        entity: String,
        #[source]
        source: SignatureError,
    },
}

impl ModelError {
    /// Create a schema validation error.
    pub fn schema(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            entity: entity.into(),
            message: message.into(),
        }
    }

    /// Create a name validation error.
    pub fn name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a flag validation error.
    pub fn flag(flag: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::Flag {
            flag: flag.into(),
            entity: entity.into(),
        }
    }

    /// Wrap a signature error with the owning entity's name.
    pub fn signature(entity: impl Into<String>, source: SignatureError) -> Self {
        Self::Signature {
            entity: entity.into(),
            source,
        }
    }
}
