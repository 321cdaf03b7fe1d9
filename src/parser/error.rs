//! Errors raised by the type-signature grammar.

use thiserror::Error;

/// A malformed type signature.
///
/// Every variant carries the offending signature text so the failure can be
/// reported against the definition entry that owns it. Raising one of these
/// aborts construction of the owning property, which aborts the owning
/// aggregate — no partial trees are ever built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature was empty or all whitespace.
    #[error("empty type signature")]
    Empty,

    /// A character outside the signature alphabet.
    #[error("illegal character at offset {offset} in signature `{signature}`")]
    IllegalCharacter { offset: usize, signature: String },

    /// A `[` without a matching `]`, or vice versa.
    #[error("unbalanced brackets in signature `{signature}`")]
    UnbalancedBrackets { signature: String },

    /// A token in a position the grammar does not allow.
    #[error("unexpected `{found}` in signature `{signature}`")]
    UnexpectedToken { found: String, signature: String },

    /// A type-kind token that is not part of the vocabulary.
    #[error("unknown type `{token}` in signature `{signature}`")]
    UnknownType { token: String, signature: String },

    /// A container or scalar given the wrong number of children.
    #[error("`{kind}` takes {expected}, found {found} in signature `{signature}`")]
    Arity {
        kind: &'static str,
        expected: &'static str,
        found: usize,
        signature: String,
    },

    /// `enum[...]` whose argument is not a single literal dotted name.
    #[error("enum reference must be a single dotted name in signature `{signature}`")]
    InvalidEnumRef { signature: String },
}
