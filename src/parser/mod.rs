//! Type-signature grammar.
//!
//! Property and parameter types are written in a compact nested signature
//! language:
//!
//! ```text
//! signature := token ( "[" signature ("," signature)* "]" )?
//! ```
//!
//! for example `dict[string,array[int32]]` or `enum[self.Color]`. This
//! module provides:
//! - **logos** lexing of the signature punctuation ([`lexer`])
//! - the recursive type tree, [`TypeNode`], with its render-time operations
//! - a recursive-descent parser, [`parse_signature`], that validates every
//!   kind's arity at construction time
//!
//! Enum references are the one deferred part of the grammar: the referenced
//! enumeration's namespace depends on the generation role being rendered, so
//! the tree stores the dotted name and its locality, and resolution happens
//! in [`TypeNode::render`].

mod error;
mod lexer;
mod node;
mod parse;

pub use error::SignatureError;
pub use lexer::{SigToken, Token, tokenize};
pub use node::{Arity, ContainerKind, Locality, Role, ScalarKind, TypeNode};
pub use parse::parse_signature;
