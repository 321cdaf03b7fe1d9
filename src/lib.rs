//! # ifgen-base
//!
//! Core library for remote-object interface definition parsing, semantic
//! model construction, and binding generation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Definition-unit loading (YAML files on disk)
//!   ↓
//! model     → Semantic entities (Interface, Property, Method, …),
//!             validation, cross-reference resolution
//!   ↓
//! parser    → Logos lexer, recursive-descent parser for type signatures
//!   ↓
//! base      → Primitives (identifier transforms, reserved words)
//! ```
//!
//! A generation run deserializes one definition unit into raw records,
//! builds the entity model bottom-up (every property's type signature is
//! parsed at construction time), and hands the finished read-only aggregate
//! to a renderer. The model is immutable once built; the generation role
//! (server/client/common) is threaded as an explicit argument on every
//! render call, never stored on an entity.

// ============================================================================
// MODULES (dependency order: base → parser → model → project)
// ============================================================================

/// Foundation: identifier case transforms, reserved-word escaping
pub mod base;

/// Parser: logos lexer and recursive-descent parser for type signatures
pub mod parser;

/// Semantic model: entities, aggregates, validation, cross-references
pub mod model;

/// Project: loading definition units from a YAML tree on disk
pub mod project;

// Re-export the types nearly every consumer needs.
pub use base::keywords;
pub use model::{
    Association, Enum, ErrorElement, ErrorSet, EventElement, EventSet, Interface, Method,
    ModelError, NamedElement, Path, Property, Resolver, ServiceName, Severity, Signal,
};
pub use parser::{Role, SignatureError, TypeNode, parse_signature};
