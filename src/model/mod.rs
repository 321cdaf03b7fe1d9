//! The semantic entity model.
//!
//! Raw definition records (deserialized YAML, [`raw`]) are validated and
//! defaulted into immutable entities, bottom-up: [`Property`] before
//! [`Method`] before [`Interface`]. Each entity composes a [`NamedElement`]
//! by value for its name handling; no entity inherits behavior from another.
//!
//! Three aggregate kinds own entity collections, one per definition unit:
//! - [`Interface`] — properties, methods, signals, enums, paths,
//!   associations, service names
//! - [`ErrorSet`] — error elements from an `*.errors.yaml` unit
//! - [`EventSet`] — event/error elements from an `*.events.yaml` unit
//!
//! Once an aggregate is built it is never mutated; renderers query it
//! through read-only accessors and the [`Resolver`].

pub mod raw;

mod association;
mod enumeration;
mod error;
mod errors;
mod event;
mod flags;
mod interface;
mod method;
mod named;
mod path;
mod property;
mod resolve;
mod service_name;
mod signal;

pub use association::{Association, ReverseAssociation};
pub use enumeration::{Enum, EnumValue};
pub use error::{ErrorElement, ErrorSet};
pub use errors::ModelError;
pub use event::{EventElement, EventLanguage, EventMetadata, EventSet, Severity};
pub use flags::{MethodFlag, PropertyFlag};
pub use interface::Interface;
pub use method::Method;
pub use named::NamedElement;
pub use path::Path;
pub use property::Property;
pub use resolve::Resolver;
pub use service_name::ServiceName;
pub use signal::Signal;
