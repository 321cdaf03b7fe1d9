//! The interface aggregate.
//!
//! An interface owns everything one `*.interface.yaml` unit declares.
//! Collections keep declaration order; nothing is reordered after
//! construction, so generation output is stable for a given input.

use super::association::Association;
use super::enumeration::Enum;
use super::errors::ModelError;
use super::named::NamedElement;
use super::method::Method;
use super::path::Path;
use super::property::Property;
use super::raw::RawInterface;
use super::resolve::Resolver;
use super::service_name::ServiceName;
use super::signal::Signal;

#[derive(Debug, Clone)]
pub struct Interface {
    named: NamedElement,
    properties: Vec<Property>,
    methods: Vec<Method>,
    signals: Vec<Signal>,
    enums: Vec<Enum>,
    paths: Vec<Path>,
    associations: Vec<Association>,
    service_names: Vec<ServiceName>,
}

impl Interface {
    /// Build the aggregate bottom-up from one definition unit.
    ///
    /// `name` is the unit's dotted name (it names the file, so it is not
    /// part of the record itself). The first invalid entity aborts the
    /// whole unit.
    pub fn from_raw(name: &str, raw: RawInterface) -> Result<Self, ModelError> {
        tracing::debug!(interface = name, "building interface model");

        let named = NamedElement::new(name, raw.description.unwrap_or_default())?;
        let properties = raw
            .properties
            .into_iter()
            .map(Property::from_raw)
            .collect::<Result<_, _>>()?;
        let methods = raw
            .methods
            .into_iter()
            .map(Method::from_raw)
            .collect::<Result<_, _>>()?;
        let signals = raw
            .signals
            .into_iter()
            .map(Signal::from_raw)
            .collect::<Result<_, _>>()?;
        let enums = raw
            .enumerations
            .into_iter()
            .map(Enum::from_raw)
            .collect::<Result<_, _>>()?;
        let paths = raw
            .paths
            .into_iter()
            .map(Path::from_raw)
            .collect::<Result<_, _>>()?;
        let associations = raw
            .associations
            .into_iter()
            .map(Association::from_raw)
            .collect::<Result<_, _>>()?;
        let service_names = raw
            .service_names
            .into_iter()
            .map(ServiceName::from_raw)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            named,
            properties,
            methods,
            signals,
            enums,
            paths,
            associations,
            service_names,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    /// The dotted interface name, e.g. `a.b.Widget`.
    pub fn name(&self) -> &str {
        self.named.name()
    }

    /// Namespace segments of the dotted name (everything but the last).
    pub fn namespaces(&self) -> &[smol_str::SmolStr] {
        self.named.namespaces()
    }

    /// The final name segment.
    pub fn classname(&self) -> &str {
        self.named.classname()
    }

    /// Join namespaces, classname, and a trailing piece with `join`.
    ///
    /// `joined_name("/", "common.hpp")` for `a.b.Widget` gives
    /// `a/b/Widget/common.hpp`.
    pub fn joined_name(&self, join: &str, append: &str) -> String {
        let mut parts: Vec<&str> = self.named.namespaces().iter().map(|s| s.as_str()).collect();
        parts.push(self.named.classname());
        parts.push(append);
        parts.join(join)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    pub fn service_names(&self) -> &[ServiceName] {
        &self.service_names
    }

    /// The cross-reference resolver for this interface.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}
