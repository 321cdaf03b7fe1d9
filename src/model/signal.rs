//! Signals: broadcast notifications carrying an ordered property list.

use super::errors::ModelError;
use super::named::NamedElement;
use super::property::Property;
use super::raw::RawSignal;

#[derive(Debug, Clone)]
pub struct Signal {
    named: NamedElement,
    properties: Vec<Property>,
}

impl Signal {
    pub fn from_raw(raw: RawSignal) -> Result<Self, ModelError> {
        let named = NamedElement::new(&raw.name, raw.description.unwrap_or_default())?;
        let properties = raw
            .properties
            .into_iter()
            .map(Property::from_raw)
            .collect::<Result<_, _>>()?;
        Ok(Self { named, properties })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}
