//! Associations between object trees.
//!
//! An association declares a forward name and a reverse name; consumers may
//! additionally pin the interfaces an endpoint must implement.

use super::errors::ModelError;
use super::named::NamedElement;
use super::raw::RawAssociation;

#[derive(Debug, Clone)]
pub struct ReverseAssociation {
    named: NamedElement,
}

impl ReverseAssociation {
    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }
}

#[derive(Debug, Clone)]
pub struct Association {
    named: NamedElement,
    reverse: ReverseAssociation,
    required_endpoint_interfaces: Vec<String>,
}

impl Association {
    pub fn from_raw(raw: RawAssociation) -> Result<Self, ModelError> {
        Ok(Self {
            named: NamedElement::new(&raw.name, raw.description.unwrap_or_default())?,
            reverse: ReverseAssociation {
                named: NamedElement::new(&raw.reverse_name, String::new())?,
            },
            required_endpoint_interfaces: raw.required_endpoint_interfaces,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn reverse(&self) -> &ReverseAssociation {
        &self.reverse
    }

    pub fn required_endpoint_interfaces(&self) -> &[String] {
        &self.required_endpoint_interfaces
    }
}
