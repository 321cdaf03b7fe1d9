//! Well-known service names declared by an interface.
//!
//! A service-name entry is one of three forms: the interface's default
//! service (`default:`), an indexed prefix (`indexed_prefix:`, a base like
//! `a.b.Host` that consumers suffix with an index), or an explicit named
//! value.

use super::errors::ModelError;
use super::named::NamedElement;
use super::raw::RawServiceName;

#[derive(Debug, Clone)]
pub struct ServiceName {
    named: NamedElement,
    value: String,
}

impl ServiceName {
    pub fn from_raw(raw: RawServiceName) -> Result<Self, ModelError> {
        let supplied = [&raw.default, &raw.indexed_prefix, &raw.value]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if supplied != 1 {
            return Err(ModelError::schema(
                raw.name.as_deref().unwrap_or("service_name"),
                "give exactly one of `default`, `indexed_prefix`, or `value`",
            ));
        }

        let (name, value) = if let Some(value) = raw.default {
            ("DefaultService".to_owned(), value)
        } else if let Some(value) = raw.indexed_prefix {
            ("IndexedPrefix".to_owned(), value)
        } else if let Some(value) = raw.value {
            let name = raw
                .name
                .ok_or_else(|| ModelError::schema("service_name", "missing `name`"))?;
            (name, value)
        } else {
            return Err(ModelError::schema(
                raw.name.as_deref().unwrap_or("service_name"),
                "missing service-name value",
            ));
        };

        validate_service_value(&value)?;

        Ok(Self {
            named: NamedElement::new(&name, raw.description.unwrap_or_default())?,
            value,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    /// The dotted service-name value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn validate_service_value(value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::name(value, "empty service name"));
    }
    for segment in value.split('.') {
        if segment.is_empty() {
            return Err(ModelError::name(
                value,
                "service names cannot have consecutive .",
            ));
        }
        if let Some(bad) = segment
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(ModelError::name(
                value,
                format!("illegal character `{bad}` in service name"),
            ));
        }
        if segment.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ModelError::name(
                value,
                "service name segments may not start with a number",
            ));
        }
    }
    Ok(())
}
