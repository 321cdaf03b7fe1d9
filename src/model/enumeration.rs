//! Enumerations declared by an interface.

use smol_str::SmolStr;

use super::errors::ModelError;
use super::named::NamedElement;
use super::raw::{RawEnum, RawEnumValue};

/// One declared enumeration value.
#[derive(Debug, Clone)]
pub struct EnumValue {
    named: NamedElement,
    value: Option<i64>,
}

impl EnumValue {
    pub fn from_raw(raw: RawEnumValue) -> Result<Self, ModelError> {
        Ok(Self {
            named: NamedElement::new(&raw.name, raw.description.unwrap_or_default())?,
            value: raw.value,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    /// Explicit value tag, when the definition pins one.
    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

/// An enumeration: ordered named values plus an optional default.
///
/// A declared default must name one of the declared values; dangling
/// defaults are rejected at construction.
#[derive(Debug, Clone)]
pub struct Enum {
    named: NamedElement,
    values: Vec<EnumValue>,
    default: Option<SmolStr>,
}

impl Enum {
    pub fn from_raw(raw: RawEnum) -> Result<Self, ModelError> {
        let named = NamedElement::new(&raw.name, raw.description.unwrap_or_default())?;
        let values = raw
            .values
            .into_iter()
            .map(EnumValue::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(default) = &raw.default {
            if !values.iter().any(|v| v.name() == default) {
                return Err(ModelError::schema(
                    &raw.name,
                    format!("default `{default}` does not name a declared value"),
                ));
            }
        }

        Ok(Self {
            named,
            values,
            default: raw.default.map(SmolStr::from),
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_must_name_a_value() {
        let raw: RawEnum = serde_yaml::from_str(
            "{name: Color, values: [{name: Red}, {name: Green}], default: Blue}",
        )
        .unwrap();
        let err = Enum::from_raw(raw).unwrap_err();
        assert!(matches!(err, ModelError::Schema { .. }));
    }

    #[test]
    fn test_valid_default() {
        let raw: RawEnum = serde_yaml::from_str(
            "{name: Color, values: [{name: Red}, {name: Green}], default: Green}",
        )
        .unwrap();
        let e = Enum::from_raw(raw).unwrap();
        assert_eq!(e.default(), Some("Green"));
        assert_eq!(e.values().len(), 2);
    }

    #[test]
    fn test_value_tags() {
        let raw: RawEnum =
            serde_yaml::from_str("{name: Level, values: [{name: Low, value: 1}, {name: High, value: 10}]}")
                .unwrap();
        let e = Enum::from_raw(raw).unwrap();
        assert_eq!(e.values()[1].value(), Some(10));
    }
}
