//! The composed name component shared by every entity.

use smol_str::SmolStr;

use crate::base::ident::{lower_camel, screaming_snake_case, snake_case, upper_camel};
use crate::base::keywords::escape_reserved;

use super::errors::ModelError;

/// A validated raw name plus its derived spellings.
///
/// Names are simple (`SomeProperty`) or dotted (`a.b.Widget`). The derived
/// case spellings are computed eagerly at construction from the final name
/// segment and passed through reserved-word escaping, so lookups are plain
/// field reads — nothing is synthesized at access time. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedElement {
    name: SmolStr,
    description: String,
    namespaces: Vec<SmolStr>,
    classname: SmolStr,
    upper_camel: SmolStr,
    lower_camel: SmolStr,
    snake: SmolStr,
    screaming: SmolStr,
}

impl NamedElement {
    /// Validate a raw name and compute its derived spellings.
    ///
    /// Accepts `[A-Za-z0-9_.]` with no empty dot segments.
    pub fn new(name: &str, description: impl Into<String>) -> Result<Self, ModelError> {
        validate_name(name)?;

        let mut segments: Vec<SmolStr> = name.split('.').map(SmolStr::from).collect();
        let classname = match segments.pop() {
            Some(last) => last,
            // Unreachable: validated names always have a final segment.
            None => name.into(),
        };

        Ok(Self {
            name: name.into(),
            description: description.into(),
            namespaces: segments,
            upper_camel: escape_reserved(&upper_camel(&classname)).into(),
            lower_camel: escape_reserved(&lower_camel(&classname)).into(),
            snake: escape_reserved(&snake_case(&classname)).into(),
            screaming: escape_reserved(&screaming_snake_case(&classname)).into(),
            classname,
        })
    }

    /// The raw name as written in the definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Leading dot segments of a dotted name (empty for simple names).
    pub fn namespaces(&self) -> &[SmolStr] {
        &self.namespaces
    }

    /// The final name segment (the whole name when undotted).
    pub fn classname(&self) -> &str {
        &self.classname
    }

    pub fn upper_camel(&self) -> &str {
        &self.upper_camel
    }

    pub fn lower_camel(&self) -> &str {
        &self.lower_camel
    }

    pub fn snake_case(&self) -> &str {
        &self.snake
    }

    pub fn screaming_snake_case(&self) -> &str {
        &self.screaming
    }
}

/// Check the raw identifier grammar shared by every entity name.
pub(crate) fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::name(name, "name is empty"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '.')
    {
        return Err(ModelError::name(
            name,
            format!("illegal character `{bad}`"),
        ));
    }
    if name.split('.').any(str::is_empty) {
        return Err(ModelError::name(name, "empty dot segment"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let named = NamedElement::new("MACAddress", "").unwrap();
        assert_eq!(named.name(), "MACAddress");
        assert_eq!(named.classname(), "MACAddress");
        assert_eq!(named.upper_camel(), "MACAddress");
        assert_eq!(named.lower_camel(), "macAddress");
        assert_eq!(named.snake_case(), "mac_address");
        assert_eq!(named.screaming_snake_case(), "MAC_ADDRESS");
        assert!(named.namespaces().is_empty());
    }

    #[test]
    fn test_dotted_name() {
        let named = NamedElement::new("a.b.Widget", "desc").unwrap();
        assert_eq!(named.classname(), "Widget");
        assert_eq!(named.namespaces(), ["a", "b"]);
        assert_eq!(named.description(), "desc");
    }

    #[test]
    fn test_reserved_name_escapes() {
        let named = NamedElement::new("class", "").unwrap();
        assert_eq!(named.snake_case(), "class_");
        assert_eq!(named.lower_camel(), "class_");
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(NamedElement::new("", "").is_err());
        assert!(NamedElement::new("a..b", "").is_err());
        assert!(NamedElement::new("has space", "").is_err());
        assert!(NamedElement::new("dash-ed", "").is_err());
    }
}
