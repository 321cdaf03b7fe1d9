//! Object paths declared by an interface.
//!
//! A path entry is one of three forms: a namespace root (`namespace:`), an
//! instance root (`instance:`), or an explicit named value. Nested
//! `segments` entries extend a root; a segment with no explicit value
//! defaults to the snake_case of its name.

use crate::base::ident::snake_case;

use super::errors::ModelError;
use super::named::NamedElement;
use super::raw::RawPath;

#[derive(Debug, Clone)]
pub struct Path {
    named: NamedElement,
    value: String,
    segments: Vec<Path>,
}

impl Path {
    pub fn from_raw(raw: RawPath) -> Result<Self, ModelError> {
        Self::build(raw, false)
    }

    fn build(raw: RawPath, segment: bool) -> Result<Self, ModelError> {
        let supplied = [&raw.namespace, &raw.instance, &raw.value]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if supplied > 1 {
            return Err(ModelError::schema(
                raw.name.as_deref().unwrap_or("path"),
                "give exactly one of `namespace`, `instance`, or `value`",
            ));
        }

        let (name, mut value) = if let Some(value) = raw.namespace {
            ("NamespacePath".to_owned(), value)
        } else if let Some(value) = raw.instance {
            ("InstancePath".to_owned(), value)
        } else {
            let name = raw
                .name
                .ok_or_else(|| ModelError::schema("path", "missing `name`"))?;
            (name, raw.value.unwrap_or_default())
        };

        if value.is_empty() {
            if segment {
                value = snake_case(&name);
            } else {
                return Err(ModelError::name(&name, "empty path value"));
            }
        }
        validate_path_value(&value, segment)?;

        let segments = raw
            .segments
            .into_iter()
            .map(|s| Self::build(s, true))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            named: NamedElement::new(&name, raw.description.unwrap_or_default())?,
            value,
            segments,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    /// The slash-delimited path (or bare segment) value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn segments(&self) -> &[Path] {
        &self.segments
    }
}

fn validate_path_value(value: &str, segment: bool) -> Result<(), ModelError> {
    if !segment && !value.starts_with('/') {
        return Err(ModelError::name(value, "paths must start with /"));
    }
    if segment && value.starts_with('/') {
        return Err(ModelError::name(value, "segments cannot start with /"));
    }

    let pieces = value.split('/').skip(if segment { 0 } else { 1 });
    for piece in pieces {
        if piece.is_empty() {
            return Err(ModelError::name(value, "paths cannot have consecutive /"));
        }
        if let Some(bad) = piece.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(ModelError::name(
                value,
                format!("illegal character `{bad}` in path"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(yaml: &str) -> Result<Path, ModelError> {
        Path::from_raw(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_namespace_path() {
        let p = path("{namespace: /a/b}").unwrap();
        assert_eq!(p.name(), "NamespacePath");
        assert_eq!(p.value(), "/a/b");
    }

    #[test]
    fn test_instance_path() {
        let p = path("{instance: /a/b/c1}").unwrap();
        assert_eq!(p.name(), "InstancePath");
    }

    #[test]
    fn test_path_must_lead_with_slash() {
        assert!(path("{name: Root, value: a/b}").is_err());
    }

    #[test]
    fn test_consecutive_slashes_rejected() {
        assert!(path("{namespace: /a//b}").is_err());
    }

    #[test]
    fn test_segment_defaults_to_snake_name() {
        let p = path("{namespace: /a, segments: [{name: SomeLeaf}]}").unwrap();
        assert_eq!(p.segments()[0].value(), "some_leaf");
    }

    #[test]
    fn test_segment_cannot_lead_with_slash() {
        assert!(path("{namespace: /a, segments: [{name: Leaf, value: /x}]}").is_err());
    }

    #[test]
    fn test_ambiguous_forms_rejected() {
        assert!(path("{namespace: /a, instance: /b}").is_err());
    }

    #[test]
    fn test_illegal_character() {
        assert!(path("{namespace: /a/b-c}").is_err());
    }
}
