//! Raw definition records.
//!
//! One record type per definition entry, deserialized straight from YAML.
//! Every record rejects unknown keys (`deny_unknown_fields`), so a typo in
//! a definition file is a load error rather than a silently ignored field.
//! Validation beyond shape — name grammar, signature parsing, flag
//! vocabulary, cross-field constraints — happens when the semantic entity
//! is constructed from its record.

use serde::Deserialize;

use super::errors::ModelError;

/// One interface definition unit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInterface {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub signals: Vec<RawSignal>,
    #[serde(default)]
    pub enumerations: Vec<RawEnum>,
    #[serde(default)]
    pub paths: Vec<RawPath>,
    #[serde(default)]
    pub associations: Vec<RawAssociation>,
    #[serde(default)]
    pub service_names: Vec<RawServiceName>,
}

/// A property-shaped entry: properties, method parameters and returns,
/// signal properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub signature: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default: Option<serde_yaml::Value>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMethod {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawProperty>,
    #[serde(default)]
    pub returns: Vec<RawProperty>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSignal {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEnum {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Vec<RawEnumValue>,
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Optional explicit value tag.
    #[serde(default)]
    pub value: Option<i64>,
}

/// A path entry: exactly one of `namespace`, `instance`, or `value`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPath {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub segments: Vec<RawPath>,
}

/// A service-name entry: exactly one of `default`, `indexed_prefix`, or
/// `value`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawServiceName {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub indexed_prefix: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAssociation {
    pub name: String,
    pub reverse_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_endpoint_interfaces: Vec<String>,
}

/// One element of an error-set unit (the unit itself is a bare list).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawError {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub errno: Option<String>,
}

/// One event-set definition unit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEventUnit {
    pub version: String,
    #[serde(default)]
    pub errors: Vec<RawEvent>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub errno: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(rename = "redfish-mapping", default)]
    pub redfish_mapping: Option<String>,
    #[serde(default)]
    pub en: Option<RawEventLanguage>,
    #[serde(default)]
    pub metadata: Vec<RawEventMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEventLanguage {
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// A typed event metadata parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEventMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub signature: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary parameters substitute positionally into the message text.
    #[serde(default)]
    pub primary: bool,
}

/// Render a YAML default to the literal string the formatter works from.
///
/// Only scalars are meaningful defaults; anything else is a shape error.
pub(crate) fn default_to_string(
    value: &serde_yaml::Value,
    entity: &str,
) -> Result<String, ModelError> {
    match value {
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s.clone()),
        _ => Err(ModelError::schema(entity, "default must be a scalar")),
    }
}
