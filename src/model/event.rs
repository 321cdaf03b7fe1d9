//! Events, errors-as-events, and the event-set aggregate.
//!
//! An `*.events.yaml` unit declares versioned events (and error events)
//! with a severity, per-language message text, typed metadata parameters,
//! and optionally a mapping onto an external registry event instead of its
//! own text. The aggregate can emit a Redfish-style message-registry JSON
//! document for the whole unit.

use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

use crate::base::ident::upper_camel;
use crate::parser::Role;

use super::error::validate_errno;
use super::errors::ModelError;
use super::named::NamedElement;
use super::property::Property;
use super::raw::{RawEvent, RawEventLanguage, RawEventMetadata, RawEventUnit, RawProperty};

/// Registry documents carry this fixed schema identifier.
const REGISTRY_ODATA_TYPE: &str = "#MessageRegistry.v1_6_3.MessageRegistry";
const REGISTRY_OWNER: &str = "ifgen";
const REGISTRY_COPYRIGHT: &str = "Copyright 2024-2026 ifgen.";

/// Default errno for events that do not declare one.
const DEFAULT_ERRNO: &str = "EIO";

// ============================================================================
// Severity
// ============================================================================

/// The eight severity levels, ordered most to least severe.
///
/// Each level maps onto two coarser vocabularies: the syslog-style token
/// used in generated logging calls, and the three-tier registry severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Informational,
    Debug,
}

impl Severity {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "emergency" => Self::Emergency,
            "alert" => Self::Alert,
            "critical" => Self::Critical,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "notice" => Self::Notice,
            "informational" => Self::Informational,
            "debug" => Self::Debug,
            _ => return None,
        })
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Informational => "informational",
            Self::Debug => "debug",
        }
    }

    /// The syslog-style priority token.
    pub fn syslog_token(&self) -> &'static str {
        match self {
            Self::Emergency => "LOG_EMERG",
            Self::Alert => "LOG_ALERT",
            Self::Critical => "LOG_CRIT",
            Self::Error => "LOG_ERR",
            Self::Warning => "LOG_WARNING",
            Self::Notice => "LOG_NOTICE",
            Self::Informational => "LOG_INFO",
            Self::Debug => "LOG_DEBUG",
        }
    }

    /// The coarse three-tier registry severity.
    pub fn registry_tier(&self) -> &'static str {
        match self {
            Self::Emergency | Self::Alert | Self::Critical => "Critical",
            Self::Error | Self::Warning | Self::Notice => "Warning",
            Self::Informational | Self::Debug => "OK",
        }
    }
}

// ============================================================================
// Event entities
// ============================================================================

/// Message/description/resolution text for one language.
#[derive(Debug, Clone)]
pub struct EventLanguage {
    message: String,
    description: Option<String>,
    resolution: Option<String>,
}

impl EventLanguage {
    fn from_raw(raw: RawEventLanguage) -> Self {
        Self {
            message: raw.message,
            description: raw.description,
            resolution: raw.resolution,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }
}

/// A typed metadata parameter of an event.
#[derive(Debug, Clone)]
pub struct EventMetadata {
    property: Property,
    primary: bool,
}

impl EventMetadata {
    fn from_raw(raw: RawEventMetadata) -> Result<Self, ModelError> {
        let property = Property::from_raw(RawProperty {
            name: raw.name,
            signature: raw.signature,
            description: raw.description,
            default: None,
            flags: Vec::new(),
            errors: Vec::new(),
        })?;
        Ok(Self {
            property,
            primary: raw.primary,
        })
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Primary parameters substitute positionally into the message text.
    pub fn primary(&self) -> bool {
        self.primary
    }
}

/// One declared event (or error event).
#[derive(Debug, Clone)]
pub struct EventElement {
    named: NamedElement,
    is_error: bool,
    deprecated: Option<String>,
    errno: SmolStr,
    severity: Severity,
    redfish_mapping: Option<String>,
    en: EventLanguage,
    metadata: Vec<EventMetadata>,
}

impl EventElement {
    pub fn from_raw(raw: RawEvent, is_error: bool) -> Result<Self, ModelError> {
        let errno = raw.errno.unwrap_or_else(|| DEFAULT_ERRNO.to_owned());
        validate_errno(&errno, &raw.name)?;

        let severity = match &raw.severity {
            Some(token) => Severity::from_token(token).ok_or_else(|| {
                ModelError::schema(&raw.name, format!("unknown severity `{token}`"))
            })?,
            None => Severity::Informational,
        };

        // An event either carries its own text or maps onto an external
        // registry event, never both.
        let en = match (&raw.redfish_mapping, raw.en) {
            (Some(_), Some(_)) => {
                return Err(ModelError::schema(
                    &raw.name,
                    "`redfish-mapping` and `en` are mutually exclusive",
                ));
            }
            (Some(mapping), None) => EventLanguage {
                message: format!("Redfish({mapping})"),
                description: None,
                resolution: None,
            },
            (None, Some(language)) => EventLanguage::from_raw(language),
            (None, None) => {
                return Err(ModelError::schema(&raw.name, "missing `en` message text"));
            }
        };

        let metadata = raw
            .metadata
            .into_iter()
            .map(EventMetadata::from_raw)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            named: NamedElement::new(&raw.name, raw.description.unwrap_or_default())?,
            is_error,
            deprecated: raw.deprecated,
            errno: errno.into(),
            severity,
            redfish_mapping: raw.redfish_mapping,
            en,
            metadata,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    /// Declared in the unit's `errors` list rather than `events`.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn deprecated(&self) -> Option<&str> {
        self.deprecated.as_deref()
    }

    pub fn errno(&self) -> &str {
        &self.errno
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn redfish_mapping(&self) -> Option<&str> {
        self.redfish_mapping.as_deref()
    }

    pub fn language(&self) -> &EventLanguage {
        &self.en
    }

    pub fn metadata(&self) -> &[EventMetadata] {
        &self.metadata
    }

    /// The event's description: the language description when present,
    /// otherwise the message text.
    pub fn description(&self) -> &str {
        self.en.description().unwrap_or_else(|| self.en.message())
    }

    /// Header paths of every enumeration the metadata parameters reference.
    pub fn cpp_includes(&self, interface: &str) -> Vec<String> {
        let mut headers: Vec<String> = self
            .metadata
            .iter()
            .flat_map(|m| m.property.enum_headers(Some(interface)))
            .collect();
        headers.sort();
        headers.dedup();
        headers
    }

    fn primaries(&self) -> Vec<&EventMetadata> {
        self.metadata.iter().filter(|m| m.primary).collect()
    }

    /// The registry message for this event: `{name}` placeholders become
    /// `%1`, `%2`, … in primary-parameter declaration order.
    fn registry_event(&self, interface: &str) -> RegistryMessage {
        let primaries = self.primaries();

        let mut message = self.en.message().to_owned();
        for (i, meta) in primaries.iter().enumerate() {
            message = message.replace(
                &format!("{{{}}}", meta.property.name()),
                &format!("%{}", i + 1),
            );
        }

        RegistryMessage {
            description: self.en.description().map(str::to_owned),
            message,
            resolution: self
                .en
                .resolution()
                .unwrap_or("None.")
                .to_owned(),
            severity: self.severity.registry_tier().to_owned(),
            number_of_args: primaries.len(),
            param_types: primaries
                .iter()
                .map(|m| m.property.registry_type().to_owned())
                .collect(),
            oem: MessageOem {
                mapping: EventMapping {
                    event: format!("{interface}.{}", self.name()),
                    args: self.registry_args_mapping(interface),
                },
            },
        }
    }

    fn registry_mapping(&self, interface: &str, mapping: &str) -> RedfishMapping {
        RedfishMapping {
            redfish_event: mapping.to_owned(),
            args: self.registry_args_mapping(interface),
        }
    }

    fn registry_args_mapping(&self, interface: &str) -> Vec<ArgMapping> {
        self.primaries()
            .iter()
            .map(|m| ArgMapping {
                name: m.property.named().screaming_snake_case().to_owned(),
                cpp_type: m.property.cpp_type_param(interface, Role::Common),
            })
            .collect()
    }
}

// ============================================================================
// EventSet aggregate
// ============================================================================

/// The event-set aggregate built from one `*.events.yaml` unit.
#[derive(Debug, Clone)]
pub struct EventSet {
    named: NamedElement,
    version: String,
    errors: Vec<EventElement>,
    events: Vec<EventElement>,
}

impl EventSet {
    pub fn from_raw(name: &str, raw: RawEventUnit) -> Result<Self, ModelError> {
        tracing::debug!(unit = name, version = %raw.version, "building event set");
        Ok(Self {
            named: NamedElement::new(name, String::new())?,
            version: raw.version,
            errors: raw
                .errors
                .into_iter()
                .map(|e| EventElement::from_raw(e, true))
                .collect::<Result<_, _>>()?,
            events: raw
                .events
                .into_iter()
                .map(|e| EventElement::from_raw(e, false))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn errors(&self) -> &[EventElement] {
        &self.errors
    }

    pub fn events(&self) -> &[EventElement] {
        &self.events
    }

    /// Enumeration headers needed by every element's metadata, sorted and
    /// deduplicated.
    pub fn cpp_includes(&self) -> Vec<String> {
        let mut headers: Vec<String> = self
            .errors
            .iter()
            .chain(&self.events)
            .flat_map(|e| e.cpp_includes(self.name()))
            .collect();
        headers.sort();
        headers.dedup();
        headers
    }

    /// The registry prefix: UpperCamel of each unit-name segment, joined.
    pub fn registry_prefix(&self) -> String {
        self.name().split('.').map(upper_camel).collect()
    }

    /// Emit the unit's message-registry JSON document.
    ///
    /// Elements with a Redfish mapping contribute OEM mapping entries;
    /// everything else contributes a registry message. Entries appear in
    /// declaration order (errors first, then events).
    pub fn registry(&self, language: &str) -> serde_json::Result<String> {
        let prefix = self.registry_prefix();

        let mut messages = IndexMap::new();
        let mut mappings = IndexMap::new();
        for element in self.errors.iter().chain(&self.events) {
            match element.redfish_mapping() {
                Some(mapping) => {
                    mappings.insert(
                        format!("{}.{}", self.name(), element.name()),
                        element.registry_mapping(self.name(), mapping),
                    );
                }
                None => {
                    messages.insert(
                        element.name().to_owned(),
                        element.registry_event(self.name()),
                    );
                }
            }
        }

        let document = RegistryDocument {
            copyright: REGISTRY_COPYRIGHT.to_owned(),
            odata_type: REGISTRY_ODATA_TYPE.to_owned(),
            id: format!("{prefix}.{}", self.version),
            language: language.to_owned(),
            messages,
            name: format!("Message Registry for {}", self.name()),
            description: format!("Message Registry for {}", self.name()),
            owning_entity: REGISTRY_OWNER.to_owned(),
            registry_prefix: prefix,
            registry_version: self.version.clone(),
            oem: (!mappings.is_empty()).then_some(RegistryOem { mapping: mappings }),
        };

        serde_json::to_string_pretty(&document)
    }
}

// ============================================================================
// Registry document shapes
// ============================================================================

#[derive(Debug, Serialize)]
struct RegistryDocument {
    #[serde(rename = "@Redfish.Copyright")]
    copyright: String,
    #[serde(rename = "@odata.type")]
    odata_type: String,
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Messages")]
    messages: IndexMap<String, RegistryMessage>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "OwningEntity")]
    owning_entity: String,
    #[serde(rename = "RegistryPrefix")]
    registry_prefix: String,
    #[serde(rename = "RegistryVersion")]
    registry_version: String,
    #[serde(rename = "Oem", skip_serializing_if = "Option::is_none")]
    oem: Option<RegistryOem>,
}

#[derive(Debug, Serialize)]
struct RegistryMessage {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Resolution")]
    resolution: String,
    #[serde(rename = "MessageSeverity")]
    severity: String,
    #[serde(rename = "NumberOfArgs")]
    number_of_args: usize,
    #[serde(rename = "ParamTypes")]
    param_types: Vec<String>,
    #[serde(rename = "Oem")]
    oem: MessageOem,
}

#[derive(Debug, Serialize)]
struct MessageOem {
    #[serde(rename = "Mapping")]
    mapping: EventMapping,
}

#[derive(Debug, Serialize)]
struct EventMapping {
    #[serde(rename = "Event")]
    event: String,
    #[serde(rename = "Args")]
    args: Vec<ArgMapping>,
}

#[derive(Debug, Serialize)]
struct RedfishMapping {
    #[serde(rename = "RedfishEvent")]
    redfish_event: String,
    #[serde(rename = "Args")]
    args: Vec<ArgMapping>,
}

#[derive(Debug, Serialize)]
struct RegistryOem {
    #[serde(rename = "Mapping")]
    mapping: IndexMap<String, RedfishMapping>,
}

#[derive(Debug, Serialize)]
struct ArgMapping {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    cpp_type: String,
}
