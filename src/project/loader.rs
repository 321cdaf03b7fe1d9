//! Definition-unit loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::raw::{RawError, RawEventUnit, RawInterface};
use crate::model::{ErrorSet, EventSet, Interface, ModelError};

/// A definition unit that could not be loaded.
///
/// Fatal; the generation run stops at the first failing unit.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax errors and shape mismatches, including unknown keys.
    #[error("cannot parse `{}`", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid definition in `{}`", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

fn unit_path(root: &Path, name: &str, suffix: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    let mut segments = name.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}{suffix}"));
        }
    }
    path
}

/// File path of an interface unit: `a.b.C` → `<root>/a/b/C.interface.yaml`.
pub fn interface_path(root: &Path, name: &str) -> PathBuf {
    unit_path(root, name, ".interface.yaml")
}

/// File path of an error-set unit.
pub fn errors_path(root: &Path, name: &str) -> PathBuf {
    unit_path(root, name, ".errors.yaml")
}

/// File path of an event-set unit.
pub fn events_path(root: &Path, name: &str) -> PathBuf {
    unit_path(root, name, ".events.yaml")
}

fn read(path: &Path) -> Result<String, LoadError> {
    tracing::debug!(path = %path.display(), "loading definition unit");
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and build an interface aggregate.
pub fn load_interface(root: &Path, name: &str) -> Result<Interface, LoadError> {
    let path = interface_path(root, name);
    let text = read(&path)?;
    let raw: RawInterface = serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
        path: path.clone(),
        source,
    })?;
    Interface::from_raw(name, raw).map_err(|source| LoadError::Model { path, source })
}

/// Load and build an error-set aggregate (the unit is a bare list).
pub fn load_errors(root: &Path, name: &str) -> Result<ErrorSet, LoadError> {
    let path = errors_path(root, name);
    let text = read(&path)?;
    let raw: Vec<RawError> = serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
        path: path.clone(),
        source,
    })?;
    ErrorSet::from_raw(name, raw).map_err(|source| LoadError::Model { path, source })
}

/// Load and build an event-set aggregate.
pub fn load_events(root: &Path, name: &str) -> Result<EventSet, LoadError> {
    let path = events_path(root, name);
    let text = read(&path)?;
    let raw: RawEventUnit = serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
        path: path.clone(),
        source,
    })?;
    EventSet::from_raw(name, raw).map_err(|source| LoadError::Model { path, source })
}
