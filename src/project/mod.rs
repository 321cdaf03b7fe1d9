//! Project management: locating and loading definition units.
//!
//! A definition tree on disk maps dotted unit names to YAML files:
//! `a.b.Widget` lives at `<root>/a/b/Widget.interface.yaml` (or
//! `.errors.yaml` / `.events.yaml`). This module is the only part of the
//! crate that touches the filesystem.

mod loader;

pub use loader::{
    LoadError, errors_path, events_path, interface_path, load_errors, load_events, load_interface,
};
