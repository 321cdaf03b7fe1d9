//! Loader Tests - Definition Trees on Disk

use std::fs;
use std::path::Path;

use ifgen::project::{LoadError, errors_path, interface_path, load_errors, load_events, load_interface};

fn write_unit(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ============================================================================
// Path Mapping
// ============================================================================

#[test]
fn test_unit_names_map_to_file_paths() {
    let root = Path::new("/defs");
    assert_eq!(
        interface_path(root, "a.b.Widget"),
        Path::new("/defs/a/b/Widget.interface.yaml")
    );
    assert_eq!(
        errors_path(root, "a.b.Widget"),
        Path::new("/defs/a/b/Widget.errors.yaml")
    );
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_interface_unit() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(
        dir.path(),
        "a/b/Widget.interface.yaml",
        "description: A widget.\nproperties:\n  - name: Reading\n    type: double\n",
    );

    let iface = load_interface(dir.path(), "a.b.Widget").unwrap();
    assert_eq!(iface.name(), "a.b.Widget");
    assert_eq!(iface.properties()[0].name(), "Reading");
}

#[test]
fn test_load_error_and_event_units() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(
        dir.path(),
        "a/b/Widget.errors.yaml",
        "- name: Busy\n  errno: EBUSY\n- name: Broken\n",
    );
    write_unit(
        dir.path(),
        "a/b/Widget.events.yaml",
        "version: 1.0.0\nevents:\n  - name: Started\n    en:\n      message: started\n",
    );

    let errors = load_errors(dir.path(), "a.b.Widget").unwrap();
    assert_eq!(errors.errors().len(), 2);
    assert_eq!(errors.errors()[0].errno(), Some("EBUSY"));
    assert_eq!(errors.namespace(), "ifgen::error::a::b::widget");

    let events = load_events(dir.path(), "a.b.Widget").unwrap();
    assert_eq!(events.version(), "1.0.0");
    assert_eq!(events.events().len(), 1);
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_missing_unit_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_interface(dir.path(), "no.such.Unit"),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_unknown_keys_fail_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(
        dir.path(),
        "a/b/Widget.interface.yaml",
        "descriptoin: typo\n",
    );
    assert!(matches!(
        load_interface(dir.path(), "a.b.Widget"),
        Err(LoadError::Yaml { .. })
    ));
}

#[test]
fn test_model_errors_carry_the_unit_path() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(
        dir.path(),
        "a/b/Widget.interface.yaml",
        "properties:\n  - name: P\n    type: 'dict[string]'\n",
    );
    match load_interface(dir.path(), "a.b.Widget") {
        Err(LoadError::Model { path, .. }) => {
            assert!(path.ends_with("a/b/Widget.interface.yaml"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// Whole-Tree Sweep
// ============================================================================

#[test]
fn test_every_interface_unit_in_a_tree_loads() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(
        dir.path(),
        "x/One.interface.yaml",
        "properties:\n  - name: A\n    type: int32\n",
    );
    write_unit(
        dir.path(),
        "x/y/Two.interface.yaml",
        "methods:\n  - name: Go\n",
    );

    let mut loaded = 0;
    for entry in walkdir::WalkDir::new(dir.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .ends_with(".interface.yaml")
        })
    {
        let relative = entry.path().strip_prefix(dir.path()).unwrap();
        let name = relative
            .to_string_lossy()
            .trim_end_matches(".interface.yaml")
            .replace('/', ".");
        load_interface(dir.path(), &name).unwrap();
        loaded += 1;
    }
    assert_eq!(loaded, 2);
}
