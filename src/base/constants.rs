//! Domain constants for emitted bindings.

/// Root C++ namespace that all generated bindings live under.
pub const CPP_NAMESPACE_ROOT: &str = "ifgen";

/// Header generated for an interface's shared (role-independent) types.
pub const COMMON_HEADER: &str = "common.hpp";

/// Header generated for an error-set unit's exception types.
pub const ERROR_HEADER: &str = "error.hpp";

/// Header generated for an event-set unit's exception types.
pub const EVENT_HEADER: &str = "event.hpp";
