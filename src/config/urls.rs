//! Registry URLs

/// Component registry base URL (GitHub raw)
pub const COMPONENT_REGISTRY: &str =
    "https://raw.githubusercontent.com/payloadkit/payloadkit-registry/main";

/// Environment variable overriding the registry location with a local
/// directory (used by tests and offline development)
pub const REGISTRY_DIR_ENV: &str = "PAYLOADKIT_REGISTRY_DIR";
