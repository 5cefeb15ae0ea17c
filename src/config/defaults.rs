//! Default configuration values

/// Name of the per-project sentinel config file
pub const CONFIG_FILE_NAME: &str = "payloadkit.json";

/// Name of the install metadata file written next to installed items
pub const INSTALL_METADATA_FILE_NAME: &str = ".payloadkit.json";

/// Name of the manifest file inside a registry item's source directory.
/// Excluded when copying the item into a project.
pub const ITEM_MANIFEST_FILE_NAME: &str = "payloadkit.json";

/// Name of the registry index file
pub const INDEX_FILE_NAME: &str = "index.json";

/// Cache TTL for the remote registry index (in seconds)
pub const REGISTRY_CACHE_TTL: u64 = 300; // 5 minutes

/// Schema version written to new payloadkit.json files
pub const CONFIG_VERSION: &str = "1.0.0";

/// Default install path for blocks
pub const DEFAULT_BLOCKS_PATH: &str = "src/blocks";

/// Default install path for components
pub const DEFAULT_COMPONENTS_PATH: &str = "src/components";

/// Default install path for globals
pub const DEFAULT_GLOBALS_PATH: &str = "src/globals";

/// Default install path for collections
pub const DEFAULT_COLLECTIONS_PATH: &str = "src/collections";

/// Default install path for plugins
pub const DEFAULT_PLUGINS_PATH: &str = "src/plugins";

/// Default import alias for blocks
pub const DEFAULT_BLOCKS_ALIAS: &str = "@/blocks";

/// Default import alias for components
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";

/// Default import alias for globals
pub const DEFAULT_GLOBALS_ALIAS: &str = "@/globals";

/// Default import alias for collections
pub const DEFAULT_COLLECTIONS_ALIAS: &str = "@/collections";

/// Default import alias for plugins
pub const DEFAULT_PLUGINS_ALIAS: &str = "@/plugins";
