//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ProviderConfig, ResolveOptions, ResolvedConfig, SkyConfig,
    resolve_config,
};
