// Wire-level and startup constants shared across the crate.
// The status string is part of the protocol contract with the orchestrator.
pub const STATUS_READY: &str = "ready";

// Optional diagnostics config, looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./engine.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";
