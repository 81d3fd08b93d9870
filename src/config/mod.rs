//! Configuration module.

pub mod keybindings;
mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, CELL_HEIGHT_ENV_VAR, CONFIG_ENV_VAR, DEFAULT_CELL_HEIGHT,
};
