pub mod read_settings;
pub mod write_settings;
pub mod config_dirs;
pub mod keybinds;
pub mod runtime_keybinds;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_or_default, load_settings_from};
pub use write_settings::{save_settings_to, Settings, SettingsError};
pub use config_dirs::{default_log_dir, default_settings_path, project_config_dir, user_cache_dir};
pub use keybinds::*;
