pub mod settings;

pub use settings::{
    DEFAULT_SETTINGS_FILES, Settings, TENANTS_URL_ENV_VAR, load_settings, load_settings_from,
};
