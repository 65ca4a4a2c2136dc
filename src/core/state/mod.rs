pub mod settings;

pub use settings::{
    client_jar_for, default_minecraft_dir, default_settings_path, load_settings, save_settings,
    LocaleSettings,
};
