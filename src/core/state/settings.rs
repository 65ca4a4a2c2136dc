use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::{LocaleError, LocaleResult};
use crate::core::lang::MISSING_TRANSLATION;

const APP_DIR_NAME: &str = "localelib";
const SETTINGS_FILE: &str = "settings.json";

/// Persisted front-end settings. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Version string the host reports, e.g. `1.12.2-R0.1-SNAPSHOT`.
    pub server_version: Option<String>,
    /// Client jar that language files and probes are read from.
    pub client_jar: Option<PathBuf>,
    /// Standalone language file; wins over the jar.
    pub lang_file: Option<PathBuf>,
    pub locale: String,
    /// Directory of legacy table overrides.
    pub legacy_tables_dir: Option<PathBuf>,
    pub missing_translation: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            server_version: None,
            client_jar: None,
            lang_file: None,
            locale: "en_us".to_string(),
            legacy_tables_dir: None,
            missing_translation: MISSING_TRANSLATION.to_string(),
            log_filter: None,
        }
    }
}

/// `<config dir>/localelib/settings.json`.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(SETTINGS_FILE)
}

/// Defaults when `path` does not exist; a file that exists must parse.
pub fn load_settings(path: &Path) -> LocaleResult<LocaleSettings> {
    if !path.exists() {
        debug!("No settings at {:?}, using defaults", path);
        return Ok(LocaleSettings::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| LocaleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_settings(path: &Path, settings: &LocaleSettings) -> LocaleResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LocaleError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json).map_err(|e| LocaleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Saved settings to {:?}", path);
    Ok(())
}

/// The vanilla launcher's game directory for this platform.
pub fn default_minecraft_dir() -> Option<PathBuf> {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        let folder = if cfg!(target_os = "windows") {
            ".minecraft"
        } else {
            "minecraft"
        };
        dirs::data_dir().map(|d| d.join(folder))
    } else {
        dirs::home_dir().map(|d| d.join(".minecraft"))
    }
}

/// `<game dir>/versions/<v>/<v>.jar`
pub fn client_jar_for(version: &str) -> Option<PathBuf> {
    let release = version.split('-').next().unwrap_or(version).trim();
    if release.is_empty() {
        return None;
    }
    default_minecraft_dir().map(|dir| {
        dir.join("versions")
            .join(release)
            .join(format!("{release}.jar"))
    })
}
