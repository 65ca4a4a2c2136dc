// ─── Reference Translations ───
// key → display string tables read from vanilla language files.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::resources::{self, LANG_FOLDER};
use crate::core::error::{LocaleError, LocaleResult};

/// Returned by [`ReferenceTranslations::to_server_locale`] for unknown keys.
pub const MISSING_TRANSLATION: &str = "???";

/// One loaded language table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTranslations {
    entries: HashMap<String, String>,
}

impl ReferenceTranslations {
    /// Modern `<locale>.json` format: one flat object of strings.
    pub fn from_json_str(text: &str) -> LocaleResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(text)?;
        Ok(Self { entries })
    }

    /// Legacy `<locale>.lang` format: `key=value` lines, `#` comments.
    pub fn from_lang_str(text: &str) -> Self {
        let entries = text
            .lines()
            .map(|line| line.trim_start_matches('\u{feff}').trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Load a `.json` or `.lang` file from disk, by extension.
    pub fn from_file(path: &Path) -> LocaleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LocaleError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let translations = if is_json(&path.to_string_lossy()) {
            Self::from_json_str(&text)?
        } else {
            Self::from_lang_str(&text)
        };
        info!("Loaded {} translations from {:?}", translations.len(), path);
        Ok(translations)
    }

    /// Load `locale` from a client jar. The locale matches case-insensitively
    /// and either file format is accepted.
    pub fn from_jar(jar: &Path, locale: &str) -> LocaleResult<Self> {
        let wanted = locale.trim().to_ascii_lowercase();
        let entry = resources::entry_names(jar)?
            .into_iter()
            .find(|name| {
                name.strip_prefix(LANG_FOLDER)
                    .and_then(|file| {
                        file.strip_suffix(".json")
                            .or_else(|| file.strip_suffix(".lang"))
                    })
                    .is_some_and(|code| code.eq_ignore_ascii_case(&wanted))
            })
            .ok_or_else(|| LocaleError::not_found("Language file", format!("{wanted} in {}", jar.display())))?;

        let text = resources::read_entry(jar, &entry)?;
        let translations = if is_json(&entry) {
            Self::from_json_str(&text)?
        } else {
            Self::from_lang_str(&text)
        };
        info!(
            "Loaded {} translations from {}!{}",
            translations.len(),
            jar.display(),
            entry
        );
        Ok(translations)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Display string for `key`, or `missing` when the table lacks it.
    pub fn to_server_locale(&self, key: &str, missing: &str) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                debug!("No translation for {}", key);
                missing.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ReferenceTranslations {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn is_json(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".json")
}
