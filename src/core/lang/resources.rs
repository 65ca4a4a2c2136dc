// ─── Jar Resources ───
// Listing and searching entries inside a client or server jar.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::core::error::{LocaleError, LocaleResult};

/// Folder holding the client's language files.
pub const LANG_FOLDER: &str = "assets/minecraft/lang/";

pub fn open_jar(jar: &Path) -> LocaleResult<zip::ZipArchive<File>> {
    let file = File::open(jar).map_err(|e| LocaleError::Io {
        path: jar.to_path_buf(),
        source: e,
    })?;
    Ok(zip::ZipArchive::new(file)?)
}

/// Every entry name in archive order.
pub fn entry_names(jar: &Path) -> LocaleResult<Vec<String>> {
    let archive = open_jar(jar)?;
    Ok(archive.file_names().map(str::to_string).collect())
}

/// Read one entry as UTF-8 text.
pub fn read_entry(jar: &Path, name: &str) -> LocaleResult<String> {
    let mut archive = open_jar(jar)?;
    let mut entry = archive.by_name(name)?;
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(text)
}

fn folder_prefix(folder: &str) -> String {
    let trimmed = folder.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Direct children of `folder`, sorted. Sub-folders keep a trailing `/`.
pub fn list_children(jar: &Path, folder: &str) -> LocaleResult<Vec<String>> {
    let prefix = folder_prefix(folder);
    let mut children = BTreeSet::new();
    for name in entry_names(jar)? {
        let Some(rest) = name.strip_prefix(&prefix) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let child = match rest.split_once('/') {
            Some((dir, _)) => format!("{dir}/"),
            None => rest.to_string(),
        };
        children.insert(child);
    }
    Ok(children.into_iter().collect())
}

/// Entries under `base` whose remaining path matches `pattern` anywhere.
pub fn find_resources(jar: &Path, base: &str, pattern: &str) -> LocaleResult<Vec<String>> {
    let pattern = Regex::new(pattern)?;
    let matches: Vec<String> = entry_names(jar)?
        .into_iter()
        .filter(|name| {
            name.strip_prefix(base)
                .is_some_and(|rest| pattern.is_match(rest))
        })
        .collect();

    if matches.is_empty() {
        warn!("{} could not be found in {:?}", base, jar);
    } else {
        debug!("Found {} resources under {} in {:?}", matches.len(), base, jar);
    }
    Ok(matches)
}

/// Indented listing of `folder`, descending at most `max_depth` levels.
///
/// Entries are ordered segment by segment, so a folder's children always
/// follow the folder itself.
pub fn render_tree(jar: &Path, folder: &str, max_depth: usize) -> LocaleResult<String> {
    let prefix = folder_prefix(folder);
    let mut paths: BTreeSet<(Vec<String>, bool)> = BTreeSet::new();
    for name in entry_names(jar)? {
        let Some(rest) = name.strip_prefix(&prefix) else {
            continue;
        };
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        for depth in 0..segments.len().min(max_depth + 1) {
            let is_dir = depth + 1 < segments.len() || name.ends_with('/');
            let path = segments[..=depth].iter().map(|s| s.to_string()).collect();
            paths.insert((path, is_dir));
        }
    }

    let mut out = String::new();
    for (path, is_dir) in paths {
        let Some((leaf, parents)) = path.split_last() else {
            continue;
        };
        out.push_str(&"  ".repeat(parents.len()));
        out.push_str(leaf);
        if is_dir {
            out.push('/');
        }
        out.push('\n');
    }
    Ok(out)
}

/// Locale codes with a language file under [`LANG_FOLDER`], lowercased.
pub fn available_locales(jar: &Path) -> LocaleResult<Vec<String>> {
    let locales: BTreeSet<String> = list_children(jar, LANG_FOLDER)?
        .into_iter()
        .filter_map(|child| {
            child
                .strip_suffix(".json")
                .or_else(|| child.strip_suffix(".lang"))
                .map(str::to_ascii_lowercase)
        })
        .collect();
    Ok(locales.into_iter().collect())
}
