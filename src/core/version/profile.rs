// ─── Version Profile ───
// Classifies the host version into an era plus probed capability flags.

use serde::Serialize;
use tracing::{info, warn};

use crate::core::error::LocaleError;
use crate::core::host::HostRegistry;

/// Releases that predate the flattening of numeric IDs + metadata.
pub const LEGACY_RELEASES: &[&str] = &[
    "1.12.2", "1.12.1", "1.12", "1.11.2", "1.11.1", "1.11", "1.10.2", "1.10.1", "1.10", "1.9.4",
    "1.9.3", "1.9.2", "1.9.1", "1.9", "1.8.9", "1.8.8", "1.8.7", "1.8.6", "1.8.5", "1.8.4",
    "1.8.3", "1.8.2", "1.8.1", "1.8", "1.7.10", "1.7.9", "1.7.2",
];

/// Introduced alongside first-class potion data (1.9).
const BASE_POTION_DATA_PROBE: &str = "LINGERING_POTION";
/// Introduced alongside the internal namespace move (1.17).
const REPACKAGED_NAMESPACE_PROBE: &str = "AMETHYST_CLUSTER";
/// Introduced alongside the minified name accessor (1.18).
const SHORT_ACCESSOR_PROBE: &str = "MUSIC_DISC_OTHERSIDE";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Numeric ID + metadata identifiers (1.7.2 – 1.12.2).
    Legacy,
    /// Flat namespaced identifiers (1.13+).
    Modern,
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Era::Legacy => write!(f, "legacy"),
            Era::Modern => write!(f, "modern"),
        }
    }
}

/// Immutable description of the running host, built once at startup.
#[derive(Debug, Serialize)]
pub struct VersionProfile {
    raw: String,
    release: Option<String>,
    era: Era,
    has_base_potion_data: bool,
    has_repackaged_namespace: bool,
    is_post_short_accessor: bool,
    #[serde(skip)]
    anomaly: Option<LocaleError>,
}

impl VersionProfile {
    /// Classify `raw` (e.g. `1.12.2-R0.1-SNAPSHOT`) and probe `host` for
    /// capabilities.
    ///
    /// Never fails: a malformed version yields a Modern profile with every
    /// capability off and an `UnsupportedVersion` anomaly attached.
    pub fn detect(raw: &str, host: &dyn HostRegistry) -> Self {
        let Some(release) = release_prefix(raw) else {
            let anomaly = LocaleError::UnsupportedVersion(raw.to_string());
            warn!("{anomaly}; assuming a modern server without extra capabilities");
            return Self {
                raw: raw.to_string(),
                release: None,
                era: Era::Modern,
                has_base_potion_data: false,
                has_repackaged_namespace: false,
                is_post_short_accessor: false,
                anomaly: Some(anomaly),
            };
        };

        let era = if LEGACY_RELEASES.contains(&release) {
            Era::Legacy
        } else {
            Era::Modern
        };
        let modern = era == Era::Modern;

        let profile = Self {
            raw: raw.to_string(),
            release: Some(release.to_string()),
            era,
            has_base_potion_data: host.knows_material(BASE_POTION_DATA_PROBE),
            has_repackaged_namespace: modern && host.knows_material(REPACKAGED_NAMESPACE_PROBE),
            is_post_short_accessor: modern && host.knows_material(SHORT_ACCESSOR_PROBE),
            anomaly: None,
        };

        info!(
            "Detected {} server {} (potion data: {}, repackaged: {}, short accessor: {})",
            profile.era,
            release,
            profile.has_base_potion_data,
            profile.has_repackaged_namespace,
            profile.is_post_short_accessor
        );
        profile
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Dotted numeric release, e.g. `1.12.2`; `None` when unparseable.
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn is_legacy(&self) -> bool {
        self.era == Era::Legacy
    }

    pub fn has_base_potion_data(&self) -> bool {
        self.has_base_potion_data
    }

    pub fn has_repackaged_namespace(&self) -> bool {
        self.has_repackaged_namespace
    }

    pub fn is_post_short_accessor(&self) -> bool {
        self.is_post_short_accessor
    }

    /// The classification problem recorded at detection time, if any.
    pub fn anomaly(&self) -> Option<&LocaleError> {
        self.anomaly.as_ref()
    }
}

/// Text before the first `-`, accepted only when it is purely digits and dots.
fn release_prefix(raw: &str) -> Option<&str> {
    let prefix = raw.trim().split('-').next().unwrap_or_default();
    let well_formed = !prefix.is_empty()
        && prefix.chars().all(|c| c.is_ascii_digit() || c == '.')
        && prefix.chars().any(|c| c.is_ascii_digit());
    well_formed.then_some(prefix)
}
