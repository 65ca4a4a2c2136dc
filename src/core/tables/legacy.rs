// ─── Legacy Key Tables ───
// Generated composite-identifier → key data for pre-flattening releases.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::core::error::{LocaleError, LocaleResult};

/// The seven legacy lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyTable {
    Blocks,
    Items,
    Potions,
    LingeringPotions,
    SplashPotions,
    /// Durability-keyed potions from before first-class potion data.
    PreCapabilityPotions,
    Entities,
}

impl LegacyTable {
    pub const ALL: [LegacyTable; 7] = [
        LegacyTable::Blocks,
        LegacyTable::Items,
        LegacyTable::Potions,
        LegacyTable::LingeringPotions,
        LegacyTable::SplashPotions,
        LegacyTable::PreCapabilityPotions,
        LegacyTable::Entities,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            LegacyTable::Blocks => "blocks.json",
            LegacyTable::Items => "items.json",
            LegacyTable::Potions => "potions.json",
            LegacyTable::LingeringPotions => "lingering_potions.json",
            LegacyTable::SplashPotions => "splash_potions.json",
            LegacyTable::PreCapabilityPotions => "potions_pre_capability.json",
            LegacyTable::Entities => "entities.json",
        }
    }

    fn embedded_source(self) -> &'static str {
        match self {
            LegacyTable::Blocks => include_str!("../../../data/legacy/blocks.json"),
            LegacyTable::Items => include_str!("../../../data/legacy/items.json"),
            LegacyTable::Potions => include_str!("../../../data/legacy/potions.json"),
            LegacyTable::LingeringPotions => {
                include_str!("../../../data/legacy/lingering_potions.json")
            }
            LegacyTable::SplashPotions => include_str!("../../../data/legacy/splash_potions.json"),
            LegacyTable::PreCapabilityPotions => {
                include_str!("../../../data/legacy/potions_pre_capability.json")
            }
            LegacyTable::Entities => include_str!("../../../data/legacy/entities.json"),
        }
    }
}

/// Read-only legacy lookup data, shared by every resolution.
#[derive(Debug, Default)]
pub struct LegacyKeyTables {
    tables: HashMap<LegacyTable, HashMap<String, String>>,
}

static EMBEDDED: OnceLock<LegacyKeyTables> = OnceLock::new();

impl LegacyKeyTables {
    /// Tables compiled into the binary, parsed on first use.
    pub fn embedded() -> LocaleResult<&'static LegacyKeyTables> {
        if let Some(tables) = EMBEDDED.get() {
            return Ok(tables);
        }

        let mut tables = HashMap::new();
        for table in LegacyTable::ALL {
            tables.insert(table, parse_table(table, table.embedded_source())?);
        }
        let parsed = LegacyKeyTables { tables };
        debug!("Parsed {} embedded legacy keys", parsed.len());

        Ok(EMBEDDED.get_or_init(|| parsed))
    }

    /// Load tables from `<dir>/<table>.json`; tables without a file keep
    /// the embedded data.
    pub fn from_dir(dir: &Path) -> LocaleResult<LegacyKeyTables> {
        let mut tables = HashMap::new();
        for table in LegacyTable::ALL {
            let path = dir.join(table.file_name());
            let data = if path.exists() {
                let text = std::fs::read_to_string(&path).map_err(|source| LocaleError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!("Loaded legacy table override {:?}", path);
                parse_table(table, &text)?
            } else {
                parse_table(table, table.embedded_source())?
            };
            tables.insert(table, data);
        }
        Ok(LegacyKeyTables { tables })
    }

    /// Build tables from in-memory maps; tables not given stay empty.
    pub fn from_maps(
        maps: impl IntoIterator<Item = (LegacyTable, HashMap<String, String>)>,
    ) -> LegacyKeyTables {
        LegacyKeyTables {
            tables: maps.into_iter().collect(),
        }
    }

    /// Every entry of one table.
    pub fn entries(&self, table: LegacyTable) -> impl Iterator<Item = (&str, &str)> {
        self.tables
            .get(&table)
            .into_iter()
            .flat_map(|t| t.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Exact composite-identifier lookup.
    pub fn get(&self, table: LegacyTable, identifier: &str) -> Option<&str> {
        self.tables
            .get(&table)
            .and_then(|t| t.get(identifier))
            .map(String::as_str)
    }

    /// `NAME.subkey` first, then bare `NAME`.
    pub fn lookup(&self, table: LegacyTable, name: &str, subkey: Option<&str>) -> Option<&str> {
        subkey
            .and_then(|sub| self.get(table, &format!("{name}.{sub}")))
            .or_else(|| self.get(table, name))
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_table(table: LegacyTable, text: &str) -> LocaleResult<HashMap<String, String>> {
    serde_json::from_str(text).map_err(|e| {
        LocaleError::Other(format!(
            "legacy table {} is malformed: {e}",
            table.file_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse_and_are_shared() {
        let a = LegacyKeyTables::embedded().unwrap();
        let b = LegacyKeyTables::embedded().unwrap();
        assert!(std::ptr::eq(a, b));
        for table in LegacyTable::ALL {
            assert!(a.entries(table).next().is_some(), "{table:?} is empty");
        }
    }

    #[test]
    fn lookup_prefers_exact_subkey() {
        let tables = LegacyKeyTables::embedded().unwrap();
        assert_eq!(
            tables.lookup(LegacyTable::Blocks, "STONE", Some("1")),
            Some("tile.stone.granite.name")
        );
        assert_eq!(
            tables.lookup(LegacyTable::Blocks, "STONE", Some("42")),
            Some("tile.stone.stone.name")
        );
        assert_eq!(tables.lookup(LegacyTable::Blocks, "NOPE", Some("0")), None);
    }

    #[test]
    fn from_dir_overrides_only_present_files() {
        let temp = std::env::temp_dir().join(format!("legacy-tables-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&temp);
        std::fs::create_dir_all(&temp).unwrap();
        std::fs::write(temp.join("entities.json"), r#"{"ZOMBIE":"entity.Custom.name"}"#).unwrap();

        let tables = LegacyKeyTables::from_dir(&temp).unwrap();
        assert_eq!(
            tables.get(LegacyTable::Entities, "ZOMBIE"),
            Some("entity.Custom.name")
        );
        assert_eq!(tables.get(LegacyTable::Entities, "SKELETON"), None);
        assert_eq!(
            tables.get(LegacyTable::Items, "DIAMOND_SWORD"),
            Some("item.swordDiamond.name")
        );

        let _ = std::fs::remove_dir_all(&temp);
    }

    #[test]
    fn malformed_override_is_reported() {
        let temp = std::env::temp_dir().join(format!("legacy-tables-bad-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&temp);
        std::fs::create_dir_all(&temp).unwrap();
        std::fs::write(temp.join("items.json"), "[1, 2]").unwrap();

        let err = LegacyKeyTables::from_dir(&temp).unwrap_err();
        assert!(err.to_string().contains("items.json"));

        let _ = std::fs::remove_dir_all(&temp);
    }
}
