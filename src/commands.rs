use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::compose::LocaleManager;
use crate::core::error::{LocaleError, LocaleResult};
use crate::core::host::TranslationRegistry;
use crate::core::lang::{self, ReferenceTranslations};
use crate::core::model::{Enchantment, Enchantments, ItemMeta, Material, MaterialKind, PotionData};
use crate::core::state::{client_jar_for, LocaleSettings};
use crate::core::tables::LegacyKeyTables;

enum Tables {
    Embedded(&'static LegacyKeyTables),
    Loaded(LegacyKeyTables),
}

/// Everything one front-end invocation reads: settings, the reference
/// language (doubling as the offline host registry) and the legacy tables.
pub struct Session {
    settings: LocaleSettings,
    translations: ReferenceTranslations,
    tables: Tables,
}

impl Session {
    pub fn open(settings: LocaleSettings) -> LocaleResult<Self> {
        let translations = load_translations(&settings)?;
        let tables = match &settings.legacy_tables_dir {
            Some(dir) => Tables::Loaded(LegacyKeyTables::from_dir(dir)?),
            None => Tables::Embedded(LegacyKeyTables::embedded()?),
        };
        Ok(Self {
            settings,
            translations,
            tables,
        })
    }

    fn tables(&self) -> &LegacyKeyTables {
        match &self.tables {
            Tables::Embedded(tables) => tables,
            Tables::Loaded(tables) => tables,
        }
    }

    /// Run `f` against a manager for the configured server version.
    pub fn with_manager<T>(
        &self,
        f: impl FnOnce(&LocaleManager<'_>) -> LocaleResult<T>,
    ) -> LocaleResult<T> {
        let version = self.settings.server_version.as_deref().ok_or_else(|| {
            LocaleError::InvalidArgument(
                "server version is required (--server-version or settings.json)".into(),
            )
        })?;
        let registry = TranslationRegistry::new(&self.translations);
        let manager = LocaleManager::with_tables(version, &registry, self.tables())
            .with_translations(&self.translations)
            .with_missing_translation(self.settings.missing_translation.clone());
        f(&manager)
    }
}

fn load_translations(settings: &LocaleSettings) -> LocaleResult<ReferenceTranslations> {
    if let Some(file) = &settings.lang_file {
        return ReferenceTranslations::from_file(file);
    }
    if let Some(jar) = &settings.client_jar {
        return ReferenceTranslations::from_jar(jar, &settings.locale);
    }
    if let Some(jar) = settings.server_version.as_deref().and_then(client_jar_for) {
        if jar.exists() {
            info!("Using installed client jar {:?}", jar);
            return ReferenceTranslations::from_jar(&jar, &settings.locale);
        }
    }
    warn!("No reference language configured; modern lookups need --jar or --lang");
    Ok(ReferenceTranslations::default())
}

/// `name[:level]`, e.g. `sharpness:5` or `DAMAGE_ALL`. Level defaults to 1.
pub fn parse_enchantment(arg: &str) -> LocaleResult<(Enchantment, u32)> {
    let (name, level) = arg
        .rsplit_once(':')
        .and_then(|(name, level)| Some((name, level.parse::<u32>().ok()?)))
        .unwrap_or((arg, 1));
    let enchantment = Enchantment::vanilla(name)
        .ok_or_else(|| LocaleError::not_found("Enchantment", name.trim()))?;
    Ok((enchantment, level))
}

pub fn parse_enchantments(args: &[String]) -> LocaleResult<Enchantments> {
    args.iter().map(|arg| parse_enchantment(arg)).collect()
}

fn item_meta(potion: Option<&str>, stored: Option<Enchantments>) -> Option<ItemMeta> {
    if potion.is_none() && stored.is_none() {
        return None;
    }
    Some(ItemMeta {
        potion: potion.map(PotionData::new),
        stored_enchantments: stored,
    })
}

// ── Handlers ────────────────────────────────────────────

pub fn profile(session: &Session) -> LocaleResult<String> {
    session.with_manager(|manager| Ok(serde_json::to_string_pretty(manager.profile())?))
}

pub fn material(
    session: &Session,
    name: &str,
    kind: MaterialKind,
    durability: i16,
    potion: Option<&str>,
) -> LocaleResult<String> {
    let material = Material::new(name, kind);
    let meta = item_meta(potion, None);
    session.with_manager(|manager| {
        let key = manager.resolve_material_key(&material, durability, meta.as_ref())?;
        Ok(key.into_string())
    })
}

pub fn entity(session: &Session, entity_type: &str, extra: Option<&str>) -> LocaleResult<String> {
    session.with_manager(|manager| {
        Ok(manager.resolve_entity_key(entity_type, extra)?.into_string())
    })
}

/// One `name -> key` line per enchantment, then one per distinct level.
pub fn enchant(session: &Session, args: &[String]) -> LocaleResult<String> {
    let enchantments = parse_enchantments(args)?;
    session.with_manager(|manager| {
        let mut out = String::new();
        for (enchantment, key) in manager.resolve_enchantment_keys(&enchantments) {
            out.push_str(&format!("{} -> {}\n", enchantment.key, key));
        }
        for (level, key) in manager.resolve_level_keys(&enchantments) {
            out.push_str(&format!("{level} -> {key}\n"));
        }
        Ok(out)
    })
}

/// What a `compose` invocation fills the template with.
pub enum ComposeTarget<'a> {
    Item {
        material: Material,
        durability: i16,
        potion: Option<&'a str>,
        enchantments: Enchantments,
        stored: bool,
    },
    Entity {
        entity_type: &'a str,
        extra: Option<&'a str>,
    },
    Enchantments(Enchantments),
}

pub fn compose(session: &Session, template: &str, target: ComposeTarget<'_>) -> LocaleResult<String> {
    session.with_manager(|manager| match target {
        ComposeTarget::Item {
            material,
            durability,
            potion,
            enchantments,
            stored,
        } => {
            let (own, stored) = if stored {
                (None, Some(enchantments))
            } else {
                (Some(enchantments), None)
            };
            let meta = item_meta(potion, stored);
            manager.compose_item_message(template, &material, durability, own.as_ref(), meta.as_ref())
        }
        ComposeTarget::Entity { entity_type, extra } => {
            manager.compose_entity_message(template, entity_type, extra)
        }
        ComposeTarget::Enchantments(enchantments) => {
            manager.compose_enchantment_message(template, &enchantments)
        }
    })
}

pub fn lookup(session: &Session, key: &str) -> LocaleResult<String> {
    session.with_manager(|manager| Ok(manager.to_server_locale(key)))
}

/// What the `resources` subcommand shows.
pub enum ResourceQuery<'a> {
    Children(&'a str),
    Find { base: &'a str, pattern: &'a str },
    Tree { folder: &'a str, depth: usize },
    Locales,
}

pub fn resources(jar: &Path, query: ResourceQuery<'_>) -> LocaleResult<String> {
    let lines = match query {
        ResourceQuery::Children(folder) => lang::list_children(jar, folder)?,
        ResourceQuery::Find { base, pattern } => lang::find_resources(jar, base, pattern)?,
        ResourceQuery::Tree { folder, depth } => return lang::render_tree(jar, folder, depth),
        ResourceQuery::Locales => lang::available_locales(jar)?,
    };
    Ok(lines.iter().map(|l| format!("{l}\n")).collect())
}

/// The jar `resources` works on: explicit, configured, or installed.
pub fn resource_jar(settings: &LocaleSettings) -> LocaleResult<PathBuf> {
    settings
        .client_jar
        .clone()
        .or_else(|| settings.server_version.as_deref().and_then(client_jar_for))
        .ok_or_else(|| LocaleError::InvalidArgument("no client jar configured (--jar)".into()))
}
