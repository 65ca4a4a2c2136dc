// ─── Message Composer ───
// Public entry point: resolves keys for the detected version and rebuilds
// templates into client-translated chat payloads.

pub mod payload;

use tracing::{debug, error};

use crate::core::error::{LocaleError, LocaleResult};
use crate::core::fragment::MessageTemplate;
use crate::core::host::{HostRegistry, MessageDispatcher};
use crate::core::lang::{ReferenceTranslations, MISSING_TRANSLATION};
use crate::core::model::{Enchantment, Enchantments, ItemMeta, Material};
use crate::core::resolve::{self, CanonicalKey, ResolveContext};
use crate::core::tables::LegacyKeyTables;
use crate::core::version::VersionProfile;

use payload::Fills;

/// Resolves localization keys and composes messages for one host.
///
/// The version profile is detected once at construction; everything the
/// manager holds is read-only afterwards.
pub struct LocaleManager<'a> {
    profile: VersionProfile,
    tables: &'a LegacyKeyTables,
    host: &'a dyn HostRegistry,
    translations: Option<&'a ReferenceTranslations>,
    missing_translation: String,
}

impl<'a> LocaleManager<'a> {
    /// Manager over the embedded legacy tables.
    pub fn new(server_version: &str, host: &'a dyn HostRegistry) -> LocaleResult<Self> {
        Ok(Self::with_tables(
            server_version,
            host,
            LegacyKeyTables::embedded()?,
        ))
    }

    pub fn with_tables(
        server_version: &str,
        host: &'a dyn HostRegistry,
        tables: &'a LegacyKeyTables,
    ) -> Self {
        Self {
            profile: VersionProfile::detect(server_version, host),
            tables,
            host,
            translations: None,
            missing_translation: MISSING_TRANSLATION.to_string(),
        }
    }

    pub fn with_translations(mut self, translations: &'a ReferenceTranslations) -> Self {
        self.translations = Some(translations);
        self
    }

    pub fn with_missing_translation(mut self, sentinel: impl Into<String>) -> Self {
        self.missing_translation = sentinel.into();
        self
    }

    pub fn profile(&self) -> &VersionProfile {
        &self.profile
    }

    fn context(&self) -> ResolveContext<'_> {
        ResolveContext {
            profile: &self.profile,
            tables: self.tables,
            host: self.host,
        }
    }

    // ── Keys ────────────────────────────────────────────

    /// Negative `durability` ignores durability entirely.
    pub fn resolve_material_key(
        &self,
        material: &Material,
        durability: i16,
        meta: Option<&ItemMeta>,
    ) -> LocaleResult<CanonicalKey> {
        resolve::material::resolve(self.context(), material, durability, meta)
    }

    pub fn resolve_entity_key(
        &self,
        entity_type: &str,
        extra: Option<&str>,
    ) -> LocaleResult<CanonicalKey> {
        resolve::entity::resolve(self.context(), entity_type, extra)
    }

    pub fn resolve_enchantment_keys(
        &self,
        enchantments: &Enchantments,
    ) -> Vec<(Enchantment, CanonicalKey)> {
        resolve::enchantment::resolve_enchantment_keys(&self.profile, enchantments)
    }

    pub fn resolve_level_keys(&self, enchantments: &Enchantments) -> Vec<(u32, CanonicalKey)> {
        resolve::enchantment::resolve_level_keys(enchantments)
    }

    /// Display string the loaded reference language gives `key`, or the
    /// missing-translation sentinel.
    pub fn to_server_locale(&self, key: &str) -> String {
        match self.translations {
            Some(translations) => translations.to_server_locale(key, &self.missing_translation),
            None => self.missing_translation.clone(),
        }
    }

    // ── Compose ─────────────────────────────────────────

    /// Fill `<item>`, `<enchantment>` and `<level>` in `template`.
    ///
    /// Enchantments stored in `meta` (enchanted books) replace the
    /// `enchantments` argument.
    pub fn compose_item_message(
        &self,
        template: &str,
        material: &Material,
        durability: i16,
        enchantments: Option<&Enchantments>,
        meta: Option<&ItemMeta>,
    ) -> LocaleResult<String> {
        let item_key = self.resolve_material_key(material, durability, meta)?;
        let enchantments = meta
            .and_then(|m| m.stored_enchantments.as_ref())
            .or(enchantments);
        let enchantment_keys = match enchantments {
            Some(e) => self.resolve_enchantment_keys(e),
            None => Vec::new(),
        };

        let mut fills = enchantment_fills(&enchantment_keys, enchantments);
        fills.item = Some(&item_key);
        Ok(self.build(template, &fills))
    }

    /// Fill `<enchantment>` and `<level>` in `template`.
    pub fn compose_enchantment_message(
        &self,
        template: &str,
        enchantments: &Enchantments,
    ) -> LocaleResult<String> {
        let enchantment_keys = self.resolve_enchantment_keys(enchantments);
        let fills = enchantment_fills(&enchantment_keys, Some(enchantments));
        Ok(self.build(template, &fills))
    }

    /// Fill every `<mob>` in `template`.
    pub fn compose_entity_message(
        &self,
        template: &str,
        entity_type: &str,
        extra: Option<&str>,
    ) -> LocaleResult<String> {
        let mob_key = self.resolve_entity_key(entity_type, extra)?;
        let fills = Fills {
            mob: Some(&mob_key),
            ..Fills::default()
        };
        Ok(self.build(template, &fills))
    }

    fn build(&self, template: &str, fills: &Fills<'_>) -> String {
        let parsed = MessageTemplate::parse(template);
        let payload = payload::build(&parsed, fills);
        debug!("Composed payload {}", payload);
        payload
    }

    // ── Send ────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn send_item_message(
        &self,
        dispatcher: &dyn MessageDispatcher,
        player: &str,
        template: &str,
        material: &Material,
        durability: i16,
        enchantments: Option<&Enchantments>,
        meta: Option<&ItemMeta>,
    ) -> bool {
        self.send(dispatcher, player, || {
            self.compose_item_message(template, material, durability, enchantments, meta)
        })
    }

    pub fn send_enchantment_message(
        &self,
        dispatcher: &dyn MessageDispatcher,
        player: &str,
        template: &str,
        enchantments: &Enchantments,
    ) -> bool {
        self.send(dispatcher, player, || {
            self.compose_enchantment_message(template, enchantments)
        })
    }

    pub fn send_entity_message(
        &self,
        dispatcher: &dyn MessageDispatcher,
        player: &str,
        template: &str,
        entity_type: &str,
        extra: Option<&str>,
    ) -> bool {
        self.send(dispatcher, player, || {
            self.compose_entity_message(template, entity_type, extra)
        })
    }

    /// Compose, then dispatch only if composing succeeded.
    fn send(
        &self,
        dispatcher: &dyn MessageDispatcher,
        player: &str,
        compose: impl FnOnce() -> LocaleResult<String>,
    ) -> bool {
        let result = if player.trim().is_empty() {
            Err(LocaleError::InvalidArgument("player cannot be empty".into()))
        } else {
            compose().and_then(|payload| dispatcher.dispatch(player, &payload))
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                error!("Message to '{}' not sent: {}", player, e);
                false
            }
        }
    }
}

/// The k-th enchantment supplies both the k-th enchantment key and, via
/// its own level, the k-th level key.
fn enchantment_fills<'k>(
    keys: &'k [(Enchantment, CanonicalKey)],
    enchantments: Option<&Enchantments>,
) -> Fills<'k> {
    Fills {
        item: None,
        mob: None,
        enchantments: keys.iter().map(|(_, key)| key).collect(),
        levels: enchantments
            .map(|e| e.levels().map(resolve::enchantment::level_key).collect())
            .unwrap_or_default(),
    }
}
