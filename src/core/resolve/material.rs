// ─── Material Keys ───
// Material (+durability +meta) → canonical key, per era.

use tracing::debug;

use super::{CanonicalKey, ResolveContext};
use crate::core::error::{LocaleError, LocaleResult};
use crate::core::model::{ItemMeta, Material, PotionForm};
use crate::core::tables::LegacyTable;

/// Base potion type a legacy host reports for a potion item without data.
const DEFAULT_POTION_TYPE: &str = "UNCRAFTABLE";

/// Resolve the key a client uses to name `material`.
///
/// `durability < 0` means "ignore durability": every durability-specific
/// lookup is skipped. Modern hosts never key items by durability, so
/// callers there usually pass `-1`.
pub fn resolve(
    ctx: ResolveContext<'_>,
    material: &Material,
    durability: i16,
    meta: Option<&ItemMeta>,
) -> LocaleResult<CanonicalKey> {
    if material.name.is_empty() {
        return Err(LocaleError::InvalidArgument(
            "material name cannot be empty".into(),
        ));
    }

    let key = if ctx.profile.is_legacy() {
        resolve_legacy(ctx, material, durability, meta)?
    } else {
        resolve_modern(ctx, material, meta)?
    };
    debug!("Material {}:{} -> {}", material, durability, key);
    Ok(key)
}

fn resolve_legacy(
    ctx: ResolveContext<'_>,
    material: &Material,
    durability: i16,
    meta: Option<&ItemMeta>,
) -> LocaleResult<CanonicalKey> {
    let subkey = (durability >= 0).then(|| durability.to_string());
    let subkey = subkey.as_deref();

    if material.is_block() {
        return ctx
            .tables
            .lookup(LegacyTable::Blocks, &material.name, subkey)
            .map(CanonicalKey::from)
            .ok_or_else(|| LocaleError::not_found("Block", composite(material, durability)));
    }

    if let Some(form) = material.potion_form() {
        return resolve_legacy_potion(ctx, material, form, durability, meta);
    }

    ctx.tables
        .lookup(LegacyTable::Items, &material.name, subkey)
        .map(CanonicalKey::from)
        .ok_or_else(|| LocaleError::not_found("Item", composite(material, durability)))
}

fn resolve_legacy_potion(
    ctx: ResolveContext<'_>,
    material: &Material,
    form: PotionForm,
    durability: i16,
    meta: Option<&ItemMeta>,
) -> LocaleResult<CanonicalKey> {
    if !ctx.profile.has_base_potion_data() {
        let subkey = (durability >= 0).then(|| durability.to_string());
        return ctx
            .tables
            .lookup(
                LegacyTable::PreCapabilityPotions,
                &material.name,
                subkey.as_deref(),
            )
            .map(CanonicalKey::from)
            .ok_or_else(|| LocaleError::not_found("Potion", composite(material, durability)));
    }

    let potion_type = meta
        .and_then(|m| m.potion.as_ref())
        .map(|p| p.potion_type.as_str())
        .unwrap_or(DEFAULT_POTION_TYPE);
    let table = match form {
        PotionForm::Plain => LegacyTable::Potions,
        PotionForm::Splash => LegacyTable::SplashPotions,
        PotionForm::Lingering => LegacyTable::LingeringPotions,
    };

    ctx.tables
        .get(table, potion_type)
        .map(CanonicalKey::from)
        .ok_or_else(|| LocaleError::not_found("Potion", format!("{material}:{potion_type}")))
}

fn resolve_modern(
    ctx: ResolveContext<'_>,
    material: &Material,
    meta: Option<&ItemMeta>,
) -> LocaleResult<CanonicalKey> {
    if material.is_ageable() {
        return Ok(CanonicalKey::new(format!(
            "block.minecraft.{}",
            material.name.to_ascii_lowercase()
        )));
    }

    let base = ctx
        .host
        .localization_name(material)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| LocaleError::QueryFailed(format!("material {material}")))?;

    match meta.and_then(|m| m.potion.as_ref()) {
        Some(potion) => Ok(CanonicalKey::new(format!(
            "{base}.effect.{}",
            potion_effect_name(&potion.potion_type)
        ))),
        None => Ok(CanonicalKey::new(base)),
    }
}

/// Lower-cased effect segment used by modern potion keys.
///
/// Host potion constants kept their pre-flattening names for years, while
/// the language files moved on; the rewrites bridge the two.
pub fn potion_effect_name(potion_type: &str) -> String {
    let lower = potion_type.trim().to_ascii_lowercase();
    let base = lower
        .strip_prefix("long_")
        .or_else(|| lower.strip_prefix("strong_"))
        .unwrap_or(&lower);

    match base {
        "regen" => "regeneration",
        "speed" => "swiftness",
        "jump" => "leaping",
        "instant_heal" => "healing",
        "instant_damage" => "harming",
        "uncraftable" => "empty",
        other => other,
    }
    .to_string()
}

fn composite(material: &Material, durability: i16) -> String {
    format!("{}.{}", material.name, durability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::testing::FakeRegistry;
    use crate::core::tables::LegacyKeyTables;
    use crate::core::version::VersionProfile;

    fn legacy_host() -> FakeRegistry {
        FakeRegistry::new().knowing(&["LINGERING_POTION"])
    }

    fn modern_host() -> FakeRegistry {
        FakeRegistry::modern()
            .with_item("DIAMOND_SWORD", "item.minecraft.diamond_sword")
            .with_item("POTION", "item.minecraft.potion")
            .with_item("SPLASH_POTION", "item.minecraft.splash_potion")
            .with_item("STONE", "block.minecraft.stone")
    }

    fn ctx<'a>(profile: &'a VersionProfile, host: &'a FakeRegistry) -> ResolveContext<'a> {
        ResolveContext {
            profile,
            tables: LegacyKeyTables::embedded().unwrap(),
            host,
        }
    }

    /// Split `NAME.SUB` into the arguments that should reproduce it.
    fn durability_for(identifier: &str) -> (&str, i16) {
        match identifier.split_once('.') {
            Some((name, sub)) => (name, sub.parse().unwrap()),
            None => (identifier, -1),
        }
    }

    #[test]
    fn legacy_block_table_round_trips() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let ctx = ctx(&profile, &host);
        for (identifier, expected) in ctx.tables.entries(LegacyTable::Blocks) {
            let (name, durability) = durability_for(identifier);
            let key = resolve(ctx, &Material::block(name), durability, None).unwrap();
            assert_eq!(key.as_str(), expected, "block {identifier}");
        }
    }

    #[test]
    fn legacy_item_table_round_trips() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let ctx = ctx(&profile, &host);
        for (identifier, expected) in ctx.tables.entries(LegacyTable::Items) {
            let (name, durability) = durability_for(identifier);
            let key = resolve(ctx, &Material::item(name), durability, None).unwrap();
            assert_eq!(key.as_str(), expected, "item {identifier}");
        }
    }

    #[test]
    fn legacy_potion_tables_round_trip() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.11.2", &host);
        let ctx = ctx(&profile, &host);
        let forms = [
            ("POTION", LegacyTable::Potions),
            ("SPLASH_POTION", LegacyTable::SplashPotions),
            ("LINGERING_POTION", LegacyTable::LingeringPotions),
        ];
        for (material, table) in forms {
            for (potion_type, expected) in ctx.tables.entries(table) {
                let meta = ItemMeta::potion(potion_type);
                let key = resolve(ctx, &Material::item(material), 0, Some(&meta)).unwrap();
                assert_eq!(key.as_str(), expected, "{material} {potion_type}");
            }
        }
    }

    #[test]
    fn pre_capability_potions_round_trip() {
        let host = FakeRegistry::new();
        let profile = VersionProfile::detect("1.8.8", &host);
        let ctx = ctx(&profile, &host);
        for (identifier, expected) in ctx.tables.entries(LegacyTable::PreCapabilityPotions) {
            let (name, durability) = durability_for(identifier);
            let key = resolve(ctx, &Material::item(name), durability, None).unwrap();
            assert_eq!(key.as_str(), expected, "potion {identifier}");
        }
    }

    #[test]
    fn legacy_block_with_zero_durability_uses_exact_entry() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let key = resolve(ctx(&profile, &host), &Material::block("WOOL"), 0, None).unwrap();
        assert_eq!(key.as_str(), "tile.cloth.white.name");
    }

    #[test]
    fn legacy_unknown_subkey_falls_back_to_bare_name() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let key = resolve(ctx(&profile, &host), &Material::item("DIAMOND_SWORD"), 1561, None).unwrap();
        assert_eq!(key.as_str(), "item.swordDiamond.name");
    }

    #[test]
    fn legacy_negative_durability_skips_subkeys() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let key = resolve(ctx(&profile, &host), &Material::item("COAL"), -1, None).unwrap();
        assert_eq!(key.as_str(), "item.coal.name");
    }

    #[test]
    fn legacy_missing_block_is_not_found() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let err = resolve(ctx(&profile, &host), &Material::block("AMETHYST_CLUSTER"), 0, None)
            .unwrap_err();
        assert!(matches!(
            err,
            LocaleError::NotFound { kind: "Block", ref identifier } if identifier == "AMETHYST_CLUSTER.0"
        ));
    }

    #[test]
    fn legacy_potion_without_meta_uses_host_default() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let key = resolve(ctx(&profile, &host), &Material::item("POTION"), 0, None).unwrap();
        assert_eq!(key.as_str(), "potion.effect.empty");
    }

    #[test]
    fn legacy_unknown_potion_type_is_not_found() {
        let host = legacy_host();
        let profile = VersionProfile::detect("1.12.2", &host);
        let meta = ItemMeta::potion("TURTLE_MASTER");
        let err = resolve(ctx(&profile, &host), &Material::item("POTION"), 0, Some(&meta))
            .unwrap_err();
        assert!(matches!(err, LocaleError::NotFound { kind: "Potion", .. }));
    }

    #[test]
    fn modern_ageable_block_is_derived() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.20.4", &host);
        let key = resolve(ctx(&profile, &host), &Material::ageable_block("WHEAT"), -1, None).unwrap();
        assert_eq!(key.as_str(), "block.minecraft.wheat");
    }

    #[test]
    fn modern_asks_the_host() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.20.4", &host);
        let ctx = ctx(&profile, &host);
        assert_eq!(
            resolve(ctx, &Material::item("DIAMOND_SWORD"), -1, None).unwrap().as_str(),
            "item.minecraft.diamond_sword"
        );
        assert_eq!(
            resolve(ctx, &Material::block("STONE"), -1, None).unwrap().as_str(),
            "block.minecraft.stone"
        );
    }

    #[test]
    fn modern_negative_durability_is_irrelevant() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.20.4", &host);
        let ctx = ctx(&profile, &host);
        let sword = Material::item("DIAMOND_SWORD");
        let baseline = resolve(ctx, &sword, -1, None).unwrap();
        for durability in [i16::MIN, -500, -2, -1] {
            assert_eq!(resolve(ctx, &sword, durability, None).unwrap(), baseline);
        }
    }

    #[test]
    fn modern_unknown_material_fails_query() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.20.4", &host);
        let err = resolve(ctx(&profile, &host), &Material::item("MISSINGNO"), -1, None).unwrap_err();
        assert!(matches!(err, LocaleError::QueryFailed(_)));
    }

    #[test]
    fn modern_potion_appends_rewritten_effect() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.16.5", &host);
        let ctx = ctx(&profile, &host);
        let cases = [
            ("POTION", "REGEN", "item.minecraft.potion.effect.regeneration"),
            ("POTION", "SPEED", "item.minecraft.potion.effect.swiftness"),
            ("POTION", "JUMP", "item.minecraft.potion.effect.leaping"),
            ("SPLASH_POTION", "INSTANT_HEAL", "item.minecraft.splash_potion.effect.healing"),
            ("POTION", "INSTANT_DAMAGE", "item.minecraft.potion.effect.harming"),
            ("POTION", "NIGHT_VISION", "item.minecraft.potion.effect.night_vision"),
            ("POTION", "LONG_SWIFTNESS", "item.minecraft.potion.effect.swiftness"),
        ];
        for (material, potion, expected) in cases {
            let meta = ItemMeta::potion(potion);
            let key = resolve(ctx, &Material::item(material), -1, Some(&meta)).unwrap();
            assert_eq!(key.as_str(), expected);
        }
    }

    #[test]
    fn effect_rewrites_match_whole_names_only() {
        assert_eq!(potion_effect_name("REGENERATION"), "regeneration");
        assert_eq!(potion_effect_name("STRONG_LEAPING"), "leaping");
        assert_eq!(potion_effect_name("UNCRAFTABLE"), "empty");
    }

    #[test]
    fn empty_material_is_invalid() {
        let host = modern_host();
        let profile = VersionProfile::detect("1.20.4", &host);
        let err = resolve(ctx(&profile, &host), &Material::item("  "), 0, None).unwrap_err();
        assert!(matches!(err, LocaleError::InvalidArgument(_)));
    }
}
