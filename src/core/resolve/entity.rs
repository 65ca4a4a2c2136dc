// ─── Entity Keys ───
// Entity type (+variant) → canonical key, per era.

use tracing::debug;

use super::{CanonicalKey, ResolveContext};
use crate::core::error::{LocaleError, LocaleResult};
use crate::core::tables::LegacyTable;

const LEGACY_PROFESSIONS: &[&str] = &[
    "FARMER",
    "LIBRARIAN",
    "PRIEST",
    "BLACKSMITH",
    "BUTCHER",
    "NITWIT",
];

const MODERN_PROFESSIONS: &[&str] = &[
    "NONE",
    "ARMORER",
    "BUTCHER",
    "CARTOGRAPHER",
    "CLERIC",
    "FARMER",
    "FISHERMAN",
    "FLETCHER",
    "LEATHERWORKER",
    "LIBRARIAN",
    "MASON",
    "NITWIT",
    "SHEPHERD",
    "TOOLSMITH",
    "WEAPONSMITH",
];

const OCELOT_TYPES: &[&str] = &["WILD_OCELOT", "BLACK_CAT", "RED_CAT", "SIAMESE_CAT"];

const KILLER_BUNNY: &str = "THE_KILLER_BUNNY";

const TROPICAL_FISH_PATTERNS: &[&str] = &[
    "KOB",
    "SUNSTREAK",
    "SNOOPER",
    "DASHER",
    "BRINELY",
    "SPOTTY",
    "FLOPPER",
    "STRIPEY",
    "GLITTER",
    "BLOCKFISH",
    "BETTY",
    "CLAYFISH",
];

/// Number of predefined tropical fish variants the client names.
const TROPICAL_FISH_PREDEFINED: u32 = 22;

/// Types whose modern key no longer matches the host constant.
const MODERN_RENAMES: &[(&str, &str)] = &[
    ("MUSHROOM_COW", "mooshroom"),
    ("SNOWMAN", "snow_golem"),
    ("PIG_ZOMBIE", "zombie_pigman"),
];

/// Resolve the key a client uses to name `entity_type`.
///
/// `extra` discriminates sub-variants: a villager profession, an ocelot
/// or rabbit type, or a tropical fish pattern / predefined index. It is
/// ignored for every other type.
pub fn resolve(
    ctx: ResolveContext<'_>,
    entity_type: &str,
    extra: Option<&str>,
) -> LocaleResult<CanonicalKey> {
    let entity_type = entity_type.trim().to_ascii_uppercase();
    if entity_type.is_empty() {
        return Err(LocaleError::InvalidArgument(
            "entity type cannot be empty".into(),
        ));
    }
    let extra = extra.map(str::trim).filter(|e| !e.is_empty());

    let key = if ctx.profile.is_legacy() {
        resolve_legacy(ctx, &entity_type, extra)?
    } else {
        resolve_modern(&entity_type, extra)
    };
    debug!("Entity {}:{:?} -> {:?}", entity_type, extra, key.as_str());
    Ok(key)
}

fn resolve_legacy(
    ctx: ResolveContext<'_>,
    entity_type: &str,
    extra: Option<&str>,
) -> LocaleResult<CanonicalKey> {
    let variant = extra
        .map(str::to_ascii_uppercase)
        .filter(|v| legacy_variant_is_valid(entity_type, v));

    let identifier = match &variant {
        Some(v) => format!("{entity_type}.{v}"),
        None => entity_type.to_string(),
    };

    ctx.tables
        .get(LegacyTable::Entities, &identifier)
        .map(CanonicalKey::from)
        .ok_or_else(|| LocaleError::not_found("Entity", identifier))
}

fn legacy_variant_is_valid(entity_type: &str, variant: &str) -> bool {
    match entity_type {
        "VILLAGER" => LEGACY_PROFESSIONS.contains(&variant),
        "OCELOT" => OCELOT_TYPES.contains(&variant),
        "RABBIT" => variant == KILLER_BUNNY,
        _ => false,
    }
}

fn resolve_modern(entity_type: &str, extra: Option<&str>) -> CanonicalKey {
    if let Some((_, renamed)) = MODERN_RENAMES.iter().find(|(from, _)| *from == entity_type) {
        return CanonicalKey::new(format!("entity.minecraft.{renamed}"));
    }

    let variant = extra.map(str::to_ascii_uppercase);
    match (entity_type, variant.as_deref()) {
        ("VILLAGER", Some(profession)) if MODERN_PROFESSIONS.contains(&profession) => {
            CanonicalKey::new(format!(
                "entity.minecraft.villager.{}",
                profession.to_ascii_lowercase()
            ))
        }
        ("RABBIT", Some(KILLER_BUNNY)) => CanonicalKey::new("entity.minecraft.killer_bunny"),
        ("TROPICAL_FISH", Some(variant)) => tropical_fish_key(variant),
        _ => CanonicalKey::new(format!(
            "entity.minecraft.{}",
            entity_type.to_ascii_lowercase()
        )),
    }
}

/// Named pattern or predefined index; anything else renders nothing.
fn tropical_fish_key(variant: &str) -> CanonicalKey {
    if TROPICAL_FISH_PATTERNS.contains(&variant) {
        return CanonicalKey::new(format!(
            "entity.minecraft.tropical_fish.type.{}",
            variant.to_ascii_lowercase()
        ));
    }
    match variant.parse::<u32>() {
        Ok(index) if index < TROPICAL_FISH_PREDEFINED => CanonicalKey::new(format!(
            "entity.minecraft.tropical_fish.predefined.{index}"
        )),
        _ => CanonicalKey::empty(),
    }
}
