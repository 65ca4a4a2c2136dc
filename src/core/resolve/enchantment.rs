// ─── Enchantment Keys ───

use serde::Serialize;
use tracing::debug;

use super::CanonicalKey;
use crate::core::model::{Enchantment, Enchantments};
use crate::core::version::VersionProfile;

/// Resolved enchantment and level keys, both in first-appearance order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EnchantmentKeys {
    pub enchantments: Vec<(Enchantment, CanonicalKey)>,
    pub levels: Vec<(u32, CanonicalKey)>,
}

impl EnchantmentKeys {
    pub fn is_empty(&self) -> bool {
        self.enchantments.is_empty() && self.levels.is_empty()
    }

    /// Key of the k-th enchantment.
    pub fn enchantment_key(&self, index: usize) -> Option<&CanonicalKey> {
        self.enchantments.get(index).map(|(_, key)| key)
    }
}

pub fn resolve_all(profile: &VersionProfile, enchantments: &Enchantments) -> EnchantmentKeys {
    EnchantmentKeys {
        enchantments: resolve_enchantment_keys(profile, enchantments),
        levels: resolve_level_keys(enchantments),
    }
}

pub fn resolve_enchantment_keys(
    profile: &VersionProfile,
    enchantments: &Enchantments,
) -> Vec<(Enchantment, CanonicalKey)> {
    enchantments
        .iter()
        .map(|(enchantment, _)| {
            let key = enchantment_key(profile, enchantment);
            debug!("Enchantment {} -> {}", enchantment.key, key);
            (enchantment.clone(), key)
        })
        .collect()
}

/// One key per distinct level.
pub fn resolve_level_keys(enchantments: &Enchantments) -> Vec<(u32, CanonicalKey)> {
    let mut levels: Vec<(u32, CanonicalKey)> = Vec::new();
    for level in enchantments.levels() {
        if !levels.iter().any(|(seen, _)| *seen == level) {
            levels.push((level, level_key(level)));
        }
    }
    levels
}

pub fn enchantment_key(profile: &VersionProfile, enchantment: &Enchantment) -> CanonicalKey {
    if profile.is_legacy() {
        let name = enchantment
            .legacy_name
            .to_ascii_lowercase()
            .replace('_', ".")
            .replace("environmental", "all")
            .replace("protection", "protect");
        CanonicalKey::new(format!("enchantment.{name}"))
    } else {
        CanonicalKey::new(format!("enchantment.minecraft.{}", enchantment.key_suffix()))
    }
}

pub fn level_key(level: u32) -> CanonicalKey {
    CanonicalKey::new(format!("enchantment.level.{level}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::testing::FakeRegistry;

    fn profile(version: &str) -> VersionProfile {
        VersionProfile::detect(version, &FakeRegistry::new())
    }

    fn vanilla(name: &str) -> Enchantment {
        Enchantment::vanilla(name).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_mappings() {
        let keys = resolve_all(&profile("1.20.4"), &Enchantments::new());
        assert!(keys.enchantments.is_empty());
        assert!(keys.levels.is_empty());
        assert!(keys.is_empty());
    }

    #[test]
    fn legacy_names_are_rewritten() {
        let legacy = profile("1.8.9");
        let cases = [
            ("DAMAGE_ALL", "enchantment.damage.all"),
            ("PROTECTION_ENVIRONMENTAL", "enchantment.protect.all"),
            ("PROTECTION_FIRE", "enchantment.protect.fire"),
            ("DURABILITY", "enchantment.durability"),
            ("LOOT_BONUS_BLOCKS", "enchantment.loot.bonus.blocks"),
        ];
        for (legacy_name, expected) in cases {
            let key = enchantment_key(&legacy, &vanilla(legacy_name));
            assert_eq!(key.as_str(), expected, "{legacy_name}");
        }
    }

    #[test]
    fn modern_uses_namespaced_suffix() {
        let modern = profile("1.20.4");
        assert_eq!(
            enchantment_key(&modern, &vanilla("sharpness")).as_str(),
            "enchantment.minecraft.sharpness"
        );
        let custom = Enchantment::new("bare_key", "CUSTOM");
        assert_eq!(
            enchantment_key(&modern, &custom).as_str(),
            "enchantment.minecraft.bare_key"
        );
    }

    #[test]
    fn levels_are_distinct_in_first_appearance_order() {
        let enchantments = Enchantments::new()
            .with(vanilla("sharpness"), 5)
            .with(vanilla("unbreaking"), 3)
            .with(vanilla("looting"), 5)
            .with(vanilla("mending"), 1);
        let levels: Vec<_> = resolve_level_keys(&enchantments)
            .into_iter()
            .map(|(level, key)| (level, key.into_string()))
            .collect();
        assert_eq!(
            levels,
            vec![
                (5, "enchantment.level.5".to_string()),
                (3, "enchantment.level.3".to_string()),
                (1, "enchantment.level.1".to_string()),
            ]
        );
    }

    #[test]
    fn enchantment_keys_keep_iteration_order() {
        let enchantments = Enchantments::new()
            .with(vanilla("unbreaking"), 3)
            .with(vanilla("sharpness"), 5);
        let keys = resolve_all(&profile("1.20.4"), &enchantments);
        assert_eq!(
            keys.enchantment_key(0).map(CanonicalKey::as_str),
            Some("enchantment.minecraft.unbreaking")
        );
        assert_eq!(
            keys.enchantment_key(1).map(CanonicalKey::as_str),
            Some("enchantment.minecraft.sharpness")
        );
        assert_eq!(keys.enchantment_key(2), None);
    }
}
