use serde::{Deserialize, Serialize};

/// Vanilla enchantments as `(namespaced key, legacy host name)` pairs.
const VANILLA: &[(&str, &str)] = &[
    ("minecraft:protection", "PROTECTION_ENVIRONMENTAL"),
    ("minecraft:fire_protection", "PROTECTION_FIRE"),
    ("minecraft:feather_falling", "PROTECTION_FALL"),
    ("minecraft:blast_protection", "PROTECTION_EXPLOSIONS"),
    ("minecraft:projectile_protection", "PROTECTION_PROJECTILE"),
    ("minecraft:respiration", "OXYGEN"),
    ("minecraft:aqua_affinity", "WATER_WORKER"),
    ("minecraft:thorns", "THORNS"),
    ("minecraft:depth_strider", "DEPTH_STRIDER"),
    ("minecraft:frost_walker", "FROST_WALKER"),
    ("minecraft:binding_curse", "BINDING_CURSE"),
    ("minecraft:sharpness", "DAMAGE_ALL"),
    ("minecraft:smite", "DAMAGE_UNDEAD"),
    ("minecraft:bane_of_arthropods", "DAMAGE_ARTHROPODS"),
    ("minecraft:knockback", "KNOCKBACK"),
    ("minecraft:fire_aspect", "FIRE_ASPECT"),
    ("minecraft:looting", "LOOT_BONUS_MOBS"),
    ("minecraft:sweeping", "SWEEPING_EDGE"),
    ("minecraft:efficiency", "DIG_SPEED"),
    ("minecraft:silk_touch", "SILK_TOUCH"),
    ("minecraft:unbreaking", "DURABILITY"),
    ("minecraft:fortune", "LOOT_BONUS_BLOCKS"),
    ("minecraft:power", "ARROW_DAMAGE"),
    ("minecraft:punch", "ARROW_KNOCKBACK"),
    ("minecraft:flame", "ARROW_FIRE"),
    ("minecraft:infinity", "ARROW_INFINITE"),
    ("minecraft:luck_of_the_sea", "LUCK"),
    ("minecraft:lure", "LURE"),
    ("minecraft:mending", "MENDING"),
    ("minecraft:vanishing_curse", "VANISHING_CURSE"),
    ("minecraft:loyalty", "LOYALTY"),
    ("minecraft:impaling", "IMPALING"),
    ("minecraft:riptide", "RIPTIDE"),
    ("minecraft:channeling", "CHANNELING"),
    ("minecraft:multishot", "MULTISHOT"),
    ("minecraft:quick_charge", "QUICK_CHARGE"),
    ("minecraft:piercing", "PIERCING"),
    ("minecraft:soul_speed", "SOUL_SPEED"),
    ("minecraft:swift_sneak", "SWIFT_SNEAK"),
];

/// An enchantment as the host exposes it: a namespaced key plus the
/// legacy constant name used before the flattening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Enchantment {
    /// Namespaced identifier, e.g. `minecraft:sharpness`.
    pub key: String,
    /// Legacy constant, e.g. `DAMAGE_ALL`.
    pub legacy_name: String,
}

impl Enchantment {
    pub fn new(key: &str, legacy_name: &str) -> Self {
        Self {
            key: key.trim().to_ascii_lowercase(),
            legacy_name: legacy_name.trim().to_ascii_uppercase(),
        }
    }

    /// Look up a vanilla enchantment by namespaced key, bare key or legacy name.
    pub fn vanilla(name: &str) -> Option<Self> {
        let wanted = name.trim();
        VANILLA
            .iter()
            .find(|(key, legacy)| {
                key.eq_ignore_ascii_case(wanted)
                    || key
                        .strip_prefix("minecraft:")
                        .is_some_and(|bare| bare.eq_ignore_ascii_case(wanted))
                    || legacy.eq_ignore_ascii_case(wanted)
            })
            .map(|(key, legacy)| Self::new(key, legacy))
    }

    /// The part of the namespaced key after the first `:`.
    pub fn key_suffix(&self) -> &str {
        match self.key.split_once(':') {
            Some((_, suffix)) => suffix,
            None => &self.key,
        }
    }
}

/// Insertion-ordered enchantment → level mapping.
///
/// Order matters: the k-th `<enchantment>` placeholder in a template takes
/// the k-th entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enchantments(Vec<(Enchantment, u32)>);

impl Enchantments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a level. Updating keeps the original position.
    pub fn insert(&mut self, enchantment: Enchantment, level: u32) {
        match self.0.iter_mut().find(|(e, _)| *e == enchantment) {
            Some(entry) => entry.1 = level,
            None => self.0.push((enchantment, level)),
        }
    }

    pub fn with(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.insert(enchantment, level);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Enchantment, u32)> {
        self.0.iter().map(|(e, l)| (e, *l))
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|(_, l)| *l)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Enchantment, u32)> for Enchantments {
    fn from_iter<T: IntoIterator<Item = (Enchantment, u32)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (e, l) in iter {
            out.insert(e, l);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_lookup_accepts_all_spellings() {
        let by_key = Enchantment::vanilla("minecraft:sharpness").unwrap();
        let by_bare = Enchantment::vanilla("Sharpness").unwrap();
        let by_legacy = Enchantment::vanilla("damage_all").unwrap();
        assert_eq!(by_key, by_bare);
        assert_eq!(by_key, by_legacy);
        assert_eq!(by_key.legacy_name, "DAMAGE_ALL");
        assert!(Enchantment::vanilla("flight").is_none());
    }

    #[test]
    fn key_suffix_strips_namespace() {
        assert_eq!(Enchantment::new("minecraft:unbreaking", "DURABILITY").key_suffix(), "unbreaking");
        assert_eq!(Enchantment::new("custom", "CUSTOM").key_suffix(), "custom");
    }

    #[test]
    fn insert_keeps_first_position_on_update() {
        let sharp = Enchantment::vanilla("sharpness").unwrap();
        let unb = Enchantment::vanilla("unbreaking").unwrap();
        let mut map = Enchantments::new().with(sharp.clone(), 1).with(unb.clone(), 3);
        map.insert(sharp.clone(), 5);

        let entries: Vec<_> = map.iter().map(|(e, l)| (e.clone(), l)).collect();
        assert_eq!(entries, vec![(sharp, 5), (unb, 3)]);
        assert_eq!(map.len(), 2);
    }
}
