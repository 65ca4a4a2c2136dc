use serde::{Deserialize, Serialize};

use super::enchantment::Enchantments;

/// How the host classifies a material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Held/inventory-only item (swords, ingots, potions).
    Item,
    /// Placeable block.
    Block,
    /// Block whose state carries a growth-stage property (wheat, carrots).
    AgeableBlock,
}

/// A host material identifier, e.g. `DIAMOND_SWORD` or `STONE`.
///
/// Names are stored upper-cased, matching the host's enum constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
}

impl Material {
    pub fn new(name: &str, kind: MaterialKind) -> Self {
        Self {
            name: name.trim().to_ascii_uppercase(),
            kind,
        }
    }

    pub fn item(name: &str) -> Self {
        Self::new(name, MaterialKind::Item)
    }

    pub fn block(name: &str) -> Self {
        Self::new(name, MaterialKind::Block)
    }

    pub fn ageable_block(name: &str) -> Self {
        Self::new(name, MaterialKind::AgeableBlock)
    }

    pub fn is_block(&self) -> bool {
        matches!(self.kind, MaterialKind::Block | MaterialKind::AgeableBlock)
    }

    pub fn is_ageable(&self) -> bool {
        self.kind == MaterialKind::AgeableBlock
    }

    /// The potion bottle shape this material represents, if any.
    pub fn potion_form(&self) -> Option<PotionForm> {
        match self.name.as_str() {
            "POTION" => Some(PotionForm::Plain),
            "SPLASH_POTION" => Some(PotionForm::Splash),
            "LINGERING_POTION" => Some(PotionForm::Lingering),
            _ => None,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotionForm {
    Plain,
    Splash,
    Lingering,
}

/// Base potion data attached to a potion item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotionData {
    /// Host potion type constant, e.g. `REGEN`, `SPEED`, `LONG_SWIFTNESS`.
    pub potion_type: String,
}

impl PotionData {
    pub fn new(potion_type: &str) -> Self {
        Self {
            potion_type: potion_type.trim().to_ascii_uppercase(),
        }
    }
}

/// The subset of item metadata that influences localization keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemMeta {
    #[serde(default)]
    pub potion: Option<PotionData>,
    /// Enchantments stored in an enchanted book, which replace the item's own.
    #[serde(default)]
    pub stored_enchantments: Option<Enchantments>,
}

impl ItemMeta {
    pub fn potion(potion_type: &str) -> Self {
        Self {
            potion: Some(PotionData::new(potion_type)),
            stored_enchantments: None,
        }
    }

    pub fn enchanted_book(stored: Enchantments) -> Self {
        Self {
            potion: None,
            stored_enchantments: Some(stored),
        }
    }
}
