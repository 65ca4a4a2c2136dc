use tracing::debug;

use crate::core::lang::ReferenceTranslations;
use crate::core::model::Material;

/// The host's material registry, as far as localization needs it.
///
/// Implementations wrap whatever the running server exposes. The engine
/// only ever asks two things: "does this identifier exist?" (used for
/// capability probes) and "what localization name does the internal item
/// for this material report?".
pub trait HostRegistry: Send + Sync {
    /// Whether the host's registry contains a material constant named `name`.
    fn knows_material(&self, name: &str) -> bool;

    /// Localization key reported by the host's internal representation of
    /// `material`, or `None` when the host has no such representation.
    fn localization_name(&self, material: &Material) -> Option<String>;
}

/// Offline registry backed by a loaded reference language table.
///
/// A material is known when the language table carries an item or block
/// entry for it, which matches what the host would report for vanilla
/// content of the same release. Both the flattened `item.minecraft.<name>`
/// spelling and the `.lang` era `item.<name>.name` / `tile.<name>.name`
/// spellings (snake or camel case) count.
pub struct TranslationRegistry<'a> {
    translations: &'a ReferenceTranslations,
}

impl<'a> TranslationRegistry<'a> {
    pub fn new(translations: &'a ReferenceTranslations) -> Self {
        Self { translations }
    }

    fn candidates(name: &str) -> [String; 2] {
        let lower = name.trim().to_ascii_lowercase();
        [
            format!("item.minecraft.{lower}"),
            format!("block.minecraft.{lower}"),
        ]
    }

    fn legacy_candidates(name: &str) -> Vec<String> {
        let lower = name.trim().to_ascii_lowercase();
        let camel = camel_case(&lower);
        let mut keys = vec![format!("item.{lower}.name"), format!("tile.{lower}.name")];
        if camel != lower {
            keys.push(format!("item.{camel}.name"));
            keys.push(format!("tile.{camel}.name"));
        }
        keys
    }
}

/// `lingering_potion` -> `lingeringPotion`.
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl HostRegistry for TranslationRegistry<'_> {
    fn knows_material(&self, name: &str) -> bool {
        Self::candidates(name)
            .iter()
            .chain(Self::legacy_candidates(name).iter())
            .any(|key| self.translations.contains(key))
    }

    fn localization_name(&self, material: &Material) -> Option<String> {
        let found = Self::candidates(&material.name)
            .into_iter()
            .find(|key| self.translations.contains(key));
        debug!("Offline registry lookup {} -> {:?}", material, found);
        found
    }
}
