pub mod enchantment;
pub mod entity;
pub mod material;

use serde::Serialize;

use crate::core::host::HostRegistry;
use crate::core::tables::LegacyKeyTables;
use crate::core::version::VersionProfile;

pub use enchantment::EnchantmentKeys;

/// A locale-file lookup key such as `item.minecraft.diamond_sword`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key that renders nothing.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Everything a resolver reads. Borrowed, never mutated.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub profile: &'a VersionProfile,
    pub tables: &'a LegacyKeyTables,
    pub host: &'a dyn HostRegistry,
}
