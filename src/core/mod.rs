// ─── LocaleLib Core ───
// Version-aware localization keys and client-translated chat components.
//
// Architecture:
//   core/
//     version/  : Era + capability detection from the host version
//     model/    : Materials, item meta, enchantments as the host exposes them
//     tables/   : Embedded legacy key tables (optional on-disk overrides)
//     resolve/  : Material, entity and enchantment key resolvers
//     fragment/ : Template scanning, color detection, styled components
//     compose/  : LocaleManager: resolve + compose + dispatch
//     host/     : Host registry / dispatcher seams and offline backends
//     lang/     : Reference language files and jar resource utilities
//     state/    : Persisted settings

pub mod compose;
pub mod error;
pub mod fragment;
pub mod host;
pub mod lang;
pub mod model;
pub mod resolve;
pub mod state;
pub mod tables;
pub mod version;
