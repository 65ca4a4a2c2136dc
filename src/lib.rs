pub mod commands;
pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::compose::LocaleManager;
pub use crate::core::error::{LocaleError, LocaleResult};
pub use crate::core::host::{ConsoleDispatcher, HostRegistry, MessageDispatcher, TranslationRegistry};
pub use crate::core::lang::ReferenceTranslations;
pub use crate::core::model::{Enchantment, Enchantments, ItemMeta, Material, MaterialKind};
pub use crate::core::resolve::CanonicalKey;
pub use crate::core::tables::LegacyKeyTables;
pub use crate::core::version::{Era, VersionProfile};

/// Filter used when neither `RUST_LOG` nor the settings give one.
pub const DEFAULT_LOG_FILTER: &str = "info,localelib=debug";

/// Initialize structured logging. `RUST_LOG` wins over `default_filter`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
