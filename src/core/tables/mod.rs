pub mod legacy;

pub use legacy::{LegacyKeyTables, LegacyTable};
