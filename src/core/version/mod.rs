pub mod profile;

pub use profile::{Era, VersionProfile, LEGACY_RELEASES};
