pub mod dispatch;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatch::{tellraw_command, ConsoleDispatcher, MessageDispatcher};
pub use registry::{HostRegistry, TranslationRegistry};
