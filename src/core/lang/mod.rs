pub mod resources;
pub mod translations;

pub use resources::{available_locales, find_resources, list_children, render_tree, LANG_FOLDER};
pub use translations::{ReferenceTranslations, MISSING_TRANSLATION};
