pub mod enchantment;
pub mod material;

pub use enchantment::{Enchantment, Enchantments};
pub use material::{ItemMeta, Material, MaterialKind, PotionData, PotionForm};
