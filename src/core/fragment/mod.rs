// ─── Fragments ───
// Translated, independently colored components spliced into chat messages.

pub mod color;
pub mod template;

use serde::Serialize;

use crate::core::resolve::CanonicalKey;

pub use color::{named_color, trailing_color};
pub use template::{MessageTemplate, Placeholder, Segment};

/// A `{"translate": ..}` component with an optional color.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StyledFragment {
    #[serde(rename = "translate")]
    pub key: CanonicalKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StyledFragment {
    /// Fragment for `key`, colored by whatever `preceding` text leaves active.
    pub fn style(preceding: &str, key: CanonicalKey) -> Self {
        Self {
            key,
            color: trailing_color(preceding),
        }
    }

    pub fn to_component(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Text form that closes the current string span, inserts the component
    /// and reopens a string span: `",{"translate":"..."},"`.
    pub fn to_splice(&self) -> String {
        let component = serde_json::to_string(self).unwrap_or_default();
        format!("\",{component},\"")
    }
}

/// Style `key` by the text preceding the first `token` in `template`.
pub fn assemble(template: &str, key: &CanonicalKey, token: &str) -> StyledFragment {
    let preceding = match template.find(token) {
        Some(index) => &template[..index],
        None => template,
    };
    StyledFragment::style(preceding, key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_fragment_has_no_color_attribute() {
        let key = CanonicalKey::new("item.minecraft.diamond_sword");
        let fragment = assemble("<item>", &key, "<item>");
        assert_eq!(fragment.color, None);
        assert_eq!(
            fragment.to_splice(),
            r#"",{"translate":"item.minecraft.diamond_sword"},""#
        );
    }

    #[test]
    fn color_comes_from_text_before_first_token() {
        let key = CanonicalKey::new("entity.minecraft.zombie");
        let fragment = assemble("§aKilled §c<mob> §9<mob>", &key, "<mob>");
        assert_eq!(fragment.color.as_deref(), Some("red"));
        assert_eq!(
            fragment.to_component(),
            serde_json::json!({"translate": "entity.minecraft.zombie", "color": "red"})
        );
    }

    #[test]
    fn rgb_color_is_emitted_as_hex() {
        let key = CanonicalKey::new("enchantment.level.2");
        let fragment = assemble("§c§x§0§0§f§f§0§0<level>", &key, "<level>");
        assert_eq!(
            fragment.to_splice(),
            r##"",{"translate":"enchantment.level.2","color":"#00FF00"},""##
        );
    }
}
