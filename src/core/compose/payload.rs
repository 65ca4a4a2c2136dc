use serde::Serialize;

use crate::core::fragment::{MessageTemplate, Placeholder, Segment, StyledFragment};
use crate::core::resolve::CanonicalKey;

/// Keys available to fill a template. A placeholder with no key left stays
/// literal text.
#[derive(Debug, Default)]
pub struct Fills<'k> {
    pub item: Option<&'k CanonicalKey>,
    pub mob: Option<&'k CanonicalKey>,
    /// Key of the k-th enchantment.
    pub enchantments: Vec<&'k CanonicalKey>,
    /// Level key of the k-th enchantment.
    pub levels: Vec<CanonicalKey>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text(String),
    Component(StyledFragment),
}

/// Rebuild `template` as a chat component array: text spans alternating
/// with translated components, always opening and closing with text.
pub fn build(template: &MessageTemplate<'_>, fills: &Fills<'_>) -> String {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut enchantment_index = 0;
    let mut level_index = 0;

    for segment in template.segments() {
        let (placeholder, offset) = match *segment {
            Segment::Text(span) => {
                text.push_str(span);
                continue;
            }
            Segment::Placeholder(placeholder, offset) => (placeholder, offset),
        };

        let key = match placeholder {
            Placeholder::Item => fills.item,
            Placeholder::Mob => fills.mob,
            Placeholder::Enchantment => {
                enchantment_index += 1;
                fills.enchantments.get(enchantment_index - 1).copied()
            }
            Placeholder::Level => {
                level_index += 1;
                fills.levels.get(level_index - 1)
            }
        };

        match key {
            None => text.push_str(placeholder.token()),
            Some(key) if key.is_empty() => {}
            Some(key) => {
                let fragment = StyledFragment::style(template.preceding(offset), key.clone());
                parts.push(Part::Text(std::mem::take(&mut text)));
                parts.push(Part::Component(fragment));
            }
        }
    }
    parts.push(Part::Text(text));

    serde_json::to_string(&parts).unwrap_or_else(|_| "[\"\"]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_placeholder_is_wrapped_in_empty_text() {
        let key = CanonicalKey::new("item.minecraft.diamond_sword");
        let template = MessageTemplate::parse("<item>");
        let fills = Fills {
            item: Some(&key),
            ..Fills::default()
        };
        assert_eq!(
            build(&template, &fills),
            r#"["",{"translate":"item.minecraft.diamond_sword"},""]"#
        );
    }

    #[test]
    fn surplus_placeholders_stay_literal() {
        let sharpness = CanonicalKey::new("enchantment.minecraft.sharpness");
        let template = MessageTemplate::parse("<enchantment> <enchantment> <level>");
        let fills = Fills {
            enchantments: vec![&sharpness],
            ..Fills::default()
        };
        assert_eq!(
            build(&template, &fills),
            r#"["",{"translate":"enchantment.minecraft.sharpness"}," <enchantment> <level>"]"#
        );
    }

    #[test]
    fn empty_key_renders_nothing() {
        let empty = CanonicalKey::empty();
        let template = MessageTemplate::parse("A <mob> swims by");
        let fills = Fills {
            mob: Some(&empty),
            ..Fills::default()
        };
        assert_eq!(build(&template, &fills), r#"["A  swims by"]"#);
    }

    #[test]
    fn text_is_json_escaped() {
        let template = MessageTemplate::parse("say \"hi\"\\");
        assert_eq!(build(&template, &Fills::default()), r#"["say \"hi\"\\"]"#);
    }
}
