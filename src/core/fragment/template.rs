// ─── Message Templates ───
// Single-pass split of a template into text and placeholder segments.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(item|enchantment|level|mob)>").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Item,
    Enchantment,
    Level,
    Mob,
}

impl Placeholder {
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Item => "<item>",
            Placeholder::Enchantment => "<enchantment>",
            Placeholder::Level => "<level>",
            Placeholder::Mob => "<mob>",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "item" => Some(Placeholder::Item),
            "enchantment" => Some(Placeholder::Enchantment),
            "level" => Some(Placeholder::Level),
            "mob" => Some(Placeholder::Mob),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// A placeholder and the byte offset where it starts.
    Placeholder(Placeholder, usize),
}

/// A template split once into its segments.
#[derive(Debug, Clone)]
pub struct MessageTemplate<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> MessageTemplate<'a> {
    pub fn parse(source: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for caps in PLACEHOLDER.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(placeholder) = Placeholder::from_name(name.as_str()) else {
                continue;
            };
            if whole.start() > cursor {
                segments.push(Segment::Text(&source[cursor..whole.start()]));
            }
            segments.push(Segment::Placeholder(placeholder, whole.start()));
            cursor = whole.end();
        }
        if cursor < source.len() {
            segments.push(Segment::Text(&source[cursor..]));
        }
        Self { source, segments }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Template text before `offset`.
    pub fn preceding(&self, offset: usize) -> &'a str {
        self.source.get(..offset).unwrap_or(self.source)
    }

    pub fn count(&self, placeholder: Placeholder) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder(p, _) if *p == placeholder))
            .count()
    }
}
