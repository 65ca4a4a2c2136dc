// ─── Chat Colors ───
// Section-sign color directives → chat component color attribute.

use std::sync::LazyLock;

use regex::Regex;

/// `§x§R§R§G§G§B§B`
static RGB_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)§x((?:§[0-9a-f]){6})").expect("rgb sequence pattern is valid")
});

/// Single-character color codes plus reset. Formatting codes (`§k`-`§o`) are
/// not colors.
static LEGACY_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)§([0-9a-fr])").expect("legacy color pattern is valid"));

/// Named color for a legacy code character.
pub fn named_color(code: char) -> Option<&'static str> {
    let name = match code.to_ascii_lowercase() {
        '0' => "black",
        '1' => "dark_blue",
        '2' => "dark_green",
        '3' => "dark_aqua",
        '4' => "dark_red",
        '5' => "dark_purple",
        '6' => "gold",
        '7' => "gray",
        '8' => "dark_gray",
        '9' => "blue",
        'a' => "green",
        'b' => "aqua",
        'c' => "red",
        'd' => "light_purple",
        'e' => "yellow",
        'f' => "white",
        'r' => "reset",
        _ => return None,
    };
    Some(name)
}

/// The color in effect at the end of `text`.
///
/// The last extended RGB sequence wins over any legacy code; otherwise the
/// last legacy color code is used.
pub fn trailing_color(text: &str) -> Option<String> {
    if let Some(caps) = RGB_SEQUENCE.captures_iter(text).last() {
        let hex: String = caps[1]
            .chars()
            .filter(|c| *c != '§')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        return Some(format!("#{hex}"));
    }

    LEGACY_COLOR
        .captures_iter(text)
        .last()
        .and_then(|caps| caps[1].chars().next())
        .and_then(named_color)
        .map(str::to_string)
}
