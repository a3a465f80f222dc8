//! Bedrock `§` formatting codes offered by the toolbar.

/// What a format code does to the following text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Text colour, as a CSS hex colour.
    Color(&'static str),
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCode {
    /// The literal inserted into text, e.g. `§a`.
    pub code: &'static str,
    pub name: &'static str,
    pub style: FormatStyle,
}

const fn color(code: &'static str, name: &'static str, hex: &'static str) -> FormatCode {
    FormatCode {
        code,
        name,
        style: FormatStyle::Color(hex),
    }
}

const fn style(code: &'static str, name: &'static str, style: FormatStyle) -> FormatCode {
    FormatCode { code, name, style }
}

pub const FORMAT_CODES: &[FormatCode] = &[
    color("§0", "Black", "#000000"),
    color("§1", "Dark Blue", "#0000AA"),
    color("§2", "Dark Green", "#00AA00"),
    color("§3", "Dark Aqua", "#00AAAA"),
    color("§4", "Dark Red", "#AA0000"),
    color("§5", "Dark Purple", "#AA00AA"),
    color("§6", "Gold", "#FFAA00"),
    color("§7", "Gray", "#AAAAAA"),
    color("§8", "Dark Gray", "#555555"),
    color("§9", "Blue", "#5555FF"),
    color("§a", "Green", "#55FF55"),
    color("§b", "Aqua", "#55FFFF"),
    color("§c", "Red", "#FF5555"),
    color("§d", "Light Purple", "#FF55FF"),
    color("§e", "Yellow", "#FFFF55"),
    color("§f", "White", "#FFFFFF"),
    style("§k", "Obfuscated", FormatStyle::Obfuscated),
    style("§l", "Bold", FormatStyle::Bold),
    style("§m", "Strikethrough", FormatStyle::Strikethrough),
    style("§n", "Underline", FormatStyle::Underline),
    style("§o", "Italic", FormatStyle::Italic),
    style("§r", "Reset", FormatStyle::Reset),
];

/// Look up a code by its literal (`§a`) or bare letter (`a`).
pub fn find_format_code(code: &str) -> Option<&'static FormatCode> {
    let code = code.trim();
    FORMAT_CODES
        .iter()
        .find(|fc| fc.code == code || fc.code.strip_prefix('§') == Some(code))
}
