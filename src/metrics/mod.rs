//! Glyph metrics used to size text.
//!
//! Widths are looked up by standard glyph name (`"A"`, `"space"`, `"zero"`, …)
//! and expressed in thousandths of an em, the way AFM files express them.
//! Multiply by `font_size / 1000` to get points.

use std::collections::HashMap;

mod helvetica;
pub use helvetica::*;

/// A pure data provider: glyph name → horizontal advance width, in
/// thousandths of an em. [None] means the glyph is not known.
pub trait SizeProvider {
    fn advance_width(&self, glyph: &str) -> Option<f32>;
}

impl SizeProvider for HashMap<String, f32> {
    fn advance_width(&self, glyph: &str) -> Option<f32> {
        self.get(glyph).copied()
    }
}

// glyph names of the printable ASCII range, starting at U+0020
#[rustfmt::skip]
const ASCII_GLYPHS: [&str; 95] = [
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand", "quotesingle",
    "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "colon", "semicolon", "less", "equal", "greater", "question", "at",
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "bracketleft", "backslash", "bracketright", "asciicircum", "underscore", "grave",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    "braceleft", "bar", "braceright", "asciitilde",
];

#[rustfmt::skip]
const EXTRA_GLYPHS: &[(char, &str)] = &[
    ('\u{a0}', "space"),
    ('©', "copyright"), ('°', "degree"), ('§', "section"), ('¶', "paragraph"),
    ('£', "sterling"), ('¥', "yen"), ('€', "Euro"),
    ('À', "Agrave"), ('Ä', "Adieresis"), ('Ç', "Ccedilla"), ('É', "Eacute"), ('È', "Egrave"),
    ('Ñ', "Ntilde"), ('Ö', "Odieresis"), ('Ü', "Udieresis"), ('ß', "germandbls"),
    ('à', "agrave"), ('â', "acircumflex"), ('ä', "adieresis"), ('ç', "ccedilla"),
    ('é', "eacute"), ('è', "egrave"), ('ê', "ecircumflex"), ('ë', "edieresis"),
    ('î', "icircumflex"), ('ï', "idieresis"), ('ñ', "ntilde"), ('ô', "ocircumflex"),
    ('ö', "odieresis"), ('ù', "ugrave"), ('û', "ucircumflex"), ('ü', "udieresis"),
    ('–', "endash"), ('—', "emdash"), ('‘', "quoteleft"), ('’', "quoteright"),
    ('“', "quotedblleft"), ('”', "quotedblright"), ('•', "bullet"), ('…', "ellipsis"),
];

/// The standard glyph name for a character, if it has one
pub fn glyph_name(ch: char) -> Option<&'static str> {
    if (' '..='~').contains(&ch) {
        return Some(ASCII_GLYPHS[ch as usize - 0x20]);
    }
    EXTRA_GLYPHS
        .iter()
        .find(|&&(c, _)| c == ch)
        .map(|&(_, name)| name)
}

/// The character a standard glyph name stands for
pub fn char_for_glyph(glyph: &str) -> Option<char> {
    if let Some(i) = ASCII_GLYPHS.iter().position(|&name| name == glyph) {
        return char::from_u32(0x20 + i as u32);
    }
    EXTRA_GLYPHS
        .iter()
        .find(|&&(_, name)| name == glyph)
        .map(|&(c, _)| c)
}
