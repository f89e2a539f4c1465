//! Advance widths of the standard Helvetica face, in thousandths of an em.

use super::SizeProvider;

/// The built-in Helvetica metrics. Every PDF reader ships this face, so headings
/// can be sized without loading a font file.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Helvetica;

impl SizeProvider for Helvetica {
    fn advance_width(&self, glyph: &str) -> Option<f32> {
        WIDTHS
            .binary_search_by(|(name, _)| name.cmp(&glyph))
            .ok()
            .map(|i| WIDTHS[i].1 as f32)
    }
}

// sorted by glyph name for binary search
#[rustfmt::skip]
static WIDTHS: &[(&str, u16)] = &[
    ("A", 667),
    ("AE", 1000),
    ("Aacute", 667),
    ("Abreve", 667),
    ("Acircumflex", 667),
    ("Adieresis", 667),
    ("Agrave", 667),
    ("Amacron", 667),
    ("Aogonek", 667),
    ("Aring", 667),
    ("Atilde", 667),
    ("B", 667),
    ("C", 722),
    ("Cacute", 722),
    ("Ccaron", 722),
    ("Ccedilla", 722),
    ("D", 722),
    ("Dcaron", 722),
    ("Dcroat", 722),
    ("Delta", 612),
    ("E", 667),
    ("Eacute", 667),
    ("Ecaron", 667),
    ("Ecircumflex", 667),
    ("Edieresis", 667),
    ("Edotaccent", 667),
    ("Egrave", 667),
    ("Emacron", 667),
    ("Eogonek", 667),
    ("Eth", 722),
    ("Euro", 556),
    ("F", 611),
    ("G", 778),
    ("Gbreve", 778),
    ("Gcommaaccent", 778),
    ("H", 722),
    ("I", 278),
    ("Iacute", 278),
    ("Icircumflex", 278),
    ("Idieresis", 278),
    ("Idotaccent", 278),
    ("Igrave", 278),
    ("Imacron", 278),
    ("Iogonek", 278),
    ("J", 500),
    ("K", 667),
    ("Kcommaaccent", 667),
    ("L", 556),
    ("Lacute", 556),
    ("Lcaron", 556),
    ("Lcommaaccent", 556),
    ("Lslash", 556),
    ("M", 833),
    ("N", 722),
    ("Nacute", 722),
    ("Ncaron", 722),
    ("Ncommaaccent", 722),
    ("Ntilde", 722),
    ("O", 778),
    ("OE", 1000),
    ("Oacute", 778),
    ("Ocircumflex", 778),
    ("Odieresis", 778),
    ("Ograve", 778),
    ("Ohungarumlaut", 778),
    ("Omacron", 778),
    ("Oslash", 778),
    ("Otilde", 778),
    ("P", 667),
    ("Q", 778),
    ("R", 722),
    ("Racute", 722),
    ("Rcaron", 722),
    ("Rcommaaccent", 722),
    ("S", 667),
    ("Sacute", 667),
    ("Scaron", 667),
    ("Scedilla", 667),
    ("Scommaaccent", 667),
    ("T", 611),
    ("Tcaron", 611),
    ("Tcommaaccent", 611),
    ("Thorn", 667),
    ("U", 722),
    ("Uacute", 722),
    ("Ucircumflex", 722),
    ("Udieresis", 722),
    ("Ugrave", 722),
    ("Uhungarumlaut", 722),
    ("Umacron", 722),
    ("Uogonek", 722),
    ("Uring", 722),
    ("V", 667),
    ("W", 944),
    ("X", 667),
    ("Y", 667),
    ("Yacute", 667),
    ("Ydieresis", 667),
    ("Z", 611),
    ("Zacute", 611),
    ("Zcaron", 611),
    ("Zdotaccent", 611),
    ("a", 556),
    ("aacute", 556),
    ("abreve", 556),
    ("acircumflex", 556),
    ("acute", 333),
    ("adieresis", 556),
    ("ae", 889),
    ("agrave", 556),
    ("amacron", 556),
    ("ampersand", 667),
    ("aogonek", 556),
    ("aring", 556),
    ("asciicircum", 469),
    ("asciitilde", 584),
    ("asterisk", 389),
    ("at", 1015),
    ("atilde", 556),
    ("b", 556),
    ("backslash", 278),
    ("bar", 260),
    ("braceleft", 334),
    ("braceright", 334),
    ("bracketleft", 278),
    ("bracketright", 278),
    ("breve", 333),
    ("brokenbar", 260),
    ("bullet", 350),
    ("c", 500),
    ("cacute", 500),
    ("caron", 333),
    ("ccaron", 500),
    ("ccedilla", 500),
    ("cedilla", 333),
    ("cent", 556),
    ("circumflex", 333),
    ("colon", 278),
    ("comma", 278),
    ("commaaccent", 250),
    ("copyright", 737),
    ("currency", 556),
    ("d", 556),
    ("dagger", 556),
    ("daggerdbl", 556),
    ("dcaron", 643),
    ("dcroat", 556),
    ("degree", 400),
    ("dieresis", 333),
    ("divide", 584),
    ("dollar", 556),
    ("dotaccent", 333),
    ("dotlessi", 278),
    ("e", 556),
    ("eacute", 556),
    ("ecaron", 556),
    ("ecircumflex", 556),
    ("edieresis", 556),
    ("edotaccent", 556),
    ("egrave", 556),
    ("eight", 556),
    ("ellipsis", 1000),
    ("emacron", 556),
    ("emdash", 1000),
    ("endash", 556),
    ("eogonek", 556),
    ("equal", 584),
    ("eth", 556),
    ("exclam", 278),
    ("exclamdown", 333),
    ("f", 278),
    ("fi", 500),
    ("five", 556),
    ("fl", 500),
    ("florin", 556),
    ("four", 556),
    ("fraction", 167),
    ("g", 556),
    ("gbreve", 556),
    ("gcommaaccent", 556),
    ("germandbls", 611),
    ("grave", 333),
    ("greater", 584),
    ("greaterequal", 549),
    ("guillemotleft", 556),
    ("guillemotright", 556),
    ("guilsinglleft", 333),
    ("guilsinglright", 333),
    ("h", 556),
    ("hungarumlaut", 333),
    ("hyphen", 333),
    ("i", 222),
    ("iacute", 278),
    ("icircumflex", 278),
    ("idieresis", 278),
    ("igrave", 278),
    ("imacron", 278),
    ("iogonek", 222),
    ("j", 222),
    ("k", 500),
    ("kcommaaccent", 500),
    ("l", 222),
    ("lacute", 222),
    ("lcaron", 299),
    ("lcommaaccent", 222),
    ("less", 584),
    ("lessequal", 549),
    ("logicalnot", 584),
    ("lozenge", 471),
    ("lslash", 222),
    ("m", 833),
    ("macron", 333),
    ("minus", 584),
    ("mu", 556),
    ("multiply", 584),
    ("n", 556),
    ("nacute", 556),
    ("ncaron", 556),
    ("ncommaaccent", 556),
    ("nine", 556),
    ("notequal", 549),
    ("ntilde", 556),
    ("numbersign", 556),
    ("o", 556),
    ("oacute", 556),
    ("ocircumflex", 556),
    ("odieresis", 556),
    ("oe", 944),
    ("ogonek", 333),
    ("ograve", 556),
    ("ohungarumlaut", 556),
    ("omacron", 556),
    ("one", 556),
    ("onehalf", 834),
    ("onequarter", 834),
    ("onesuperior", 333),
    ("ordfeminine", 370),
    ("ordmasculine", 365),
    ("oslash", 611),
    ("otilde", 556),
    ("p", 556),
    ("paragraph", 537),
    ("parenleft", 333),
    ("parenright", 333),
    ("partialdiff", 476),
    ("percent", 889),
    ("period", 278),
    ("periodcentered", 278),
    ("perthousand", 1000),
    ("plus", 584),
    ("plusminus", 584),
    ("q", 556),
    ("question", 556),
    ("questiondown", 611),
    ("quotedbl", 355),
    ("quotedblbase", 333),
    ("quotedblleft", 333),
    ("quotedblright", 333),
    ("quoteleft", 222),
    ("quoteright", 222),
    ("quotesinglbase", 222),
    ("quotesingle", 191),
    ("r", 333),
    ("racute", 333),
    ("radical", 453),
    ("rcaron", 333),
    ("rcommaaccent", 333),
    ("registered", 737),
    ("ring", 333),
    ("s", 500),
    ("sacute", 500),
    ("scaron", 500),
    ("scedilla", 500),
    ("scommaaccent", 500),
    ("section", 556),
    ("semicolon", 278),
    ("seven", 556),
    ("six", 556),
    ("slash", 278),
    ("space", 278),
    ("sterling", 556),
    ("summation", 600),
    ("t", 278),
    ("tcaron", 317),
    ("tcommaaccent", 278),
    ("thorn", 556),
    ("three", 556),
    ("threequarters", 834),
    ("threesuperior", 333),
    ("tilde", 333),
    ("trademark", 1000),
    ("two", 556),
    ("twosuperior", 333),
    ("u", 556),
    ("uacute", 556),
    ("ucircumflex", 556),
    ("udieresis", 556),
    ("ugrave", 556),
    ("uhungarumlaut", 556),
    ("umacron", 556),
    ("underscore", 556),
    ("uogonek", 556),
    ("uring", 556),
    ("v", 500),
    ("w", 722),
    ("x", 500),
    ("y", 500),
    ("yacute", 500),
    ("ydieresis", 500),
    ("yen", 556),
    ("z", 500),
    ("zacute", 500),
    ("zcaron", 500),
    ("zdotaccent", 500),
    ("zero", 556),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(WIDTHS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn looks_up_known_glyphs() {
        assert_eq!(Helvetica.advance_width("A"), Some(667.0));
        assert_eq!(Helvetica.advance_width("space"), Some(278.0));
        assert_eq!(Helvetica.advance_width("zero"), Some(556.0));
        assert_eq!(Helvetica.advance_width("not-a-glyph"), None);
    }
}
