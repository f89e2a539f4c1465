use crate::{
    metrics::{char_for_glyph, SizeProvider},
    Error,
};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed TrueType / OpenType font, usable as a [SizeProvider] so that
/// paragraphs can be measured with the same face they will be rendered with.
///
/// Glyph names are resolved to characters through the standard glyph list and
/// then looked up in the font's character map, so only glyphs reachable from a
/// named character can be measured.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn units_per_em(&self) -> f32 {
        self.face.as_face_ref().units_per_em() as f32
    }
}

impl SizeProvider for Font {
    fn advance_width(&self, glyph: &str) -> Option<f32> {
        let face = self.face.as_face_ref();
        let gid = face.glyph_index(char_for_glyph(glyph)?)?;
        let advance = face.glyph_hor_advance(gid)?;
        Some(advance as f32 * 1000.0 / self.units_per_em())
    }
}
