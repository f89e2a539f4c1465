use crate::{layout::DrawContext, page::PageBlock};
use thiserror::Error;

/// Errors raised while building content, before any layout happens
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),
}

/// Why a pagination pass failed. Containers never add causes of their own;
/// they relay whatever their children raised.
#[derive(Error, Debug)]
pub enum PaginationError {
    /// The text contains a character the paragraph's font cannot size
    #[error("unsupported text glyph {ch:?}")]
    UnsupportedGlyph { ch: char },

    /// Content drawn into a [PageBlock] did not fit in a single block
    #[error("content produced {blocks} page blocks, but a block can only hold one")]
    BlockOverflow { blocks: usize },

    /// Raised by a user-provided drawable
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A failed pagination pass: the error, plus whatever had been laid out and
/// the context as they stood before the failing step. The partial blocks are
/// only useful for diagnostics; they are not a complete layout.
#[derive(Error, Debug)]
#[error("pagination aborted: {error}")]
pub struct PaginationFailure {
    #[source]
    pub error: PaginationError,
    pub blocks: Vec<PageBlock>,
    pub ctx: DrawContext,
}

impl PaginationFailure {
    /// A failure with nothing laid out before it
    pub fn new(error: PaginationError, ctx: DrawContext) -> PaginationFailure {
        PaginationFailure {
            error,
            blocks: Vec::new(),
            ctx,
        }
    }
}
