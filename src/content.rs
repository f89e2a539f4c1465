//! The capability every piece of content implements, and the closed set of
//! content kinds that containers accept.

use crate::{
    chapter::Chapter,
    image::Image,
    layout::{DrawContext, Sizing},
    page::PageBlock,
    paragraph::Paragraph,
    subchapter::Subchapter,
    units::Pt,
    PaginationFailure,
};
use derive_more::{Display, From};
use std::fmt;

/// The result of a successful pagination pass: the page blocks produced, in
/// page order, and the context to continue from. The first block belongs to
/// the page the pass started on; each further block is a new page.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub blocks: Vec<PageBlock>,
    pub ctx: DrawContext,
}

/// Anything that can report its size and flow itself across pages.
pub trait Drawable {
    /// Intrinsic height
    fn height(&self) -> Pt;

    /// Intrinsic width
    fn width(&self) -> Pt;

    fn sizing(&self) -> Sizing;

    /// Lay the content out starting at `ctx`, splitting it over as many page
    /// blocks as it needs.
    ///
    /// # Errors
    ///
    /// Fails with the first [PaginationError](crate::PaginationError) raised;
    /// the failure carries whatever had been laid out before it.
    fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure>;
}

/// The kinds of content a document is built from
#[derive(From)]
pub enum Content {
    Paragraph(Paragraph),
    Image(Image),
    Block(PageBlock),
    Chapter(Chapter),
    Subchapter(Subchapter),
    /// User-defined content. Documents can draw it directly, but chapters and
    /// subchapters do not accept it.
    Custom(Box<dyn Drawable>),
}

/// Names a [Content] variant without its payload
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum ContentKind {
    #[display("paragraph")]
    Paragraph,
    #[display("image")]
    Image,
    #[display("block")]
    Block,
    #[display("chapter")]
    Chapter,
    #[display("subchapter")]
    Subchapter,
    #[display("custom content")]
    Custom,
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Paragraph(_) => ContentKind::Paragraph,
            Content::Image(_) => ContentKind::Image,
            Content::Block(_) => ContentKind::Block,
            Content::Chapter(_) => ContentKind::Chapter,
            Content::Subchapter(_) => ContentKind::Subchapter,
            Content::Custom(_) => ContentKind::Custom,
        }
    }

    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Content::Paragraph(p) => p,
            Content::Image(i) => i,
            Content::Block(b) => b,
            Content::Chapter(c) => c,
            Content::Subchapter(s) => s,
            Content::Custom(d) => d.as_ref(),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Paragraph(p) => f.debug_tuple("Paragraph").field(p).finish(),
            Content::Image(i) => f.debug_tuple("Image").field(i).finish(),
            Content::Block(b) => f.debug_tuple("Block").field(b).finish(),
            Content::Chapter(c) => f.debug_tuple("Chapter").field(c).finish(),
            Content::Subchapter(s) => f.debug_tuple("Subchapter").field(s).finish(),
            Content::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Drawable for Content {
    fn height(&self) -> Pt {
        self.as_drawable().height()
    }

    fn width(&self) -> Pt {
        self.as_drawable().width()
    }

    fn sizing(&self) -> Sizing {
        self.as_drawable().sizing()
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
        self.as_drawable().generate_page_blocks(ctx)
    }
}
