use crate::container::Container;
use crate::content::{Content, Drawable, Pagination};
use crate::diagnostics::{Diagnostics, RejectReason};
use crate::layout::{DrawContext, Positioning, Sizing};
use crate::metrics::SizeProvider;
use crate::paragraph::Paragraph;
use crate::units::Pt;
use crate::PaginationFailure;
use std::rc::Rc;

/// A numbered section within a [Chapter](crate::Chapter). Subchapters hold
/// paragraphs, images and blocks, but never other chapters or subchapters.
///
/// Subchapters are only created through
/// [`Chapter::new_subchapter`](crate::Chapter::new_subchapter), which numbers
/// them and registers them with the chapter for good.
#[derive(Debug)]
pub struct Subchapter {
    chapter: usize,
    number: usize,
    show_numbering: bool,
    inner: Container,
}

impl Subchapter {
    pub(crate) fn new(
        chapter: usize,
        number: usize,
        title: String,
        font: Rc<dyn SizeProvider>,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Subchapter {
        let mut heading = Paragraph::new(format!("{chapter}.{number} {title}"), font);
        heading.set_font_size(Pt(14.0));

        Subchapter {
            chapter,
            number,
            show_numbering: true,
            inner: Container::new(
                format!("subchapter {chapter}.{number}"),
                title,
                heading,
                diagnostics,
            ),
        }
    }

    /// (chapter number, subchapter number)
    pub fn number(&self) -> (usize, usize) {
        (self.chapter, self.number)
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn heading(&self) -> &Paragraph {
        &self.inner.heading
    }

    /// The heading paragraph, e.g. to change its font or size
    pub fn heading_mut(&mut self) -> &mut Paragraph {
        &mut self.inner.heading
    }

    /// Whether the heading is prefixed with "chapter.subchapter"
    pub fn set_show_numbering(&mut self, show: bool) {
        self.show_numbering = show;
        let text = if show {
            format!("{}.{} {}", self.chapter, self.number, self.inner.title)
        } else {
            self.inner.title.clone()
        };
        self.inner.heading.set_text(text);
    }

    pub fn show_numbering(&self) -> bool {
        self.show_numbering
    }

    /// Draw at fixed page coordinates rather than at the cursor
    pub fn set_pos(&mut self, x: Pt, y: Pt) {
        self.inner.positioning = Positioning::Absolute { x, y };
    }

    pub fn positioning(&self) -> Positioning {
        self.inner.positioning
    }

    /// Margins around the subchapter. Usually not needed, as the page margins
    /// already apply. Negative values are clamped to zero.
    pub fn set_margins(&mut self, left: Pt, right: Pt, top: Pt, bottom: Pt) {
        self.inner.set_margins(left, right, top, bottom);
    }

    /// The margins as (left, right, top, bottom)
    pub fn margins(&self) -> (Pt, Pt, Pt, Pt) {
        self.inner.margins.as_tuple()
    }

    /// Append content. Chapters, subchapters and custom content are refused
    /// and reported to the document's diagnostics instead.
    pub fn add<C: Into<Content>>(&mut self, content: C) {
        match content.into() {
            content @ (Content::Paragraph(_) | Content::Image(_) | Content::Block(_)) => {
                self.inner.contents.push(content)
            }
            content @ (Content::Chapter(_) | Content::Subchapter(_)) => {
                self.inner
                    .reject(content.kind(), RejectReason::NestedContainer)
            }
            content @ Content::Custom(_) => {
                self.inner.reject(content.kind(), RejectReason::Unsupported)
            }
        }
    }

    pub fn contents(&self) -> &[Content] {
        &self.inner.contents
    }

    pub fn len(&self) -> usize {
        self.inner.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.contents.is_empty()
    }
}

impl Drawable for Subchapter {
    fn height(&self) -> Pt {
        self.inner.height()
    }

    fn width(&self) -> Pt {
        self.inner.width()
    }

    fn sizing(&self) -> Sizing {
        self.inner.sizing
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
        self.inner.paginate(ctx)
    }
}
