use crate::container::Container;
use crate::content::{Content, Drawable, Pagination};
use crate::diagnostics::{Diagnostics, RejectReason};
use crate::layout::{DrawContext, Positioning, Sizing};
use crate::metrics::SizeProvider;
use crate::paragraph::Paragraph;
use crate::subchapter::Subchapter;
use crate::units::Pt;
use crate::PaginationFailure;
use std::fmt;
use std::rc::Rc;

/// A numbered chapter: a heading followed by paragraphs, images, blocks and
/// subchapters, laid out in the order they were added.
///
/// Chapters are created by [`Document::new_chapter`](crate::Document::new_chapter),
/// which hands out chapter numbers.
pub struct Chapter {
    number: usize,
    subchapters: usize,
    show_numbering: bool,
    // shared with every subchapter created here
    heading_font: Rc<dyn SizeProvider>,
    inner: Container,
}

impl Chapter {
    pub(crate) fn new(
        number: usize,
        title: String,
        heading_font: Rc<dyn SizeProvider>,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Chapter {
        let mut heading = Paragraph::new(format!("{number}. {title}"), heading_font.clone());
        heading.set_font_size(Pt(16.0));

        Chapter {
            number,
            subchapters: 0,
            show_numbering: true,
            heading_font,
            inner: Container::new(format!("chapter {number}"), title, heading, diagnostics),
        }
    }

    pub fn number(&self) -> usize {
        self.number
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

    /// Whether the heading is prefixed with the chapter number
    pub fn set_show_numbering(&mut self, show: bool) {
        self.show_numbering = show;
        let text = if show {
            format!("{}. {}", self.number, self.inner.title)
        } else {
            self.inner.title.clone()
        };
        self.inner.heading.set_text(text);
    }

    pub fn show_numbering(&self) -> bool {
        self.show_numbering
    }

    /// Creates the next subchapter, appends it to this chapter and returns it
    /// for filling in. The subchapter stays registered with this chapter.
    pub fn new_subchapter<S: ToString>(&mut self, title: S) -> &mut Subchapter {
        self.subchapters += 1;
        let subchapter = Subchapter::new(
            self.number,
            self.subchapters,
            title.to_string(),
            self.heading_font.clone(),
            self.inner.diagnostics.clone(),
        );
        self.add(subchapter);

        match self.inner.contents.last_mut() {
            Some(Content::Subchapter(subchapter)) => subchapter,
            _ => unreachable!("a chapter always accepts its own subchapters"),
        }
    }

    /// How many subchapters have been created in this chapter
    pub fn subchapter_count(&self) -> usize {
        self.subchapters
    }

    /// Draw at fixed page coordinates rather than at the cursor
    pub fn set_pos(&mut self, x: Pt, y: Pt) {
        self.inner.positioning = Positioning::Absolute { x, y };
    }

    pub fn positioning(&self) -> Positioning {
        self.inner.positioning
    }

    /// Margins around the chapter. Usually not needed, as the page margins
    /// already apply. Negative values are clamped to zero.
    pub fn set_margins(&mut self, left: Pt, right: Pt, top: Pt, bottom: Pt) {
        self.inner.set_margins(left, right, top, bottom);
    }

    /// The margins as (left, right, top, bottom)
    pub fn margins(&self) -> (Pt, Pt, Pt, Pt) {
        self.inner.margins.as_tuple()
    }

    /// Append content. Chapters and custom content are refused and reported to
    /// the document's diagnostics instead.
    pub fn add<C: Into<Content>>(&mut self, content: C) {
        match content.into() {
            content @ (Content::Paragraph(_)
            | Content::Image(_)
            | Content::Block(_)
            | Content::Subchapter(_)) => self.inner.contents.push(content),
            content @ Content::Chapter(_) => {
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

impl fmt::Debug for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chapter")
            .field("number", &self.number)
            .field("subchapters", &self.subchapters)
            .field("show_numbering", &self.show_numbering)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl Drawable for Chapter {
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
