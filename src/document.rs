use crate::{
    chapter::Chapter,
    content::{Drawable, Pagination},
    diagnostics::{Diagnostics, LogDiagnostics},
    image::{Image, ImageData},
    layout::{DrawContext, Margins},
    metrics::{Helvetica, SizeProvider},
    page::PageBlock,
    pagesize::PageSize,
    Error, PaginationFailure,
};
use id_arena::{Arena, Id};
use log::debug;
use std::{path::Path, rc::Rc};

/// A document owns the page stream that content is drawn into, along with the
/// images that pages refer to. It also numbers chapters and carries the
/// diagnostics sink for one build.
pub struct Document {
    pub pages: Arena<PageBlock>,
    pub page_order: Vec<Id<PageBlock>>,
    pub images: Arena<ImageData>,
    page_size: PageSize,
    margins: Margins,
    ctx: DrawContext,
    chapters: usize,
    heading_font: Rc<dyn SizeProvider>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl Document {
    /// A document with no pages yet. Rejected content is logged; headings are
    /// sized with the built-in Helvetica metrics.
    pub fn new(page_size: PageSize, margins: Margins) -> Document {
        Document {
            pages: Arena::new(),
            page_order: Vec::new(),
            images: Arena::new(),
            page_size,
            margins,
            ctx: DrawContext::new(0, page_size, margins),
            chapters: 0,
            heading_font: Rc::new(Helvetica),
            diagnostics: Rc::new(LogDiagnostics),
        }
    }

    /// Report rejected content to `diagnostics` instead of the log. Only
    /// chapters created after this call use the new sink.
    pub fn with_diagnostics(mut self, diagnostics: Rc<dyn Diagnostics>) -> Document {
        self.diagnostics = diagnostics;
        self
    }

    /// Size chapter and subchapter headings with `font`. Only chapters created
    /// after this call use the new font.
    pub fn set_heading_font(&mut self, font: Rc<dyn SizeProvider>) {
        self.heading_font = font;
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Where the next piece of content will be drawn
    pub fn context(&self) -> DrawContext {
        self.ctx
    }

    /// Append an empty page and move the cursor to its top
    pub fn new_page(&mut self) -> Id<PageBlock> {
        let id = self
            .pages
            .alloc(PageBlock::new(self.page_size.width, self.page_size.height));
        self.page_order.push(id);
        self.ctx = DrawContext::new(self.page_order.len() - 1, self.page_size, self.margins);
        id
    }

    /// Create the next chapter. The chapter is not part of the page stream
    /// until it is passed to [Document::draw].
    pub fn new_chapter<S: ToString>(&mut self, title: S) -> Chapter {
        self.chapters += 1;
        Chapter::new(
            self.chapters,
            title.to_string(),
            self.heading_font.clone(),
            self.diagnostics.clone(),
        )
    }

    /// Store decoded image data, returning an image sized to its pixels
    pub fn add_image(&mut self, data: ImageData) -> Image {
        let id = self.images.alloc(data);
        Image::from_data(id, &self.images[id])
    }

    /// Decode an image file and store it
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<Image, Error> {
        let data = image::open(path)?;
        Ok(self.add_image(data))
    }

    pub fn image(&self, id: Id<ImageData>) -> Option<&ImageData> {
        self.images.get(id)
    }

    /// Lay `content` out from the current cursor. Its first page block
    /// continues the current page; any further blocks become new pages.
    ///
    /// If layout fails, the pages and the cursor are left exactly as they were.
    pub fn draw<D: Drawable + ?Sized>(&mut self, content: &D) -> Result<(), PaginationFailure> {
        let Pagination { blocks, ctx } = content.generate_page_blocks(self.ctx)?;

        // content that placed nothing does not get to move the cursor
        let mut blocks = blocks.into_iter();
        let Some(first) = blocks.next() else {
            return Ok(());
        };
        match self.page_order.last() {
            Some(&current) => self.pages[current].merge(first),
            // nothing has been drawn yet, the first block starts page 0
            None => {
                let id = self.pages.alloc(first);
                self.page_order.push(id);
            }
        }
        let before = self.page_order.len();
        for block in blocks {
            let id = self.pages.alloc(block);
            self.page_order.push(id);
        }
        if self.page_order.len() > before {
            debug!(
                "content spilled onto {} new page(s)",
                self.page_order.len() - before
            );
        }

        self.ctx = ctx;
        Ok(())
    }

    /// The pages, in document order
    pub fn pages(&self) -> impl Iterator<Item = &PageBlock> {
        self.page_order.iter().map(|&id| &self.pages[id])
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }
}
