use crate::content::{Drawable, Pagination};
use crate::layout::{wrap_lines, DrawContext, Positioning, Sizing};
use crate::metrics::{glyph_name, SizeProvider};
use crate::page::{PageBlock, PageContents, TextSpan};
use crate::units::Pt;
use crate::{PaginationError, PaginationFailure};
use log::trace;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

/// A run of text set in one font and size, wrapped into lines and broken
/// across pages line by line.
pub struct Paragraph {
    text: String,
    font: Rc<dyn SizeProvider>,
    font_size: Pt,
    line_height: f32,
    wrap_width: Option<Pt>,
    wrap: bool,
    positioning: Positioning,
}

impl Paragraph {
    /// A 10pt paragraph with single line spacing, wrapping at whatever width
    /// the page leaves it
    pub fn new<S: ToString>(text: S, font: Rc<dyn SizeProvider>) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            font,
            font_size: Pt(10.0),
            line_height: 1.0,
            wrap_width: None,
            wrap: true,
            positioning: Positioning::Flow,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: ToString>(&mut self, text: S) {
        self.text = text.to_string();
    }

    pub fn set_font(&mut self, font: Rc<dyn SizeProvider>) {
        self.font = font;
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: Pt) {
        self.font_size = size;
    }

    /// Line spacing as a multiple of the font size
    pub fn set_line_height(&mut self, factor: f32) {
        self.line_height = factor;
    }

    /// Distance between consecutive baselines
    pub fn line_height(&self) -> Pt {
        self.font_size * self.line_height
    }

    /// Wrap at a fixed width instead of the room left on the page
    pub fn set_wrap_width(&mut self, width: Pt) {
        self.wrap_width = Some(width);
    }

    /// With wrapping off, lines only end at explicit newlines
    pub fn set_enable_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn set_pos(&mut self, x: Pt, y: Pt) {
        self.positioning = Positioning::Absolute { x, y };
    }

    fn advance(&self, ch: char) -> Option<Pt> {
        let width = self.font.advance_width(glyph_name(ch)?)?;
        Some(self.font_size * (width / 1000.0))
    }

    /// Width of a single line of text; glyphs the font does not know count as zero
    pub fn text_width(&self, text: &str) -> Pt {
        text.chars()
            .filter_map(|ch| self.advance(ch))
            .sum()
    }

    /// The lines the paragraph breaks into at `width`
    pub fn lines(&self, width: Option<Pt>) -> Result<Vec<String>, PaginationError> {
        wrap_lines(&self.text, width.filter(|_| self.wrap), |ch| {
            self.advance(ch)
                .ok_or(PaginationError::UnsupportedGlyph { ch })
        })
    }

    // sizing queries have no context to fail into, so unknown glyphs are
    // measured as zero instead
    fn measured_lines(&self) -> Vec<String> {
        let lines: Result<_, Infallible> = wrap_lines(
            &self.text,
            self.wrap_width.filter(|_| self.wrap),
            |ch| Ok(self.advance(ch).unwrap_or_default()),
        );
        match lines {
            Ok(lines) => lines,
            Err(never) => match never {},
        }
    }
}

impl fmt::Debug for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("text", &self.text)
            .field("font_size", &self.font_size)
            .field("line_height", &self.line_height)
            .field("wrap_width", &self.wrap_width)
            .field("wrap", &self.wrap)
            .field("positioning", &self.positioning)
            .finish_non_exhaustive()
    }
}

impl Drawable for Paragraph {
    fn height(&self) -> Pt {
        self.line_height() * self.measured_lines().len() as f32
    }

    fn width(&self) -> Pt {
        match self.wrap_width {
            Some(width) if self.wrap => width,
            _ => self
                .measured_lines()
                .iter()
                .map(|line| self.text_width(line))
                .fold(Pt(0.0), Pt::max),
        }
    }

    fn sizing(&self) -> Sizing {
        Sizing::OccupyAvailableSpace
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
        // wrap against the room to the right of where the lines will start
        let origin = match self.positioning {
            Positioning::Absolute { x, y } => ctx.at(x, y),
            Positioning::Flow => ctx,
        };
        let wrap_width = self.wrap_width.unwrap_or_else(|| origin.available_width());
        let lines = self
            .lines(Some(wrap_width))
            .map_err(|error| PaginationFailure::new(error, ctx))?;
        let line_height = self.line_height();

        let span = |text: String, x: Pt, y: Pt| {
            PageContents::Text(TextSpan {
                text,
                font_size: self.font_size,
                x,
                y,
            })
        };

        if let Positioning::Absolute { x, y } = self.positioning {
            let mut block = PageBlock::for_page(&ctx);
            let mut line_y = y;
            for line in lines {
                if !line.is_empty() {
                    block.add(span(line, x, line_y));
                }
                line_y += line_height;
            }
            return Ok(Pagination {
                blocks: vec![block],
                ctx,
            });
        }

        let mut ctx = ctx;
        let mut blocks = Vec::new();
        let mut block = PageBlock::for_page(&ctx);
        for line in lines {
            if line_height > ctx.available_height() && !ctx.at_page_top() {
                trace!("paragraph continues on page {}", ctx.page + 1);
                ctx = ctx.next_page();
                blocks.push(std::mem::replace(&mut block, PageBlock::for_page(&ctx)));
            }
            if !line.is_empty() {
                block.add(span(line, ctx.x, ctx.y));
            }
            ctx.y += line_height;
        }
        blocks.push(block);

        Ok(Pagination { blocks, ctx })
    }
}
