use super::Margins;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Where an element takes its origin from
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum Positioning {
    /// Placed at the running cursor of the [DrawContext]
    #[default]
    Flow,
    /// Placed at fixed page coordinates, measured from the top-left corner
    Absolute { x: Pt, y: Pt },
}

impl Positioning {
    pub fn is_absolute(&self) -> bool {
        matches!(self, Positioning::Absolute { .. })
    }
}

/// How an element's size is determined
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sizing {
    /// The element has an intrinsic size of its own
    Fixed,
    /// The element takes whatever room the page leaves it; its size is derived
    /// from its contents
    OccupyAvailableSpace,
}

/// The cursor and page geometry threaded through a layout pass.
///
/// Coordinates grow right and down from the top-left corner of the page. A
/// context is handed to [`Drawable::generate_page_blocks`](crate::Drawable::generate_page_blocks)
/// by value and comes back advanced: within one pass `y` only grows, or the
/// context moves on to a later `page` with the cursor back at the top margin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawContext {
    /// 0-based index of the page the cursor is on
    pub page: usize,
    pub x: Pt,
    pub y: Pt,
    pub page_width: Pt,
    pub page_height: Pt,
    pub margins: Margins,
}

impl DrawContext {
    /// A context at the top-left margin corner of page `page`
    pub fn new(page: usize, size: PageSize, margins: Margins) -> DrawContext {
        DrawContext {
            page,
            x: margins.left,
            y: margins.top,
            page_width: size.width,
            page_height: size.height,
            margins,
        }
    }

    /// Horizontal room between the cursor and the right margin
    pub fn available_width(&self) -> Pt {
        self.page_width - self.margins.right - self.x
    }

    /// Vertical room between the cursor and the bottom margin
    pub fn available_height(&self) -> Pt {
        self.page_height - self.margins.bottom - self.y
    }

    /// True when the cursor sits at (or above) the top margin, i.e. nothing has
    /// been flowed onto this page yet
    pub fn at_page_top(&self) -> bool {
        self.y <= self.margins.top
    }

    /// The context at the top of the following page
    pub fn next_page(&self) -> DrawContext {
        DrawContext {
            page: self.page + 1,
            x: self.margins.left,
            y: self.margins.top,
            ..*self
        }
    }

    /// The same page with the cursor moved to `(x, y)`
    pub fn at(&self, x: Pt, y: Pt) -> DrawContext {
        DrawContext { x, y, ..*self }
    }

    /// Resolves the context to return after an out-of-flow pass that started at
    /// `origin` and finished at `end`. The space consumed on the starting page is
    /// charged to `self` so that the flow never moves backwards; a pass that
    /// crossed onto later pages hands back its own final context.
    pub fn consumed_by(&self, origin: &DrawContext, end: &DrawContext) -> DrawContext {
        if end.page > origin.page {
            *end
        } else {
            DrawContext {
                y: self.y + (end.y - origin.y).max(Pt(0.0)),
                ..*self
            }
        }
    }
}
