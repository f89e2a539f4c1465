//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are given in portrait orientation. Use
//! [`PageSize::landscape`](crate::pagesize::PageSize::landscape) to turn them.
//!
//! # Example
//!
//! ```
//! use pdf_compose::pagesize::{A4, LETTER};
//!
//! let page = LETTER;
//! let wide = A4.landscape();
//! assert!(wide.width > wide.height);
//! ```

use crate::units::Pt;

/// Page dimensions in points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageSize {
    pub width: Pt,
    pub height: Pt,
}

impl PageSize {
    pub const fn new(width: Pt, height: Pt) -> PageSize {
        PageSize { width, height }
    }

    /// Returns the size with width ≤ height
    pub fn portrait(self) -> PageSize {
        if self.width <= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }

    /// Returns the size with width ≥ height
    pub fn landscape(self) -> PageSize {
        if self.width >= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }
}

// north american sizes
pub const LETTER: PageSize = PageSize::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = PageSize::new(Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = PageSize::new(Pt(8.5 * 72.0), Pt(13.0 * 72.0));
pub const TABLOID: PageSize = PageSize::new(Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = PageSize::new(Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = PageSize::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = PageSize::new(Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
