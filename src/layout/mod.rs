//! Geometry shared by everything that takes part in a layout pass.
//!
//! A pass threads a [`DrawContext`](crate::layout::DrawContext) through the
//! content tree. Leaves decide where pages break; containers stitch the page
//! blocks their children return. [`wrap_lines`](crate::layout::wrap_lines)
//! splits paragraph text into lines that fit a given width.
//!
//! # Example
//!
//! ```
//! use pdf_compose::layout::{DrawContext, Margins};
//! use pdf_compose::{pagesize, Pt};
//!
//! let ctx = DrawContext::new(0, pagesize::LETTER, Margins::all(Pt(72.0)));
//! assert_eq!(ctx.available_width(), Pt(8.5 * 72.0 - 144.0));
//!
//! let next = ctx.next_page();
//! assert_eq!(next.page, 1);
//! assert_eq!(next.y, Pt(72.0));
//! ```

mod context;
mod margins;
mod text;

pub use context::*;
pub use margins::*;
pub use text::*;
