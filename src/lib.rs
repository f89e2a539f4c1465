//! Flows chapters, subchapters, paragraphs, images and pre-drawn blocks down a
//! stream of fixed-size pages.
//!
//! Leaves (paragraphs, images, blocks) decide where pages break. Chapters and
//! subchapters lay out a heading and then their children in order, stitching
//! the page blocks the children return: a child's first block continues the
//! page the previous child ended on, and its remaining blocks are new pages.
//! The [Document] merges the result into its own page stream.
//!
//! # Example
//!
//! ```
//! use pdf_compose::{pagesize, Document, Helvetica, Paragraph, Pt};
//! use pdf_compose::layout::Margins;
//! use std::rc::Rc;
//!
//! let mut doc = Document::new(pagesize::LETTER, Margins::all(Pt(72.0)));
//! let font = Rc::new(Helvetica);
//!
//! let mut chapter = doc.new_chapter("Introduction");
//! chapter.add(Paragraph::new("Chapters hold paragraphs.", font.clone()));
//!
//! let section = chapter.new_subchapter("Details");
//! section.add(Paragraph::new("Subchapters hold paragraphs too.", font));
//!
//! doc.draw(&chapter).expect("chapter fits");
//! assert_eq!(doc.page_count(), 1);
//! ```

mod chapter;
pub use chapter::*;

mod container;

mod content;
pub use content::*;

/// Reporting for content that containers refuse
pub mod diagnostics;
pub use diagnostics::{Diagnostics, LogDiagnostics, RecordingDiagnostics};

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Cursor, margins and text wrapping shared by every layout pass
pub mod layout;

/// Glyph metrics providers
pub mod metrics;
pub use metrics::{Helvetica, SizeProvider};

mod page;
pub use page::*;

pub mod pagesize;

mod paragraph;
pub use paragraph::*;

mod subchapter;
pub use subchapter::*;

mod units;
pub use units::*;
