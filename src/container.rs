use crate::content::{Content, ContentKind, Drawable, Pagination};
use crate::diagnostics::{Diagnostics, RejectReason, Rejection};
use crate::layout::{DrawContext, Margins, Positioning, Sizing};
use crate::paragraph::Paragraph;
use crate::units::Pt;
use crate::PaginationFailure;
use log::debug;
use std::rc::Rc;

/// State and layout shared by chapters and subchapters: a heading followed by
/// an ordered list of children.
#[derive(Debug)]
pub(crate) struct Container {
    /// How diagnostics refer to this container, e.g. `"chapter 3"`
    pub(crate) label: String,
    pub(crate) title: String,
    pub(crate) heading: Paragraph,
    pub(crate) contents: Vec<Content>,
    pub(crate) margins: Margins,
    pub(crate) positioning: Positioning,
    pub(crate) sizing: Sizing,
    pub(crate) diagnostics: Rc<dyn Diagnostics>,
}

impl Container {
    pub(crate) fn new(
        label: String,
        title: String,
        heading: Paragraph,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Container {
        Container {
            label,
            title,
            heading,
            contents: Vec::new(),
            margins: Margins::default(),
            positioning: Positioning::Flow,
            sizing: Sizing::OccupyAvailableSpace,
            diagnostics,
        }
    }

    pub(crate) fn reject(&self, kind: ContentKind, reason: RejectReason) {
        self.diagnostics.content_rejected(&Rejection {
            container: self.label.clone(),
            kind,
            reason,
        });
    }

    /// Negative values are clamped to zero
    pub(crate) fn set_margins(&mut self, left: Pt, right: Pt, top: Pt, bottom: Pt) {
        let zero = Pt(0.0);
        self.margins = Margins::new(
            left.max(zero),
            right.max(zero),
            top.max(zero),
            bottom.max(zero),
        );
    }

    /// Sum of the children's heights; the heading is not counted
    pub(crate) fn height(&self) -> Pt {
        self.contents.iter().map(Drawable::height).sum()
    }

    /// Widest child; the heading is not counted
    pub(crate) fn width(&self) -> Pt {
        self.contents
            .iter()
            .map(Drawable::width)
            .fold(Pt(0.0), Pt::max)
    }

    /// Lays out the heading and then every child in order.
    ///
    /// Children decide where pages break; the container only stitches: the
    /// first block a child returns continues the page the previous child ended
    /// on, and any further blocks are new pages. The first failing child ends
    /// the pass, and later children are not laid out.
    pub(crate) fn paginate(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
        let incoming = ctx;
        let origin = match self.positioning {
            Positioning::Flow => ctx,
            Positioning::Absolute { x, y } => ctx.at(x, y),
        };

        let mut ctx = origin;
        ctx.y += self.margins.top;

        let Pagination {
            mut blocks,
            mut ctx,
        } = self.heading.generate_page_blocks(ctx)?;

        for child in self.contents.iter() {
            let Pagination {
                blocks: child_blocks,
                ctx: child_ctx,
            } = match child.generate_page_blocks(ctx) {
                Ok(pagination) => pagination,
                Err(failure) => {
                    return Err(PaginationFailure {
                        error: failure.error,
                        blocks,
                        ctx,
                    })
                }
            };

            let mut child_blocks = child_blocks.into_iter();
            let Some(first) = child_blocks.next() else {
                continue;
            };
            match blocks.last_mut() {
                Some(tail) => tail.merge(first),
                None => blocks.push(first),
            }
            blocks.extend(child_blocks);
            ctx = child_ctx;
        }

        let ctx = match self.positioning {
            Positioning::Flow => ctx,
            Positioning::Absolute { .. } => incoming.consumed_by(&origin, &ctx),
        };
        debug!(
            "laid out {} in {} page block(s), ending on page {}",
            self.label,
            blocks.len(),
            ctx.page
        );

        Ok(Pagination { blocks, ctx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::metrics::SizeProvider;
    use crate::page::{PageBlock, PageContents, TextSpan};
    use crate::pagesize::PageSize;
    use crate::PaginationError;
    use std::cell::Cell;
    use std::fmt;

    struct Mono;

    impl SizeProvider for Mono {
        fn advance_width(&self, _: &str) -> Option<f32> {
            Some(500.0)
        }
    }

    /// Test double: counts its calls and returns canned blocks or an error
    struct Probe {
        calls: Rc<Cell<usize>>,
        blocks: usize,
        advance: Pt,
        fail: bool,
    }

    #[derive(Debug)]
    struct ProbeError;

    impl fmt::Display for ProbeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("probe failed")
        }
    }

    impl std::error::Error for ProbeError {}

    impl Probe {
        fn new(calls: &Rc<Cell<usize>>, blocks: usize) -> Probe {
            Probe {
                calls: calls.clone(),
                blocks,
                advance: Pt(5.0),
                fail: false,
            }
        }

        fn failing(calls: &Rc<Cell<usize>>) -> Probe {
            Probe {
                fail: true,
                ..Probe::new(calls, 0)
            }
        }
    }

    impl Drawable for Probe {
        fn height(&self) -> Pt {
            self.advance
        }

        fn width(&self) -> Pt {
            Pt(1.0)
        }

        fn sizing(&self) -> Sizing {
            Sizing::Fixed
        }

        fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(PaginationFailure::new(
                    PaginationError::Custom(Box::new(ProbeError)),
                    ctx,
                ));
            }
            let mut ctx = ctx;
            let mut blocks = Vec::new();
            for i in 0..self.blocks {
                if i > 0 {
                    ctx = ctx.next_page();
                }
                let mut block = PageBlock::for_page(&ctx);
                block.add(PageContents::Text(TextSpan {
                    text: format!("probe {i}"),
                    font_size: Pt(10.0),
                    x: ctx.x,
                    y: ctx.y,
                }));
                blocks.push(block);
            }
            ctx.y += self.advance;
            Ok(Pagination { blocks, ctx })
        }
    }

    fn container() -> Container {
        let heading = Paragraph::new("1.1 Heading", Rc::new(Mono));
        Container::new(
            "subchapter 1.1".to_string(),
            "Heading".to_string(),
            heading,
            Rc::new(RecordingDiagnostics::new()),
        )
    }

    fn start() -> DrawContext {
        DrawContext::new(0, PageSize::new(Pt(200.0), Pt(200.0)), Margins::default())
    }

    fn sized(width: f32, height: f32) -> Content {
        Content::Block(PageBlock::new(Pt(width), Pt(height)))
    }

    #[test]
    fn height_is_the_sum_of_children() {
        let mut c = container();
        assert_eq!(c.height(), Pt(0.0));
        for h in [3.0, 4.5, 10.0] {
            c.contents.push(sized(1.0, h));
        }
        assert_eq!(c.height(), Pt(17.5));
    }

    #[test]
    fn width_is_the_widest_child() {
        let mut c = container();
        assert_eq!(c.width(), Pt(0.0));
        for w in [30.0, 80.0, 45.0] {
            c.contents.push(sized(w, 1.0));
        }
        assert_eq!(c.width(), Pt(80.0));
    }

    #[test]
    fn heading_alone_still_produces_a_block() {
        let result = container().paginate(start()).expect("laid out");
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].contents.len(), 1);
        assert_eq!(result.ctx.y, Pt(10.0));
    }

    #[test]
    fn heading_sees_the_top_margin() {
        let mut c = container();
        c.set_margins(Pt(0.0), Pt(0.0), Pt(10.0), Pt(0.0));
        let result = c.paginate(start()).expect("laid out");
        assert_eq!(result.blocks[0].contents[0].y(), Pt(10.0));
        assert_eq!(result.ctx.y, Pt(20.0));
    }

    #[test]
    fn negative_margins_are_clamped() {
        let mut c = container();
        c.set_margins(Pt(-4.0), Pt(3.0), Pt(-10.0), Pt(-1.0));
        assert_eq!(c.margins.as_tuple(), (Pt(0.0), Pt(3.0), Pt(0.0), Pt(0.0)));
        let result = c.paginate(start()).expect("laid out");
        assert_eq!(result.blocks[0].contents[0].y(), Pt(0.0));
    }

    #[test]
    fn children_on_the_same_page_merge_into_one_block() {
        let calls = Rc::new(Cell::new(0));
        let mut c = container();
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));
        let result = c.paginate(start()).expect("laid out");
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].contents.len(), 3);
        assert_eq!(result.ctx.y, Pt(20.0));
    }

    #[test]
    fn a_spanning_child_continues_the_tail_then_adds_pages() {
        let calls = Rc::new(Cell::new(0));
        let mut c = container();
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 2))));
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));
        let result = c.paginate(start()).expect("laid out");

        // heading + probe 0 on page 0; probe 1 and the second child on page 1
        assert_eq!(result.blocks.len(), 2);
        assert_eq!(result.blocks[0].contents.len(), 2);
        assert_eq!(result.blocks[1].contents.len(), 2);
        assert_eq!(result.ctx.page, 1);
    }

    #[test]
    fn children_without_blocks_are_skipped() {
        let calls = Rc::new(Cell::new(0));
        let mut c = container();
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 0))));
        let result = c.paginate(start()).expect("laid out");
        assert_eq!(calls.get(), 1);
        assert_eq!(result.blocks.len(), 1);
        // the probe advanced its context, but it was discarded
        assert_eq!(result.ctx.y, Pt(10.0));
    }

    #[test]
    fn empty_first_blocks_merge_as_no_ops() {
        let mut c = container();
        c.contents.push(sized(0.0, 0.0));
        let result = c.paginate(start()).expect("laid out");
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].contents.len(), 1);
    }

    #[test]
    fn a_failing_child_stops_the_pass() {
        let calls = Rc::new(Cell::new(0));
        let after = Rc::new(Cell::new(0));
        let mut c = container();
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));
        c.contents.push(Content::Custom(Box::new(Probe::failing(&calls))));
        c.contents.push(Content::Custom(Box::new(Probe::new(&after, 1))));

        let failure = c.paginate(start()).expect_err("fails");
        assert_eq!(calls.get(), 2);
        assert_eq!(after.get(), 0);
        match &failure.error {
            PaginationError::Custom(err) => assert_eq!(err.to_string(), "probe failed"),
            other => panic!("unexpected {other:?}"),
        }
        // what was laid out before the failure: heading + first probe
        assert_eq!(failure.blocks.len(), 1);
        assert_eq!(failure.blocks[0].contents.len(), 2);
        assert_eq!(failure.ctx.y, Pt(15.0));
    }

    #[test]
    fn a_failing_heading_is_relayed_unchanged() {
        let calls = Rc::new(Cell::new(0));
        let mut c = container();
        c.heading.set_text("\u{7f}");
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));
        let failure = c.paginate(start()).expect_err("fails");
        assert!(matches!(
            failure.error,
            PaginationError::UnsupportedGlyph { ch: '\u{7f}' }
        ));
        assert!(failure.blocks.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn absolute_containers_draw_at_their_origin_but_still_consume_space() {
        let calls = Rc::new(Cell::new(0));
        let mut c = container();
        c.positioning = Positioning::Absolute {
            x: Pt(50.0),
            y: Pt(120.0),
        };
        c.contents.push(Content::Custom(Box::new(Probe::new(&calls, 1))));

        let mut incoming = start();
        incoming.y = Pt(30.0);
        let result = c.paginate(incoming).expect("laid out");

        match &result.blocks[0].contents[0] {
            PageContents::Text(span) => assert_eq!((span.x, span.y), (Pt(50.0), Pt(120.0))),
            other => panic!("unexpected {other:?}"),
        }
        // heading (10) + probe (5), charged to the incoming cursor
        assert_eq!(result.ctx.y, Pt(45.0));
        assert_eq!(result.ctx.x, incoming.x);
    }
}
