use crate::content::{Drawable, Pagination};
use crate::image::ImageData;
use crate::layout::{DrawContext, Margins, Positioning, Sizing};
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::{PaginationError, PaginationFailure};
use id_arena::Id;
use log::trace;

/// A single line of text, positioned with its top-left corner at `(x, y)`
#[derive(Clone, PartialEq, Debug)]
pub struct TextSpan {
    pub text: String,
    pub font_size: Pt,
    pub x: Pt,
    pub y: Pt,
}

/// An image from the document's image store, drawn into a box whose top-left
/// corner is at `(x, y)`
#[derive(Clone, PartialEq, Debug)]
pub struct ImagePlacement {
    pub image: Id<ImageData>,
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

/// One positioned item on a page
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(TextSpan),
    Image(ImagePlacement),
}

impl PageContents {
    /// Shift the item by `(dx, dy)`
    pub fn translate(&mut self, dx: Pt, dy: Pt) {
        match self {
            PageContents::Text(span) => {
                span.x += dx;
                span.y += dy;
            }
            PageContents::Image(placement) => {
                placement.x += dx;
                placement.y += dy;
            }
        }
    }

    /// The top edge of the item
    pub fn y(&self) -> Pt {
        match self {
            PageContents::Text(span) => span.y,
            PageContents::Image(placement) => placement.y,
        }
    }
}

/// A page's worth (or part of a page's worth) of laid out content.
///
/// Pagination passes return page blocks whose contents are in page
/// coordinates; adjacent blocks that belong to the same page are combined with
/// [PageBlock::merge]. A page block can also be drawn as content in its own
/// right, in which case its contents are relative to its top-left corner and
/// are moved to wherever the block lands.
#[derive(Clone, PartialEq, Debug)]
pub struct PageBlock {
    pub width: Pt,
    pub height: Pt,
    pub contents: Vec<PageContents>,
    pub positioning: Positioning,
}

impl PageBlock {
    pub fn new(width: Pt, height: Pt) -> PageBlock {
        PageBlock {
            width,
            height,
            contents: Vec::default(),
            positioning: Positioning::Flow,
        }
    }

    /// An empty block covering the page `ctx` is on
    pub fn for_page(ctx: &DrawContext) -> PageBlock {
        PageBlock::new(ctx.page_width, ctx.page_height)
    }

    /// Place the block at absolute page coordinates when drawn
    pub fn set_pos(&mut self, x: Pt, y: Pt) {
        self.positioning = Positioning::Absolute { x, y };
    }

    pub fn add(&mut self, content: PageContents) {
        self.contents.push(content);
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Append the contents of `other`, which must belong to the same page.
    /// Merging an empty block changes nothing.
    pub fn merge(&mut self, other: PageBlock) {
        self.contents.extend(other.contents);
    }

    /// Lay out `content` inside this block, as if the block were a page with no
    /// margins. The content must fit in a single block; content that produces
    /// no blocks leaves this one unchanged.
    pub fn draw<D: Drawable + ?Sized>(&mut self, content: &D) -> Result<(), PaginationFailure> {
        let ctx = DrawContext::new(
            0,
            PageSize::new(self.width, self.height),
            Margins::default(),
        );
        let Pagination { mut blocks, ctx } = content.generate_page_blocks(ctx)?;
        if blocks.len() > 1 {
            return Err(PaginationFailure {
                error: PaginationError::BlockOverflow {
                    blocks: blocks.len(),
                },
                blocks,
                ctx,
            });
        }
        if let Some(block) = blocks.pop() {
            self.merge(block);
        }
        Ok(())
    }
}

impl Drawable for PageBlock {
    fn height(&self) -> Pt {
        self.height
    }

    fn width(&self) -> Pt {
        self.width
    }

    fn sizing(&self) -> Sizing {
        Sizing::Fixed
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
        Ok(place_fixed(ctx, self.positioning, self.height, |x, y| {
            self.contents
                .iter()
                .cloned()
                .map(|mut content| {
                    content.translate(x, y);
                    content
                })
                .collect()
        }))
    }
}

/// Shared placement for leaves with a fixed size.
///
/// Out-of-flow content is drawn at its own coordinates and leaves the context
/// alone. In-flow content that does not fit below the cursor moves to the top
/// of the next page, leaving an empty block behind for the current page; a
/// leaf taller than a whole page is placed at the top of its page regardless.
pub(crate) fn place_fixed<F>(
    ctx: DrawContext,
    positioning: Positioning,
    height: Pt,
    contents: F,
) -> Pagination
where
    F: FnOnce(Pt, Pt) -> Vec<PageContents>,
{
    if let Positioning::Absolute { x, y } = positioning {
        let mut block = PageBlock::for_page(&ctx);
        block.contents = contents(x, y);
        return Pagination {
            blocks: vec![block],
            ctx,
        };
    }

    let mut ctx = ctx;
    let mut blocks = Vec::with_capacity(2);
    if height > ctx.available_height() && !ctx.at_page_top() {
        trace!("{height}pt does not fit on page {}, breaking", ctx.page);
        blocks.push(PageBlock::for_page(&ctx));
        ctx = ctx.next_page();
    }

    let mut block = PageBlock::for_page(&ctx);
    block.contents = contents(ctx.x, ctx.y);
    blocks.push(block);
    ctx.y += height;

    Pagination { blocks, ctx }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x: f32, y: f32) -> PageContents {
        PageContents::Text(TextSpan {
            text: text.to_string(),
            font_size: Pt(10.0),
            x: Pt(x),
            y: Pt(y),
        })
    }

    fn page_ctx() -> DrawContext {
        DrawContext::new(0, PageSize::new(Pt(100.0), Pt(200.0)), Margins::all(Pt(10.0)))
    }

    fn stamp() -> PageBlock {
        let mut block = PageBlock::new(Pt(50.0), Pt(40.0));
        block.add(span("stamp", 0.0, 0.0));
        block
    }

    #[test]
    fn merge_appends_in_order() {
        let mut a = PageBlock::new(Pt(100.0), Pt(200.0));
        a.add(span("a", 0.0, 0.0));
        let mut b = a.clone();
        b.contents = vec![span("b", 0.0, 10.0), span("c", 0.0, 20.0)];
        a.merge(b);
        let texts: Vec<_> = a
            .contents
            .iter()
            .map(|c| match c {
                PageContents::Text(s) => s.text.as_str(),
                PageContents::Image(_) => "",
            })
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_is_associative() {
        let mk = |t: &str| {
            let mut b = PageBlock::new(Pt(1.0), Pt(1.0));
            b.add(span(t, 0.0, 0.0));
            b
        };
        let mut left = mk("x");
        left.merge(mk("y"));
        left.merge(mk("z"));

        let mut yz = mk("y");
        yz.merge(mk("z"));
        let mut right = mk("x");
        right.merge(yz);

        assert_eq!(left, right);
    }

    #[test]
    fn merging_an_empty_block_is_a_no_op() {
        let mut a = stamp();
        let before = a.clone();
        a.merge(PageBlock::new(Pt(1.0), Pt(1.0)));
        assert_eq!(a, before);
    }

    #[test]
    fn flows_at_the_cursor() {
        let mut ctx = page_ctx();
        ctx.y = Pt(30.0);
        let Pagination { blocks, ctx } = stamp().generate_page_blocks(ctx).expect("placed");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].contents, vec![span("stamp", 10.0, 30.0)]);
        assert_eq!(blocks[0].width, Pt(100.0));
        assert_eq!(ctx.y, Pt(70.0));
    }

    #[test]
    fn moves_to_the_next_page_when_it_does_not_fit() {
        let mut ctx = page_ctx();
        ctx.y = Pt(170.0);
        let Pagination { blocks, ctx } = stamp().generate_page_blocks(ctx).expect("placed");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_empty());
        assert_eq!(blocks[1].contents, vec![span("stamp", 10.0, 10.0)]);
        assert_eq!(ctx.page, 1);
        assert_eq!(ctx.y, Pt(50.0));
    }

    #[test]
    fn absolute_blocks_do_not_move_the_cursor() {
        let mut block = stamp();
        block.set_pos(Pt(60.0), Pt(5.0));
        let ctx = page_ctx();
        let result = block.generate_page_blocks(ctx).expect("placed");
        assert_eq!(result.ctx, ctx);
        assert_eq!(result.blocks[0].contents, vec![span("stamp", 60.0, 5.0)]);
    }

    #[test]
    fn draws_content_into_itself() {
        let mut target = PageBlock::new(Pt(100.0), Pt(100.0));
        target.draw(&stamp()).expect("fits");
        assert_eq!(target.contents, vec![span("stamp", 0.0, 0.0)]);
    }

    /// Returns the given number of empty blocks, one per page
    struct Spill(usize);

    impl Drawable for Spill {
        fn height(&self) -> Pt {
            Pt(0.0)
        }

        fn width(&self) -> Pt {
            Pt(0.0)
        }

        fn sizing(&self) -> Sizing {
            Sizing::Fixed
        }

        fn generate_page_blocks(&self, ctx: DrawContext) -> Result<Pagination, PaginationFailure> {
            Ok(Pagination {
                blocks: vec![PageBlock::for_page(&ctx); self.0],
                ctx: ctx.next_page(),
            })
        }
    }

    #[test]
    fn rejects_content_that_spans_blocks() {
        let mut target = stamp();
        let failure = target.draw(&Spill(2)).expect_err("overflows");
        assert!(matches!(
            failure.error,
            PaginationError::BlockOverflow { blocks: 2 }
        ));
        assert_eq!(failure.blocks.len(), 2);
        assert_eq!(target.contents.len(), 1);
    }

    #[test]
    fn drawing_nothing_leaves_the_block_alone() {
        let mut target = stamp();
        target.draw(&Spill(0)).expect("nothing to place");
        assert_eq!(target, stamp());
    }
}
