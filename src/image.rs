use crate::content::{Drawable, Pagination};
use crate::layout::{DrawContext, Positioning, Sizing};
use crate::page::{place_fixed, ImagePlacement, PageContents};
use crate::units::Pt;
use crate::PaginationFailure;
use id_arena::Id;
use image::{DynamicImage, GenericImageView};

/// Decoded image data, stored once in the [Document](crate::Document) and
/// referred to by [Id] from every place it is drawn
pub type ImageData = DynamicImage;

/// An image placed in the flow at a fixed size. New images take their size
/// from their pixel dimensions, one point per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub image: Id<ImageData>,
    width: Pt,
    height: Pt,
    positioning: Positioning,
}

impl Image {
    pub fn new(image: Id<ImageData>, width: Pt, height: Pt) -> Image {
        Image {
            image,
            width,
            height,
            positioning: Positioning::Flow,
        }
    }

    /// An image sized to the pixel dimensions of `data`
    pub fn from_data(image: Id<ImageData>, data: &ImageData) -> Image {
        let (width, height) = data.dimensions();
        Image::new(image, Pt(width as f32), Pt(height as f32))
    }

    pub fn set_size(&mut self, width: Pt, height: Pt) {
        self.width = width;
        self.height = height;
    }

    /// Scale both dimensions by `factor`
    pub fn scale(&mut self, factor: f32) {
        self.width = self.width * factor;
        self.height = self.height * factor;
    }

    /// Scale to `width`, keeping the aspect ratio
    pub fn scale_to_width(&mut self, width: Pt) {
        if self.width.0 > 0.0 {
            self.height = self.height * (width.0 / self.width.0);
        }
        self.width = width;
    }

    pub fn set_pos(&mut self, x: Pt, y: Pt) {
        self.positioning = Positioning::Absolute { x, y };
    }
}

impl Drawable for Image {
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
            vec![PageContents::Image(ImagePlacement {
                image: self.image,
                x,
                y,
                width: self.width,
                height: self.height,
            })]
        }))
    }
}
