use crate::units::Pt;

/// Margins keep content away from the edges of a page or container. Nothing
/// prevents content from overflowing them; they only move the cursor that
/// layout starts from and bound where leaves break onto a new page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub left: Pt,
    pub right: Pt,
    pub top: Pt,
    pub bottom: Pt,
}

impl Margins {
    /// Create margins from individual components, in (left, right, top, bottom) order
    pub fn new(left: Pt, right: Pt, top: Pt, bottom: Pt) -> Margins {
        Margins {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// The components as a (left, right, top, bottom) tuple
    pub fn as_tuple(&self) -> (Pt, Pt, Pt, Pt) {
        (self.left, self.right, self.top, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_pairs_opposite_sides() {
        let margins = Margins::symmetric(Pt(10.0), Pt(25.0));
        assert_eq!(margins.as_tuple(), (Pt(25.0), Pt(25.0), Pt(10.0), Pt(10.0)));
        assert_eq!(Margins::all(Pt(3.0)), Margins::new(Pt(3.0), Pt(3.0), Pt(3.0), Pt(3.0)));
    }
}
